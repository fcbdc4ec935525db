use std::rc::Rc;
use crate::patrons::domain::model::PatronEntity;

pub mod domain;

// PatronRef is a shared handle to a registered patron.
pub type PatronRef = Rc<PatronEntity>;

pub fn patron_ref(patron: PatronEntity) -> PatronRef {
    Rc::new(patron)
}
