use std::cell::RefCell;
use std::rc::Rc;
use crate::books::domain::model::BookEntity;

pub mod domain;

// BookRef is a shared handle to a book, the library and its caller see the same borrower state.
pub type BookRef = Rc<RefCell<BookEntity>>;

pub fn book_ref(book: BookEntity) -> BookRef {
    Rc::new(RefCell::new(book))
}
