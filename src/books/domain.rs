use crate::core::library::PatronId;

pub mod model;

// Book is the surface a library needs from a lendable item: fixed ratings and a borrower slot.
pub trait Book {
    fn comic_value(&self) -> i32;
    fn dramatic_value(&self) -> i32;
    fn educational_value(&self) -> i32;
    fn current_borrower_id(&self) -> Option<PatronId>;
    fn set_borrower_id(&mut self, patron_id: PatronId);
    fn return_book(&mut self);
}
