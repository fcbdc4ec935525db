use crate::books::domain::Book;

pub mod model;

// Patron scores books against its own taste and decides whether a book is worth borrowing.
pub trait Patron {
    fn book_score(&self, book: &dyn Book) -> i64;
    fn will_enjoy_book(&self, book: &dyn Book) -> bool;
}
