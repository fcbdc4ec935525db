use crate::books::BookRef;
use crate::core::domain::Configuration;
use crate::core::library::{BookId, LibraryResult, PatronId};
use crate::patrons::PatronRef;

pub mod service;

// LibraryService keeps the catalog of books and registered patrons and enforces lending rules.
// Ids are the slot index an entity got when it was first added and are never reused.
pub trait LibraryService {
    fn config(&self) -> &Configuration;

    // Returns the existing id when the same book handle was already added, None when full.
    fn add_book_to_library(&mut self, book: &BookRef) -> Option<BookId>;
    fn register_patron_to_library(&mut self, patron: &PatronRef) -> Option<PatronId>;

    fn is_book_id_valid(&self, book_id: BookId) -> bool;
    fn is_patron_id_valid(&self, patron_id: PatronId) -> bool;
    fn get_book_id(&self, book: &BookRef) -> Option<BookId>;
    fn get_patron_id(&self, patron: &PatronRef) -> Option<PatronId>;
    fn book(&self, book_id: BookId) -> Option<BookRef>;
    fn patron(&self, patron_id: PatronId) -> Option<PatronRef>;
    fn book_count(&self) -> usize;
    fn patron_count(&self) -> usize;

    fn is_book_available(&self, book_id: BookId) -> bool;
    fn book_borrowed_for_patron_id(&self, patron_id: PatronId) -> usize;

    // checkout lends a book and reports which rule refused it on failure.
    fn checkout(&mut self, book_id: BookId, patron_id: PatronId) -> LibraryResult<()>;
    fn borrow_book(&mut self, book_id: BookId, patron_id: PatronId) -> bool;
    fn return_book(&mut self, book_id: BookId);

    // First available book the patron will enjoy, in slot order.
    fn suggest_book_to_patron(&self, patron_id: PatronId) -> Option<BookRef>;
    // Highest scoring available book the patron will enjoy; the earliest slot wins ties.
    fn suggest_favorite_book_to_patron(&self, patron_id: PatronId) -> Option<BookRef>;
}
