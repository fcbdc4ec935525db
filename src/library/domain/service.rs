use std::rc::Rc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::books::BookRef;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Configuration;
use crate::core::library::{BookId, LibraryError, LibraryResult, PatronId};
use crate::library::domain::LibraryService;
use crate::patrons::PatronRef;
use crate::patrons::domain::Patron;
use crate::patrons::domain::model::PatronEntity;

pub struct LibraryServiceImpl {
    config: Configuration,
    books: Vec<BookRef>,
    patrons: Vec<PatronRef>,
}

// LibrarySnapshot is a point in time copy of the catalog, suitable for serialization.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    pub config: Configuration,
    pub books: Vec<BookEntity>,
    pub patrons: Vec<PatronEntity>,
}

impl LibraryServiceImpl {
    pub fn new(config: &Configuration) -> Self {
        Self {
            config: *config,
            books: Vec::new(),
            patrons: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> LibrarySnapshot {
        LibrarySnapshot {
            config: self.config,
            books: self.books.iter().map(|b| b.borrow().clone()).collect(),
            patrons: self.patrons.iter().map(|p| p.as_ref().clone()).collect(),
        }
    }

    fn find_patron(&self, patron_id: PatronId) -> LibraryResult<PatronRef> {
        self.patron(patron_id).ok_or_else(|| LibraryError::not_found(
            format!("patron {} is not registered", patron_id).as_str()))
    }

    fn find_book(&self, book_id: BookId) -> LibraryResult<BookRef> {
        self.book(book_id).ok_or_else(|| LibraryError::not_found(
            format!("book {} is not in the library", book_id).as_str()))
    }

    // available_books yields books nobody holds, in slot order.
    fn available_books(&self) -> impl Iterator<Item=&BookRef> {
        self.books.iter().filter(|b| b.borrow().current_borrower_id().is_none())
    }
}

// find_or_insert returns the slot of an already present handle, otherwise appends it to the
// first free slot. Handles are compared by identity, not by value.
fn find_or_insert<T>(slots: &mut Vec<Rc<T>>, entity: &Rc<T>, capacity: usize, kind: &str) -> LibraryResult<usize> {
    if let Some(id) = slots.iter().position(|s| Rc::ptr_eq(s, entity)) {
        return Ok(id);
    }
    if slots.len() >= capacity {
        return Err(LibraryError::capacity_exceeded(
            format!("no free slot for {}", kind).as_str(), capacity));
    }
    slots.push(Rc::clone(entity));
    Ok(slots.len() - 1)
}

impl LibraryService for LibraryServiceImpl {
    fn config(&self) -> &Configuration {
        &self.config
    }

    fn add_book_to_library(&mut self, book: &BookRef) -> Option<BookId> {
        match find_or_insert(&mut self.books, book, self.config.max_book_capacity, "book") {
            Ok(id) => {
                debug!(book_id = id, "book added to library");
                Some(id)
            }
            Err(err) => {
                warn!("could not add book: {}", err);
                None
            }
        }
    }

    fn register_patron_to_library(&mut self, patron: &PatronRef) -> Option<PatronId> {
        match find_or_insert(&mut self.patrons, patron, self.config.max_patron_capacity, "patron") {
            Ok(id) => {
                debug!(patron_id = id, "patron registered");
                Some(id)
            }
            Err(err) => {
                warn!("could not register patron: {}", err);
                None
            }
        }
    }

    fn is_book_id_valid(&self, book_id: BookId) -> bool {
        book_id < self.books.len()
    }

    fn is_patron_id_valid(&self, patron_id: PatronId) -> bool {
        patron_id < self.patrons.len()
    }

    fn get_book_id(&self, book: &BookRef) -> Option<BookId> {
        self.books.iter().position(|b| Rc::ptr_eq(b, book))
    }

    fn get_patron_id(&self, patron: &PatronRef) -> Option<PatronId> {
        self.patrons.iter().position(|p| Rc::ptr_eq(p, patron))
    }

    fn book(&self, book_id: BookId) -> Option<BookRef> {
        self.books.get(book_id).cloned()
    }

    fn patron(&self, patron_id: PatronId) -> Option<PatronRef> {
        self.patrons.get(patron_id).cloned()
    }

    fn book_count(&self) -> usize {
        self.books.len()
    }

    fn patron_count(&self) -> usize {
        self.patrons.len()
    }

    fn is_book_available(&self, book_id: BookId) -> bool {
        self.books.get(book_id)
            .map_or(false, |b| b.borrow().current_borrower_id().is_none())
    }

    fn book_borrowed_for_patron_id(&self, patron_id: PatronId) -> usize {
        if !self.is_patron_id_valid(patron_id) {
            return 0;
        }
        self.books.iter()
            .filter(|b| b.borrow().current_borrower_id() == Some(patron_id))
            .count()
    }

    fn checkout(&mut self, book_id: BookId, patron_id: PatronId) -> LibraryResult<()> {
        let patron = self.find_patron(patron_id)?;
        let book = self.find_book(book_id)?;

        if !patron.will_enjoy_book(&*book.borrow()) {
            return Err(LibraryError::not_granted(
                format!("patron {} will not enjoy book {}", patron_id, book_id).as_str(),
                Some("not_enjoyable".to_string())));
        }

        let borrowed = self.book_borrowed_for_patron_id(patron_id);
        if borrowed >= self.config.max_borrowed_books {
            return Err(LibraryError::not_granted(
                format!("patron {} already borrowed {} books", patron_id, borrowed).as_str(),
                Some("borrow_limit".to_string())));
        }

        if !self.is_book_available(book_id) {
            return Err(LibraryError::unavailable(
                format!("book {} is already borrowed", book_id).as_str(),
                Some("checked_out".to_string())));
        }

        book.borrow_mut().set_borrower_id(patron_id);
        debug!(book_id, patron_id, "book borrowed");
        Ok(())
    }

    fn borrow_book(&mut self, book_id: BookId, patron_id: PatronId) -> bool {
        match self.checkout(book_id, patron_id) {
            Ok(()) => true,
            Err(err) => {
                debug!(book_id, patron_id, "borrow refused: {}", err);
                false
            }
        }
    }

    fn return_book(&mut self, book_id: BookId) {
        if let Some(book) = self.books.get(book_id) {
            book.borrow_mut().return_book();
            debug!(book_id, "book returned");
        }
    }

    fn suggest_book_to_patron(&self, patron_id: PatronId) -> Option<BookRef> {
        let patron = self.patrons.get(patron_id)?;
        self.available_books()
            .find(|b| patron.will_enjoy_book(&*b.borrow()))
            .cloned()
    }

    fn suggest_favorite_book_to_patron(&self, patron_id: PatronId) -> Option<BookRef> {
        let patron = self.patrons.get(patron_id)?;
        let mut favorite: Option<(i64, &BookRef)> = None;
        for book in self.available_books() {
            let entity = book.borrow();
            if !patron.will_enjoy_book(&*entity) {
                continue;
            }
            let score = patron.book_score(&*entity);
            if favorite.map_or(true, |(best, _)| score > best) {
                favorite = Some((score, book));
            }
        }
        favorite.map(|(_, book)| Rc::clone(book))
    }
}
