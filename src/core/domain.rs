use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

const DEFAULT_BOOK_CAPACITY: usize = 100;
const DEFAULT_BORROWED_BOOKS: usize = 3;
const DEFAULT_PATRON_CAPACITY: usize = 100;

// Configuration abstracts capacity options for a library
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct Configuration {
    pub max_book_capacity: usize,
    pub max_borrowed_books: usize,
    pub max_patron_capacity: usize,
}

impl Configuration {
    pub fn new(max_book_capacity: usize, max_borrowed_books: usize, max_patron_capacity: usize) -> Self {
        Configuration {
            max_book_capacity,
            max_borrowed_books,
            max_patron_capacity,
        }
    }

    // from_json parses a configuration document, absent keys keep their defaults.
    pub fn from_json(json: &str) -> LibraryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_BOOK_CAPACITY, DEFAULT_BORROWED_BOOKS, DEFAULT_PATRON_CAPACITY)
    }
}
