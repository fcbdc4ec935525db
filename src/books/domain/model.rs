use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::library::{BookStatus, PatronId};

// BookEntity abstracts a single physical book; two copies of the same title are separate entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub year_of_publication: i32,
    pub comic_value: i32,
    pub dramatic_value: i32,
    pub educational_value: i32,
    pub borrower_id: Option<PatronId>,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, year_of_publication: i32,
               comic_value: i32, dramatic_value: i32, educational_value: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year_of_publication,
            comic_value,
            dramatic_value,
            educational_value,
            borrower_id: None,
        }
    }

    pub fn literary_value(&self) -> i64 {
        i64::from(self.comic_value) + i64::from(self.dramatic_value) + i64::from(self.educational_value)
    }

    pub fn status(&self) -> BookStatus {
        match self.borrower_id {
            Some(_) => BookStatus::CheckedOut,
            None => BookStatus::Available,
        }
    }

    pub fn string_representation(&self) -> String {
        self.to_string()
    }
}

impl Book for BookEntity {
    fn comic_value(&self) -> i32 {
        self.comic_value
    }

    fn dramatic_value(&self) -> i32 {
        self.dramatic_value
    }

    fn educational_value(&self) -> i32 {
        self.educational_value
    }

    fn current_borrower_id(&self) -> Option<PatronId> {
        self.borrower_id
    }

    fn set_borrower_id(&mut self, patron_id: PatronId) {
        self.borrower_id = Some(patron_id);
    }

    fn return_book(&mut self) {
        self.borrower_id = None;
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[{},{},{},{}]", self.title, self.author, self.year_of_publication, self.literary_value())
    }
}
