use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::patrons::domain::Patron;

// PatronEntity abstracts a library member with taste weights per book rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatronEntity {
    pub first_name: String,
    pub last_name: String,
    pub comic_tendency: i32,
    pub dramatic_tendency: i32,
    pub educational_tendency: i32,
    pub enjoyment_threshold: i64,
}

impl PatronEntity {
    pub fn new(first_name: &str, last_name: &str, comic_tendency: i32, dramatic_tendency: i32,
               educational_tendency: i32, enjoyment_threshold: i64) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            comic_tendency,
            dramatic_tendency,
            educational_tendency,
            enjoyment_threshold,
        }
    }

    pub fn string_representation(&self) -> String {
        self.to_string()
    }
}

impl Patron for PatronEntity {
    fn book_score(&self, book: &dyn Book) -> i64 {
        i64::from(self.comic_tendency) * i64::from(book.comic_value())
            + i64::from(self.dramatic_tendency) * i64::from(book.dramatic_value())
            + i64::from(self.educational_tendency) * i64::from(book.educational_value())
    }

    fn will_enjoy_book(&self, book: &dyn Book) -> bool {
        self.book_score(book) >= self.enjoyment_threshold
    }
}

impl Display for PatronEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
