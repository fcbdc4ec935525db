//! A small fixed-capacity lending library: books and patrons are registered into numbered slots,
//! and patrons borrow, return and get suggestions for books according to their taste.

pub mod books;
pub mod core;
pub mod library;
pub mod patrons;
pub mod utils;
