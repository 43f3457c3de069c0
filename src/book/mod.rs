//! The in-memory address book and its birthday queries.

pub mod address_book;

pub use address_book::{AddressBook, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
