//! Contact Assistant - a command-line address book for names, phone numbers and birthdays.
//!
//! The library holds the in-memory address book and everything around it; the
//! binary in `main.rs` is a thin read-eval-print loop on top.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone, birthday)
//! - **models**: The contact record built from those fields
//! - **book**: The address book and the upcoming-birthdays query
//! - **repositories**: Loading and saving the book between runs
//! - **commands**: Parsing user input and running it against the book
//! - **session**: The interactive loop that owns the book between load and save
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use book::{AddressBook, UpcomingBirthday};
pub use commands::{Command, CommandDispatcher, CommandOutcome};
pub use config::Config;
pub use error::{CommandError, ConfigError, SessionError, StorageError};
pub use models::Record;
pub use repositories::{BookRepository, JsonFileRepository};
