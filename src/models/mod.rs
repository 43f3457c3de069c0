//! Data models for the address book.
//!
//! This module contains the contact record that aggregates the validated
//! field values from [`crate::domain`].

pub mod record;

pub use record::Record;
