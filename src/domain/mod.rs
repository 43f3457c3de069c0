//! Domain value objects and types.
//!
//! This module contains the validated field wrappers a contact is made of:
//! names, phone numbers, and birthdays. Each one validates at construction
//! time so an invalid value can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
