//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file could not be encoded or decoded
    #[error("Storage format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors a single assistant command can end with.
///
/// Every variant is recoverable: the command loop reports it and keeps going.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing was typed
    #[error("No command entered. Please try again.")]
    EmptyInput,

    /// The command name is not recognised
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// Wrong number or shape of arguments; carries the usage message
    #[error("{0}")]
    Usage(String),

    /// A phone or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record is filed under the given name
    #[error("Contact '{0}' not found.")]
    ContactNotFound(String),

    /// The record exists but holds no phone numbers
    #[error("No phone numbers found for {0}.")]
    NoPhones(String),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The address book could not be loaded or saved
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Reading commands or writing replies failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;
