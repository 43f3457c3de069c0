//! Command dispatch for the interactive assistant.
//!
//! Turns a line of user input into a [`Command`], runs it against the
//! address book, and renders the outcome (or the failure) as reply text.

pub mod dispatcher;
pub mod parser;

pub use dispatcher::{CommandDispatcher, CommandOutcome};
pub use parser::Command;
