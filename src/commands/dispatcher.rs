//! Execution of parsed commands against the address book.

use crate::book::AddressBook;
use crate::commands::parser::Command;
use crate::domain::{Name, Phone};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// What the command loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Print the reply and wait for the next command
    Reply(String),
    /// Print the farewell, save the book and stop
    Exit(String),
}

impl CommandOutcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Reply(message) | Self::Exit(message) => message,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

/// Runs assistant commands against an address book owned by the caller.
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    upcoming_days: u64,
}

impl CommandDispatcher {
    /// Create a dispatcher whose `birthdays` command looks `upcoming_days` ahead.
    pub fn new(upcoming_days: u64) -> Self {
        Self { upcoming_days }
    }

    /// Parse and run one line of input, rendering failures as reply text.
    pub fn handle_line(&self, line: &str, book: &mut AddressBook, today: NaiveDate) -> CommandOutcome {
        let result = line
            .parse::<Command>()
            .and_then(|command| self.execute(command, book, today));

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(input = line.trim(), error = ?e, "Command failed");
                CommandOutcome::Reply(e.to_string())
            }
        }
    }

    /// Run a parsed command.
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` when an argument fails validation or the
    /// named contact does not exist. The book is left unchanged in that case.
    pub fn execute(
        &self,
        command: Command,
        book: &mut AddressBook,
        today: NaiveDate,
    ) -> CommandResult<CommandOutcome> {
        debug!(?command, "Executing command");

        let reply = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phones } => add_contact(book, &name, &phones)?,
            Command::Change { name, phone } => change_phone(book, &name, &phone)?,
            Command::Phone { name } => show_phones(book, &name)?,
            Command::All => show_all(book),
            Command::AddBirthday { name, birthday } => {
                let record = find_record_mut(book, &name)?;
                record.add_birthday(&birthday)?;
                format!("Birthday added for {}.", name)
            }
            Command::ShowBirthday { name } => match book.find(&name).and_then(Record::birthday) {
                Some(birthday) => format!("Birthday for {}: {}", name, birthday),
                None => format!("Birthday for contact '{}' not found.", name),
            },
            Command::Birthdays => self.show_upcoming(book, today),
            Command::Delete { name } => {
                if book.find(&name).is_none() {
                    return Err(CommandError::ContactNotFound(name));
                }
                book.delete(&name);
                format!("Contact '{}' deleted.", name)
            }
            Command::Exit => return Ok(CommandOutcome::Exit("Good bye!".to_string())),
        };

        Ok(CommandOutcome::Reply(reply))
    }

    fn show_upcoming(&self, book: &AddressBook, today: NaiveDate) -> String {
        let upcoming = book.upcoming_birthdays_within(today, self.upcoming_days);
        if upcoming.is_empty() {
            return "No upcoming birthdays.".to_string();
        }

        let mut lines = vec!["Upcoming birthdays:".to_string()];
        lines.extend(
            upcoming
                .iter()
                .map(|entry| format!("{}: {}", entry.name, entry.birthday)),
        );
        lines.join("\n")
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new(crate::book::UPCOMING_WINDOW_DAYS)
    }
}

fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

/// Every phone is validated before the book is touched.
fn add_contact(book: &mut AddressBook, name: &str, phones: &[String]) -> CommandResult<String> {
    for phone in phones {
        Phone::new(phone.as_str())?;
    }

    if let Some(record) = book.find_mut(name) {
        for phone in phones {
            record.add_phone(phone)?;
        }
        return Ok(format!("Added phone(s) for existing contact '{}'.", name));
    }

    let mut record = Record::with_name(Name::new(name)?);
    for phone in phones {
        record.add_phone(phone)?;
    }
    book.add_record(record);
    Ok(format!("New contact '{}' added with phone(s).", name))
}

fn change_phone(book: &mut AddressBook, name: &str, new_phone: &str) -> CommandResult<String> {
    let record = find_record_mut(book, name)?;
    let first = record
        .phones()
        .first()
        .map(|p| p.as_str().to_string())
        .ok_or_else(|| CommandError::NoPhones(name.to_string()))?;

    record.edit_phone(&first, new_phone)?;
    Ok(format!("Phone number changed for contact '{}'.", name))
}

fn show_phones(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

    if record.phones().is_empty() {
        return Err(CommandError::NoPhones(name.to_string()));
    }

    let phones = record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("Phone(s) for {}: {}", name, phones))
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found.".to_string();
    }

    let mut lines = vec!["All contacts:".to_string()];
    lines.extend(book.records().map(Record::to_string));
    lines.join("\n")
}
