//! Parsing of user input lines into commands.

use crate::error::CommandError;
use std::str::FromStr;

/// A fully parsed assistant command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Greeting
    Hello,
    /// Create a contact or append phones to an existing one
    Add { name: String, phones: Vec<String> },
    /// Replace the contact's first phone
    Change { name: String, phone: String },
    /// Show the contact's phones
    Phone { name: String },
    /// List every contact
    All,
    /// Set the contact's birthday
    AddBirthday { name: String, birthday: String },
    /// Show the contact's birthday
    ShowBirthday { name: String },
    /// List birthdays in the upcoming window
    Birthdays,
    /// Remove a contact
    Delete { name: String },
    /// Save and leave (`close` or `exit`)
    Exit,
}

impl Command {
    /// Usage text for the command named `command`, if it takes arguments.
    pub fn usage(command: &str) -> Option<&'static str> {
        match command {
            "add" => Some("add [name] [phone] [phone...]"),
            "change" => Some("change [name] [new phone]"),
            "phone" => Some("phone [name]"),
            "add-birthday" => Some("add-birthday [name] [DD.MM.YYYY]"),
            "show-birthday" => Some("show-birthday [name]"),
            "delete" => Some("delete [name]"),
            _ => None,
        }
    }
}

fn usage_error(command: &str, usage: &str) -> CommandError {
    CommandError::Usage(format!(
        "Invalid number of arguments for '{}' command. Usage: {}",
        command, usage
    ))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let command = tokens.next().ok_or(CommandError::EmptyInput)?;
        let args: Vec<String> = tokens.map(str::to_string).collect();

        match (command, args.as_slice()) {
            ("hello", _) => Ok(Command::Hello),
            ("all", _) => Ok(Command::All),
            ("birthdays", _) => Ok(Command::Birthdays),
            ("close" | "exit", _) => Ok(Command::Exit),

            ("add", [name, phones @ ..]) if !phones.is_empty() => Ok(Command::Add {
                name: name.clone(),
                phones: phones.to_vec(),
            }),
            ("change", [name, phone]) => Ok(Command::Change {
                name: name.clone(),
                phone: phone.clone(),
            }),
            ("phone", [name]) => Ok(Command::Phone { name: name.clone() }),
            ("add-birthday", [name, birthday]) => Ok(Command::AddBirthday {
                name: name.clone(),
                birthday: birthday.clone(),
            }),
            ("show-birthday", [name]) => Ok(Command::ShowBirthday { name: name.clone() }),
            ("delete", [name]) => Ok(Command::Delete { name: name.clone() }),

            (other, _) => match Command::usage(other) {
                Some(usage) => Err(usage_error(other, usage)),
                None => Err(CommandError::UnknownCommand(other.to_string())),
            },
        }
    }
}
