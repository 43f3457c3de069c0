//! Address book keyed by contact name.

use crate::domain::Birthday;
use crate::models::Record;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Days after today covered by [`AddressBook::get_upcoming_birthdays`].
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// A contact whose birthday falls inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name the record is filed under
    pub name: String,

    /// The stored birthday (original year)
    pub birthday: Birthday,

    /// Date the birthday is next celebrated
    pub next_occurrence: NaiveDate,
}

/// All contacts, keyed by name.
///
/// Records are kept in insertion order so listings and birthday queries
/// are stable between calls. Replacing a record under an existing name
/// keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BookSnapshot")]
pub struct AddressBook {
    records: Vec<Record>,
}

/// Serialized shape of the book; rebuilt through `add_record` so duplicate
/// names in a file collapse the same way they do at runtime.
#[derive(Deserialize)]
struct BookSnapshot {
    #[serde(default)]
    records: Vec<Record>,
}

impl From<BookSnapshot> for AddressBook {
    fn from(snapshot: BookSnapshot) -> Self {
        let mut book = AddressBook::new();
        for record in snapshot.records {
            book.add_record(record);
        }
        book
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!(name = %record.name(), "Replacing existing record");
                self.records[index] = record;
            }
            None => {
                debug!(name = %record.name(), "Adding new record");
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record filed under `name`. Unknown names are ignored.
    pub fn delete(&mut self, name: &str) {
        if let Some(index) = self.position(name) {
            debug!(name, "Deleting record");
            self.records.remove(index);
        }
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday falls between `today` and seven days
    /// later, both ends included.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, UPCOMING_WINDOW_DAYS)
    }

    /// Contacts whose next birthday falls in `[today, today + days]`.
    ///
    /// Results follow the book's insertion order, not the calendar.
    pub fn upcoming_birthdays_within(&self, today: NaiveDate, days: u64) -> Vec<UpcomingBirthday> {
        let Some(window_end) = today.checked_add_days(Days::new(days)) else {
            return Vec::new();
        };

        self.records
            .iter()
            .filter_map(|record| {
                let birthday = *record.birthday()?;
                let next_occurrence = birthday.next_occurrence(today)?;
                (today <= next_occurrence && next_occurrence <= window_end).then(|| {
                    UpcomingBirthday {
                        name: record.name().to_string(),
                        birthday,
                        next_occurrence,
                    }
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}
