//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text pattern birthdays are parsed from and rendered to.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A calendar date written as `DD.MM.YYYY`.
///
/// The parsed date is the canonical value; rendering always produces the
/// same zero-padded `DD.MM.YYYY` text it was parsed from.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("05.06.2000").unwrap();
/// assert_eq!(birthday.to_string(), "05.06.2000");
/// assert!(Birthday::new("31.02.2000").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not have
    /// two-digit day and month and a four-digit year separated by dots, or
    /// if it names a date that does not exist.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();

        if !BIRTHDAY_REGEX.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The month and day of this birthday placed in `year`.
    ///
    /// A 29 February birthday falls on 1 March in years without a leap day.
    /// Returns `None` only if `year` is outside the supported date range.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// The first anniversary of this birthday on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.in_year(today.year())?;
        if this_year < today {
            self.in_year(today.year() + 1)
        } else {
            Some(this_year)
        }
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("05.06.2000").unwrap();
        assert_eq!(birthday.date(), date(2000, 6, 5));
    }

    #[test]
    fn test_birthday_renders_original_text() {
        for text in ["01.01.1990", "29.02.2000", "31.12.2024", "09.09.0999"] {
            assert_eq!(Birthday::new(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_birthday_rejects_bad_shape() {
        assert!(Birthday::new("5.06.2000").is_err());
        assert!(Birthday::new("05.6.2000").is_err());
        assert!(Birthday::new("05.06.00").is_err());
        assert!(Birthday::new("2000-06-05").is_err());
        assert!(Birthday::new("05/06/2000").is_err());
        assert!(Birthday::new(" 05.06.2000").is_err());
        assert!(Birthday::new("").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.02.2000").is_err());
        assert!(Birthday::new("29.02.2001").is_err());
        assert!(Birthday::new("00.01.2000").is_err());
        assert!(Birthday::new("12.13.2000").is_err());
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = Birthday::new("05.06.2000").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2024, 6, 1)),
            Some(date(2024, 6, 5))
        );
    }

    #[test]
    fn test_next_occurrence_today_is_not_advanced() {
        let birthday = Birthday::new("01.06.1985").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2024, 6, 1)),
            Some(date(2024, 6, 1))
        );
    }

    #[test]
    fn test_next_occurrence_already_passed_moves_to_next_year() {
        let birthday = Birthday::new("01.01.2000").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2024, 6, 1)),
            Some(date(2025, 1, 1))
        );
    }

    #[test]
    fn test_leap_day_in_non_leap_year_falls_on_march_first() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(birthday.in_year(2023), Some(date(2023, 3, 1)));
        assert_eq!(birthday.in_year(2024), Some(date(2024, 2, 29)));
        assert_eq!(
            birthday.next_occurrence(date(2023, 2, 27)),
            Some(date(2023, 3, 1))
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("05.06.2000").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"05.06.2000\"");

        let parsed: Birthday = serde_json::from_str("\"05.06.2000\"").unwrap();
        assert_eq!(parsed, birthday);

        let invalid: Result<Birthday, _> = serde_json::from_str("\"2000-06-05\"");
        assert!(invalid.is_err());
    }
}
