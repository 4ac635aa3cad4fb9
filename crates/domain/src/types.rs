// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;

/// Represents a reservation holder's name.
///
/// Names are the soft identity of a reservation: two reservations with the
/// same name are considered duplicates regardless of any other field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    /// The name value (1-30 printable characters).
    value: String,
}

impl Name {
    /// Maximum number of characters in a name.
    pub const MAX_LENGTH: usize = 30;

    /// Human-readable constraint for error messages.
    pub const CONSTRAINT: &'static str =
        "Names must be 1-30 printable characters and must not be blank";

    /// Creates a new `Name`.
    ///
    /// # Arguments
    ///
    /// * `value` - The name text
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the value is blank, longer than
    /// 30 characters, or contains control characters.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let char_count: usize = value.chars().count();
        if value.trim().is_empty() || char_count > Self::MAX_LENGTH {
            return Err(DomainError::InvalidName(String::from(Self::CONSTRAINT)));
        }
        if value.chars().any(char::is_control) {
            return Err(DomainError::InvalidName(String::from(Self::CONSTRAINT)));
        }
        Ok(Self {
            value: String::from(value),
        })
    }

    /// Returns the name text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a contact phone number.
///
/// The last four digits feed into the derived reservation identification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone {
    /// The phone digits (exactly 8).
    value: String,
}

impl Phone {
    /// Number of digits a phone number must have.
    pub const LENGTH: usize = 8;

    /// Human-readable constraint for error messages.
    pub const CONSTRAINT: &'static str =
        "Phone numbers must contain only digits and be exactly 8 digits long";

    /// Creates a new `Phone`.
    ///
    /// # Arguments
    ///
    /// * `value` - The phone digit string
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPhone` if the value is not exactly
    /// 8 ASCII digits.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.len() != Self::LENGTH || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidPhone(String::from(Self::CONSTRAINT)));
        }
        Ok(Self {
            value: String::from(value),
        })
    }

    /// Returns the phone digits.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the last four digits, as used by identification derivation.
    #[must_use]
    pub fn last_four(&self) -> &str {
        &self.value[Self::LENGTH - 4..]
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents the calendar date a reservation starts on.
///
/// Input must be `DD/MM/YYYY` with mandatory leading zeros. Validation is
/// real calendar validation: day 00, month 13, and impossible dates such as
/// 30 February are all rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StartDate {
    /// The validated calendar date.
    date: Date,
}

impl StartDate {
    /// Human-readable constraint for error messages.
    pub const CONSTRAINT: &'static str =
        "Dates must be valid calendar dates in DD/MM/YYYY format with leading zeros";

    /// Creates a new `StartDate` from a `DD/MM/YYYY` string.
    ///
    /// # Arguments
    ///
    /// * `value` - The date text
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStartDate` if the shape is wrong or the
    /// date does not exist on the calendar.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let bytes: &[u8] = value.as_bytes();
        let shape_ok: bool = bytes.len() == 10
            && bytes[2] == b'/'
            && bytes[5] == b'/'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
        if !shape_ok {
            return Err(DomainError::InvalidStartDate(String::from(
                Self::CONSTRAINT,
            )));
        }

        let format: &[time::format_description::BorrowedFormatItem<'_>] =
            time::macros::format_description!("[day]/[month]/[year]");
        let date: Date = Date::parse(value, &format)
            .map_err(|_| DomainError::InvalidStartDate(String::from(Self::CONSTRAINT)))?;
        Ok(Self { date })
    }

    /// Creates a `StartDate` directly from a calendar date.
    #[must_use]
    pub const fn from_date(date: Date) -> Self {
        Self { date }
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the date as the 8-digit `ddMMyyyy` identification segment.
    #[must_use]
    pub fn compact(&self) -> String {
        format!(
            "{:02}{:02}{:04}",
            self.date.day(),
            u8::from(self.date.month()),
            self.date.year()
        )
    }
}

impl std::fmt::Display for StartDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04}",
            self.date.day(),
            u8::from(self.date.month()),
            self.date.year()
        )
    }
}

/// Represents the 24-hour time a reservation starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StartTime {
    /// Hour of day (00-23).
    hour: u8,
    /// Minute of hour (00-59).
    minute: u8,
}

impl StartTime {
    /// Human-readable constraint for error messages.
    pub const CONSTRAINT: &'static str =
        "Times must be 24-hour HHMM values with hour 00-23 and minute 00-59";

    /// Creates a new `StartTime` from an `HHMM` string.
    ///
    /// # Arguments
    ///
    /// * `value` - The time text
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStartTime` if the value is not four
    /// digits or hour/minute are out of range.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidStartTime(String::from(
                Self::CONSTRAINT,
            )));
        }
        let hour: u8 = value[0..2]
            .parse()
            .map_err(|_| DomainError::InvalidStartTime(String::from(Self::CONSTRAINT)))?;
        let minute: u8 = value[2..4]
            .parse()
            .map_err(|_| DomainError::InvalidStartTime(String::from(Self::CONSTRAINT)))?;
        if hour > 23 || minute > 59 {
            return Err(DomainError::InvalidStartTime(String::from(
                Self::CONSTRAINT,
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Returns the hour of day.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute of hour.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the number of minutes since midnight.
    #[must_use]
    pub const fn minutes_from_midnight(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

impl std::fmt::Display for StartTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}

/// Represents how long a reservation lasts, in half-hour increments.
///
/// Valid renderings are `0`, `0.5`, or an integer with an optional `.5`
/// suffix (`2`, `2.5`, ...). The value is stored as a count of half hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Duration {
    /// Number of half-hour increments.
    half_hours: u16,
}

impl Duration {
    /// Human-readable constraint for error messages.
    pub const CONSTRAINT: &'static str =
        "Durations must be non-negative half-hour increments such as 0, 0.5, 1 or 1.5";

    /// Creates a new `Duration` from its textual rendering.
    ///
    /// # Arguments
    ///
    /// * `value` - The duration text
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDuration` if the value does not match
    /// the half-hour grammar.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidDuration(String::from(Self::CONSTRAINT));

        let (whole, half): (&str, bool) = match value.split_once('.') {
            Some((whole, "5")) => (whole, true),
            Some(_) => return Err(invalid()),
            None => (value, false),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // No leading zeros: "0" itself is fine, "00" and "01" are not.
        if whole.len() > 1 && whole.starts_with('0') {
            return Err(invalid());
        }

        let hours: u16 = whole.parse().map_err(|_| invalid())?;
        let half_hours: u16 = hours
            .checked_mul(2)
            .and_then(|h| h.checked_add(u16::from(half)))
            .ok_or_else(invalid)?;
        Ok(Self { half_hours })
    }

    /// Returns the duration in minutes.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.half_hours as u32 * 30
    }

    /// Returns whether the duration is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.half_hours == 0
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.half_hours % 2 == 0 {
            write!(f, "{}", self.half_hours / 2)
        } else {
            write!(f, "{}.5", self.half_hours / 2)
        }
    }
}

/// Represents the party size of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pax {
    /// Number of guests (1-999).
    value: u16,
}

impl Pax {
    /// Largest accepted party size.
    pub const MAX: u16 = 999;

    /// Human-readable constraint for error messages.
    pub const CONSTRAINT: &'static str =
        "Pax must be a positive integer without leading zeros, at most 999";

    /// Creates a new `Pax` from its textual rendering.
    ///
    /// # Arguments
    ///
    /// * `value` - The party size text
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPax` if the value is not a positive
    /// integer without leading zeros, or exceeds the bound.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidPax(String::from(Self::CONSTRAINT));
        if value.is_empty() || value.starts_with('0') || !value.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let count: u16 = value.parse().map_err(|_| invalid())?;
        if count > Self::MAX {
            return Err(invalid());
        }
        Ok(Self { value: count })
    }

    /// Returns the number of guests.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.value
    }
}

impl std::fmt::Display for Pax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a table label: one uppercase letter followed by 1-3 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    /// The table label, e.g. `A12`.
    value: String,
}

impl Table {
    /// Human-readable constraint for error messages.
    pub const CONSTRAINT: &'static str =
        "Tables must be one uppercase letter followed by 1-3 digits, such as A1 or B12";

    /// Creates a new `Table`.
    ///
    /// # Arguments
    ///
    /// * `value` - The table label
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTable` if the label does not match the
    /// letter-plus-digits shape.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let bytes: &[u8] = value.as_bytes();
        let shape_ok: bool = (2..=4).contains(&bytes.len())
            && bytes[0].is_ascii_uppercase()
            && bytes[1..].iter().all(u8::is_ascii_digit);
        if !shape_ok {
            return Err(DomainError::InvalidTable(String::from(Self::CONSTRAINT)));
        }
        Ok(Self {
            value: String::from(value),
        })
    }

    /// Returns the table label.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a free-text remark attached to a reservation.
///
/// Remarks may be empty; the length bound keeps the list view renderable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Remark {
    /// The remark text (at most 50 characters).
    value: String,
}

impl Remark {
    /// Maximum number of characters in a remark.
    pub const MAX_LENGTH: usize = 50;

    /// Human-readable constraint for error messages.
    pub const CONSTRAINT: &'static str = "Remarks can be any text of at most 50 characters";

    /// Creates a new `Remark`.
    ///
    /// # Arguments
    ///
    /// * `value` - The remark text
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRemark` if the text exceeds 50
    /// characters.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::InvalidRemark(String::from(Self::CONSTRAINT)));
        }
        Ok(Self {
            value: String::from(value),
        })
    }

    /// Returns the remark text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether the remark is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Display for Remark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a single tag on a reservation.
///
/// Tags are single alphanumeric words; the reservation holds them as an
/// unordered, duplicate-free set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    /// The tag word.
    value: String,
}

impl Tag {
    /// Human-readable constraint for error messages.
    pub const CONSTRAINT: &'static str = "Tags must be single alphanumeric words";

    /// Creates a new `Tag`.
    ///
    /// # Arguments
    ///
    /// * `value` - The tag word
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTag` if the word is empty or contains
    /// non-alphanumeric characters.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.is_empty() || !value.chars().all(char::is_alphanumeric) {
            return Err(DomainError::InvalidTag(String::from(Self::CONSTRAINT)));
        }
        Ok(Self {
            value: String::from(value),
        })
    }

    /// Returns the tag word.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
