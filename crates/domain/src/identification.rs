// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Phone, StartDate, StartTime};

/// The derived composite key of a reservation.
///
/// An identification is 16 digits: the 8-digit `ddMMyyyy` start date, the
/// last 4 digits of the phone number, and the 4-digit `HHMM` start time.
/// It is never assigned independently; whenever a reservation's date, phone
/// or time changes, the identification is re-derived from the new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identification {
    /// The 16-character key.
    value: String,
}

impl Identification {
    /// Number of characters in an identification.
    pub const LENGTH: usize = 16;

    /// Human-readable constraint for error messages.
    pub const CONSTRAINT: &'static str = "Reservation ids must be 16-digit numeric strings";

    /// Derives the identification from its constituent parts.
    ///
    /// This is a pure function: equal inputs always produce equal keys.
    /// The parts are already validated by construction, so derivation
    /// cannot fail.
    ///
    /// # Arguments
    ///
    /// * `date` - The reservation start date
    /// * `phone` - The contact phone number
    /// * `time` - The reservation start time
    #[must_use]
    pub fn derive(date: &StartDate, phone: &Phone, time: &StartTime) -> Self {
        Self {
            value: format!("{}{}{time}", date.compact(), phone.last_four()),
        }
    }

    /// Parses a raw identification string supplied by the user.
    ///
    /// The check is deliberately syntactic: the string must be 16
    /// characters and numeric (an optional leading `-` is tolerated by the
    /// historical grammar). The embedded date and time are NOT re-validated
    /// here; an id is an opaque lookup key and resolving it against the
    /// store is what decides whether it refers to anything.
    ///
    /// # Arguments
    ///
    /// * `raw` - The raw id text
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIdentification` if the string is not
    /// 16 numeric characters.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let digits: &str = raw.strip_prefix('-').unwrap_or(raw);
        let numeric: bool = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
        if raw.len() != Self::LENGTH || !numeric {
            return Err(DomainError::InvalidIdentification(String::from(
                Self::CONSTRAINT,
            )));
        }
        Ok(Self {
            value: String::from(raw),
        })
    }

    /// Returns the key text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Identification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
