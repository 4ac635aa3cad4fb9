// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Reservation name is blank, too long, or contains control characters.
    InvalidName(String),
    /// Phone number is not a digit string of the expected length.
    InvalidPhone(String),
    /// Start date is not a valid `DD/MM/YYYY` calendar date.
    InvalidStartDate(String),
    /// Start time is not a valid 24-hour `HHMM` value.
    InvalidStartTime(String),
    /// Duration is not a non-negative half-hour increment.
    InvalidDuration(String),
    /// Party size is not a positive integer within bounds.
    InvalidPax(String),
    /// Table label is not one uppercase letter followed by 1-3 digits.
    InvalidTable(String),
    /// Remark exceeds the length bound.
    InvalidRemark(String),
    /// Tag is empty or contains non-alphanumeric characters.
    InvalidTag(String),
    /// Raw identification string is not 16 numeric characters.
    InvalidIdentification(String),
    /// A reservation with the same name already exists.
    DuplicateReservation {
        /// The colliding reservation name.
        name: String,
    },
    /// A reservation with the same derived identification already exists.
    DuplicateIdentification {
        /// The colliding identification value.
        identification: String,
    },
    /// No stored reservation matches the given identification.
    ReservationNotFound {
        /// The identification that was looked up.
        identification: String,
    },
    /// Mark-paid was requested for a reservation that is already paid.
    AlreadyPaid {
        /// The identification of the paid reservation.
        identification: String,
    },
    /// Unmark was requested for a reservation that is already unpaid.
    AlreadyUnpaid {
        /// The identification of the unpaid reservation.
        identification: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidPhone(msg) => write!(f, "Invalid phone: {msg}"),
            Self::InvalidStartDate(msg) => write!(f, "Invalid start date: {msg}"),
            Self::InvalidStartTime(msg) => write!(f, "Invalid start time: {msg}"),
            Self::InvalidDuration(msg) => write!(f, "Invalid duration: {msg}"),
            Self::InvalidPax(msg) => write!(f, "Invalid pax: {msg}"),
            Self::InvalidTable(msg) => write!(f, "Invalid table: {msg}"),
            Self::InvalidRemark(msg) => write!(f, "Invalid remark: {msg}"),
            Self::InvalidTag(msg) => write!(f, "Invalid tag: {msg}"),
            Self::InvalidIdentification(msg) => {
                write!(f, "Invalid identification: {msg}")
            }
            Self::DuplicateReservation { name } => {
                write!(f, "A reservation for '{name}' already exists")
            }
            Self::DuplicateIdentification { identification } => {
                write!(
                    f,
                    "A reservation with identification {identification} already exists"
                )
            }
            Self::ReservationNotFound { .. } => {
                write!(f, "Input reservation id does not exist.")
            }
            Self::AlreadyPaid { identification } => {
                write!(f, "Reservation {identification} is already marked as paid")
            }
            Self::AlreadyUnpaid { identification } => {
                write!(f, "Reservation {identification} is already unpaid")
            }
        }
    }
}

impl std::error::Error for DomainError {}
