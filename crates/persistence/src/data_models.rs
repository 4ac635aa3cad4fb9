// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use tablebook_domain::{
    Customer, DomainError, Duration, Name, Pax, Phone, Remark, Reservation, StartDate, StartTime,
    Table, Tag,
};

/// Serializable representation of a Reservation.
///
/// All value-typed fields persist as their textual rendering; conversion
/// back to the domain re-runs full validation, so a hand-edited data file
/// cannot smuggle invalid values past the grammars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationData {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub pax: String,
    pub table: String,
    pub remark: String,
    pub tags: Vec<String>,
    pub paid: bool,
    pub id: String,
}

impl ReservationData {
    /// Builds the serializable record from a domain reservation.
    #[must_use]
    pub fn from_domain(reservation: &Reservation) -> Self {
        Self {
            name: String::from(reservation.name().value()),
            phone: String::from(reservation.phone().value()),
            date: reservation.start_date().to_string(),
            time: reservation.start_time().to_string(),
            duration: reservation.duration().to_string(),
            pax: reservation.pax().to_string(),
            table: String::from(reservation.table().value()),
            remark: String::from(reservation.remark().value()),
            tags: reservation
                .tags()
                .iter()
                .map(|tag| String::from(tag.value()))
                .collect(),
            paid: reservation.is_paid(),
            id: String::from(reservation.identification().value()),
        }
    }

    /// Reconstructs the domain reservation, re-validating every field.
    ///
    /// The stored `id` must equal the identification re-derived from the
    /// stored date, phone and time; a mismatch means the file was edited
    /// inconsistently and the record is rejected.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidRecord` if any field fails its
    /// grammar or the stored id does not match the derived one.
    pub fn to_domain(&self) -> Result<Reservation, PersistenceError> {
        let tags: Vec<Tag> = self
            .tags
            .iter()
            .map(|tag| Tag::new(tag.as_str()))
            .collect::<Result<_, DomainError>>()
            .map_err(invalid_record)?;

        let reservation: Reservation = Reservation::new(
            Name::new(&self.name).map_err(invalid_record)?,
            Phone::new(&self.phone).map_err(invalid_record)?,
            StartDate::new(&self.date).map_err(invalid_record)?,
            StartTime::new(&self.time).map_err(invalid_record)?,
            Duration::new(&self.duration).map_err(invalid_record)?,
            Pax::new(&self.pax).map_err(invalid_record)?,
            Table::new(&self.table).map_err(invalid_record)?,
            Remark::new(&self.remark).map_err(invalid_record)?,
            tags,
        )
        .with_paid(self.paid);

        if reservation.identification().value() != self.id {
            return Err(PersistenceError::InvalidRecord(format!(
                "stored id {} does not match id {} derived from date/phone/time",
                self.id,
                reservation.identification()
            )));
        }
        Ok(reservation)
    }
}

/// Serializable representation of a Customer ledger entry.
///
/// Field names follow the historical camelCase file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerData {
    pub name: String,
    pub phone: String,
    pub booking_count: u32,
    pub is_regular_customer: bool,
}

impl CustomerData {
    /// Builds the serializable record from a ledger entry.
    #[must_use]
    pub fn from_domain(customer: &Customer) -> Self {
        Self {
            name: String::from(customer.name().value()),
            phone: String::from(customer.phone().value()),
            booking_count: customer.booking_count(),
            is_regular_customer: customer.is_regular(),
        }
    }

    /// Reconstructs the ledger entry.
    ///
    /// The regular flag is recomputed from the stored counter rather than
    /// trusted, keeping it a pure derivation.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidRecord` if the name or phone fail
    /// their grammars.
    pub fn to_domain(&self) -> Result<Customer, PersistenceError> {
        Ok(Customer::with_count(
            Name::new(&self.name).map_err(invalid_record)?,
            Phone::new(&self.phone).map_err(invalid_record)?,
            self.booking_count,
        ))
    }
}

fn invalid_record(err: DomainError) -> PersistenceError {
    PersistenceError::InvalidRecord(err.to_string())
}
