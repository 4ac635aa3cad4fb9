// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod customer;
mod error;
mod identification;
mod reservation;
mod schedule;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use customer::{Customer, REGULAR_BOOKING_THRESHOLD};
pub use error::DomainError;
pub use identification::Identification;
pub use reservation::{Reservation, ReservationPatch};
pub use schedule::{
    is_ongoing_at, is_previous, is_regular_customer, is_today, is_tomorrow, is_upcoming,
};
pub use types::{Duration, Name, Pax, Phone, Remark, StartDate, StartTime, Table, Tag};
pub use validation::{validate_identification_available, validate_no_same_reservation};
