// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Temporal predicates over reservations.
//!
//! Every predicate takes the reference date (and, for ongoing checks, the
//! query time) as an explicit argument rather than reading the clock, so
//! the functions are pure and deterministic. Callers compose them with
//! plain boolean logic.

use crate::customer::Customer;
use crate::reservation::Reservation;
use crate::types::StartTime;
use time::Date;

/// Whether the reservation falls on the reference date.
///
/// This is calendar-day equality only; the time of day is ignored.
#[must_use]
pub fn is_today(reservation: &Reservation, today: Date) -> bool {
    reservation.start_date().date() == today
}

/// Whether the reservation falls on the day after the reference date.
#[must_use]
pub fn is_tomorrow(reservation: &Reservation, today: Date) -> bool {
    today
        .next_day()
        .is_some_and(|tomorrow| reservation.start_date().date() == tomorrow)
}

/// Whether the reservation is actionable: today or tomorrow.
///
/// Name and phone search restricts its matches to upcoming reservations.
#[must_use]
pub fn is_upcoming(reservation: &Reservation, today: Date) -> bool {
    is_today(reservation, today) || is_tomorrow(reservation, today)
}

/// Whether the reservation's date is strictly before the reference date.
#[must_use]
pub fn is_previous(reservation: &Reservation, today: Date) -> bool {
    reservation.start_date().date() < today
}

/// Whether the reservation is in progress at time `at` on the reference
/// date.
///
/// A reservation is ongoing from its start time (inclusive) until start
/// plus duration (exclusive): a 1300 reservation lasting 2 hours is ongoing
/// at 1300 and 1459 but not at 1500 or 1259. An end past midnight keeps the
/// reservation ongoing through 23:59 of the same day; it never wraps into
/// the next calendar day.
#[must_use]
pub fn is_ongoing_at(reservation: &Reservation, today: Date, at: StartTime) -> bool {
    if !is_today(reservation, today) {
        return false;
    }
    let start: u32 = reservation.start_time().minutes_from_midnight();
    let end: u32 = start + reservation.duration().minutes();
    let query: u32 = at.minutes_from_midnight();
    start <= query && query < end
}

/// Whether the reservation belongs to a regular customer according to the
/// given ledger entries.
#[must_use]
pub fn is_regular_customer(reservation: &Reservation, customers: &[Customer]) -> bool {
    customers
        .iter()
        .any(|customer| customer.phone() == reservation.phone() && customer.is_regular())
}
