// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of reservations and ledger entries.

use std::fmt::Write as _;
use tablebook_domain::{Customer, Reservation};

/// Renders one reservation as a single line.
#[must_use]
pub fn reservation_line(reservation: &Reservation) -> String {
    let paid: &str = if reservation.is_paid() {
        "[paid]"
    } else {
        "[unpaid]"
    };
    let mut line: String = format!(
        "{} | {} {} | {} | {} pax | table {} | {} | id {}",
        reservation.name().value(),
        reservation.start_date(),
        reservation.start_time(),
        reservation.phone().value(),
        reservation.pax().value(),
        reservation.table().value(),
        paid,
        reservation.identification(),
    );
    if !reservation.remark().value().is_empty() {
        let _ = write!(line, " | remark: {}", reservation.remark().value());
    }
    if !reservation.tags().is_empty() {
        let tags: Vec<&str> = reservation.tags().iter().map(|t| t.value()).collect();
        let _ = write!(line, " | tags: {}", tags.join(", "));
    }
    line
}

/// Renders a filtered list of reservations, one per line, with a heading.
///
/// An empty list renders as the heading plus a "no reservations" line so
/// the user can tell the query ran and matched nothing.
#[must_use]
pub fn reservation_list(heading: &str, reservations: &[&Reservation]) -> String {
    let mut out: String = String::from(heading);
    if reservations.is_empty() {
        out.push_str("\n  (no reservations)");
        return out;
    }
    for reservation in reservations {
        let _ = write!(out, "\n  {}", reservation_line(reservation));
    }
    out
}

/// Renders a ledger entry as a single line.
#[must_use]
pub fn customer_line(customer: &Customer) -> String {
    let status: &str = if customer.is_regular() {
        "regular"
    } else {
        "not yet regular"
    };
    format!(
        "{} | {} | {} booking(s) | {}",
        customer.name().value(),
        customer.phone().value(),
        customer.booking_count(),
        status,
    )
}
