// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::identification::Identification;
use crate::types::{Duration, Name, Pax, Phone, Remark, StartDate, StartTime, Table, Tag};

/// A table reservation.
///
/// Reservations are immutable aggregates: every change produces a new value
/// via one of the `with_*` or `patched` constructors, and the derived
/// identification is recomputed whenever date, phone or time change. There
/// is no way to mutate a field in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    name: Name,
    phone: Phone,
    start_date: StartDate,
    start_time: StartTime,
    duration: Duration,
    pax: Pax,
    table: Table,
    remark: Remark,
    /// Kept sorted and duplicate-free; the set is unordered semantically.
    tags: Vec<Tag>,
    paid: bool,
    identification: Identification,
}

impl Reservation {
    /// Creates a new unpaid reservation.
    ///
    /// Tags are de-duplicated; the identification is derived from the date,
    /// phone and time.
    ///
    /// # Arguments
    ///
    /// * `name` - The reservation holder's name
    /// * `phone` - The contact phone number
    /// * `start_date` - The calendar date the reservation starts on
    /// * `start_time` - The 24-hour start time
    /// * `duration` - The duration in half-hour increments
    /// * `pax` - The party size
    /// * `table` - The table label
    /// * `remark` - Free-text remark (may be empty)
    /// * `tags` - Tag set (duplicates are dropped)
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        start_date: StartDate,
        start_time: StartTime,
        duration: Duration,
        pax: Pax,
        table: Table,
        remark: Remark,
        mut tags: Vec<Tag>,
    ) -> Self {
        tags.sort();
        tags.dedup();
        let identification: Identification =
            Identification::derive(&start_date, &phone, &start_time);
        Self {
            name,
            phone,
            start_date,
            start_time,
            duration,
            pax,
            table,
            remark,
            tags,
            paid: false,
            identification,
        }
    }

    /// Returns the reservation holder's name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the contact phone number.
    #[must_use]
    pub const fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> StartDate {
        self.start_date
    }

    /// Returns the start time.
    #[must_use]
    pub const fn start_time(&self) -> StartTime {
        self.start_time
    }

    /// Returns the duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the party size.
    #[must_use]
    pub const fn pax(&self) -> Pax {
        self.pax
    }

    /// Returns the table label.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the remark.
    #[must_use]
    pub const fn remark(&self) -> &Remark {
        &self.remark
    }

    /// Returns the tags, sorted.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns whether the reservation has been paid.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        self.paid
    }

    /// Returns the derived identification.
    #[must_use]
    pub const fn identification(&self) -> &Identification {
        &self.identification
    }

    /// Soft identity: whether `other` counts as the same reservation for
    /// duplicate rejection.
    ///
    /// This is name equality ONLY. Two unrelated customers who happen to
    /// share a name collide under this predicate; that is specified
    /// behavior inherited from the source system, not an oversight. Hard
    /// identity is plain `==` over all fields.
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        self.name == other.name
    }

    /// Returns a copy with the paid flag set as given.
    #[must_use]
    pub fn with_paid(&self, paid: bool) -> Self {
        let mut updated: Self = self.clone();
        updated.paid = paid;
        updated
    }

    /// Returns a copy with the remark replaced.
    #[must_use]
    pub fn with_remark(&self, remark: Remark) -> Self {
        let mut updated: Self = self.clone();
        updated.remark = remark;
        updated
    }

    /// Returns a copy with the patch applied.
    ///
    /// Unset patch fields keep their current values; the paid flag is
    /// always preserved. The identification is re-derived, so a patch that
    /// touches date, phone or time yields a reservation with a new id.
    #[must_use]
    pub fn patched(&self, patch: ReservationPatch) -> Self {
        let mut updated: Self = Self::new(
            patch.name.unwrap_or_else(|| self.name.clone()),
            patch.phone.unwrap_or_else(|| self.phone.clone()),
            patch.start_date.unwrap_or(self.start_date),
            patch.start_time.unwrap_or(self.start_time),
            patch.duration.unwrap_or(self.duration),
            patch.pax.unwrap_or(self.pax),
            patch.table.unwrap_or_else(|| self.table.clone()),
            self.remark.clone(),
            self.tags.clone(),
        );
        updated.paid = self.paid;
        updated
    }
}

/// A partial edit to a reservation.
///
/// Commands carry a patch rather than a full replacement so that untouched
/// fields keep their values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReservationPatch {
    /// New name, if the name is being changed.
    pub name: Option<Name>,
    /// New phone, if the phone is being changed.
    pub phone: Option<Phone>,
    /// New start date, if the date is being changed.
    pub start_date: Option<StartDate>,
    /// New start time, if the time is being changed.
    pub start_time: Option<StartTime>,
    /// New duration, if the duration is being changed.
    pub duration: Option<Duration>,
    /// New party size, if the pax is being changed.
    pub pax: Option<Pax>,
    /// New table, if the table is being changed.
    pub table: Option<Table>,
}

impl ReservationPatch {
    /// Returns whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.start_date.is_none()
            && self.start_time.is_none()
            && self.duration.is_none()
            && self.pax.is_none()
            && self.table.is_none()
    }
}
