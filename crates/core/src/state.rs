// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ledger::LedgerDelta;
use tablebook_domain::{Identification, Reservation};

/// The canonical ordered collection of reservations.
///
/// The book preserves insertion order; display views re-sort by start date
/// and time without touching the canonical order. Uniqueness (soft identity
/// by name, plus derived identification) is enforced by the transition
/// functions in [`crate::apply`], never by the collection itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReservationBook {
    /// All reservations, in insertion order.
    reservations: Vec<Reservation>,
}

impl ReservationBook {
    /// Creates an empty book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reservations: Vec::new(),
        }
    }

    /// Creates a book from already-loaded reservations, preserving their
    /// order.
    #[must_use]
    pub fn from_reservations(reservations: Vec<Reservation>) -> Self {
        Self { reservations }
    }

    /// Returns all reservations in insertion order.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Returns the number of reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Returns whether the book is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Soft-identity membership: whether any stored reservation is "same"
    /// as the given one (by name).
    #[must_use]
    pub fn contains(&self, reservation: &Reservation) -> bool {
        self.reservations.iter().any(|r| r.is_same(reservation))
    }

    /// Looks up a reservation by its derived identification.
    #[must_use]
    pub fn find_by_identification(&self, identification: &Identification) -> Option<&Reservation> {
        self.reservations
            .iter()
            .find(|r| r.identification() == identification)
    }

    /// Index of the reservation with the given identification, if present.
    pub(crate) fn position_of(&self, identification: &Identification) -> Option<usize> {
        self.reservations
            .iter()
            .position(|r| r.identification() == identification)
    }

    /// Projects the book into a read view: reservations matching the
    /// predicate, sorted by start date then start time ascending.
    ///
    /// The canonical collection is not modified; the view is recomputed
    /// from scratch on every call.
    #[must_use]
    pub fn filtered<P>(&self, predicate: P) -> Vec<&Reservation>
    where
        P: Fn(&Reservation) -> bool,
    {
        let mut view: Vec<&Reservation> = self
            .reservations
            .iter()
            .filter(|r| predicate(r))
            .collect();
        view.sort_by_key(|r| (r.start_date(), r.start_time()));
        view
    }

    pub(crate) fn with_appended(&self, reservation: Reservation) -> Self {
        let mut reservations: Vec<Reservation> = self.reservations.clone();
        reservations.push(reservation);
        Self { reservations }
    }

    pub(crate) fn with_replaced(&self, index: usize, reservation: Reservation) -> Self {
        let mut reservations: Vec<Reservation> = self.reservations.clone();
        reservations[index] = reservation;
        Self { reservations }
    }

    pub(crate) fn with_removed(&self, index: usize) -> Self {
        let mut reservations: Vec<Reservation> = self.reservations.clone();
        reservations.remove(index);
        Self { reservations }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. The ledger delta records what the customer ledger must do
/// in response; `None` means the mutation did not touch any customer-facing
/// fields (mark/unmark/remark).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new book after the transition.
    pub new_book: ReservationBook,
    /// The ledger adjustment this transition requires, if any.
    pub ledger_delta: Option<LedgerDelta>,
}
