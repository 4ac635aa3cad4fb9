// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tablebook_domain::{Identification, Remark, Reservation, ReservationPatch};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes. Their arguments are
/// already-validated domain values; the command layer that builds them is
/// responsible for parsing raw text into those values first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new reservation.
    Add {
        /// The fully-constructed reservation to add.
        reservation: Reservation,
    },
    /// Edit an existing reservation, identified by its derived id.
    Edit {
        /// The identification of the reservation to edit.
        target: Identification,
        /// The fields being changed.
        patch: ReservationPatch,
    },
    /// Delete an existing reservation.
    Delete {
        /// The identification of the reservation to delete.
        target: Identification,
    },
    /// Mark an existing reservation as paid.
    MarkPaid {
        /// The identification of the reservation to mark.
        target: Identification,
    },
    /// Revert an existing reservation to unpaid.
    UnmarkPaid {
        /// The identification of the reservation to unmark.
        target: Identification,
    },
    /// Replace the remark on an existing reservation.
    SetRemark {
        /// The identification of the reservation to annotate.
        target: Identification,
        /// The new remark (may be empty, clearing the old one).
        remark: Remark,
    },
}
