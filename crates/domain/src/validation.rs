// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::reservation::Reservation;

/// Validates that a candidate reservation does not collide with an existing
/// one under soft identity (name equality).
///
/// This function is pure and context-taking: callers supply the collection
/// to check against. When validating an edit, the caller must exclude the
/// reservation being replaced from `existing`, otherwise an edit that keeps
/// its own name would be rejected as a duplicate of itself.
///
/// # Arguments
///
/// * `candidate` - The reservation to be added or substituted in
/// * `existing` - The reservations it must not collide with
///
/// # Errors
///
/// Returns `DomainError::DuplicateReservation` if any existing reservation
/// is the same as the candidate by name.
pub fn validate_no_same_reservation(
    candidate: &Reservation,
    existing: &[Reservation],
) -> Result<(), DomainError> {
    if existing.iter().any(|r| r.is_same(candidate)) {
        return Err(DomainError::DuplicateReservation {
            name: String::from(candidate.name().value()),
        });
    }
    Ok(())
}

/// Validates that a candidate reservation's derived identification is not
/// already taken.
///
/// Identification uniqueness follows from uniqueness of (date, phone-last-4,
/// time); distinct reservations that collide on all three would share a key
/// and become unaddressable, so such adds are rejected even when the names
/// differ. As with [`validate_no_same_reservation`], edits must exclude the
/// replaced reservation from `existing`.
///
/// # Arguments
///
/// * `candidate` - The reservation to be added or substituted in
/// * `existing` - The reservations it must not collide with
///
/// # Errors
///
/// Returns `DomainError::DuplicateIdentification` if any existing
/// reservation has the same derived identification.
pub fn validate_identification_available(
    candidate: &Reservation,
    existing: &[Reservation],
) -> Result<(), DomainError> {
    if existing
        .iter()
        .any(|r| r.identification() == candidate.identification())
    {
        return Err(DomainError::DuplicateIdentification {
            identification: String::from(candidate.identification().value()),
        });
    }
    Ok(())
}
