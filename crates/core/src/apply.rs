// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::ledger::LedgerDelta;
use crate::state::{ReservationBook, TransitionResult};
use tablebook_domain::{
    DomainError, Identification, Reservation, validate_identification_available,
    validate_no_same_reservation,
};

/// Applies a command to the book, producing the new book and the ledger
/// delta the mutation implies.
///
/// Transitions never partially apply: every existence and uniqueness check
/// runs before any part of the new book is built, so a failing command
/// returns the error with the previous book untouched. There is no
/// rollback because there is nothing to roll back.
///
/// # Arguments
///
/// * `book` - The current reservation book (immutable)
/// * `command` - The command to apply
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if:
/// - an add or edit would collide under soft identity (name) or on the
///   derived identification,
/// - the targeted identification does not exist,
/// - a mark/unmark targets a reservation already in that payment state.
pub fn apply(book: &ReservationBook, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::Add { reservation } => {
            validate_no_same_reservation(&reservation, book.reservations())?;
            validate_identification_available(&reservation, book.reservations())?;

            let ledger_delta: LedgerDelta = LedgerDelta::Booked {
                name: reservation.name().clone(),
                phone: reservation.phone().clone(),
            };
            Ok(TransitionResult {
                new_book: book.with_appended(reservation),
                ledger_delta: Some(ledger_delta),
            })
        }
        Command::Edit { target, patch } => {
            let index: usize = position_of(book, &target)?;
            let current: &Reservation = &book.reservations()[index];
            let edited: Reservation = current.patched(patch);

            // Validate against every OTHER reservation: keeping one's own
            // name must not be flagged as a duplicate of oneself.
            let others: Vec<Reservation> = book
                .reservations()
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, r)| r.clone())
                .collect();
            validate_no_same_reservation(&edited, &others)?;
            validate_identification_available(&edited, &others)?;

            let name_or_phone_changed: bool =
                edited.name() != current.name() || edited.phone() != current.phone();
            let ledger_delta: Option<LedgerDelta> =
                name_or_phone_changed.then(|| LedgerDelta::Rebooked {
                    previous_name: current.name().clone(),
                    previous_phone: current.phone().clone(),
                    name: edited.name().clone(),
                    phone: edited.phone().clone(),
                });

            Ok(TransitionResult {
                new_book: book.with_replaced(index, edited),
                ledger_delta,
            })
        }
        Command::Delete { target } => {
            let index: usize = position_of(book, &target)?;
            let removed: &Reservation = &book.reservations()[index];

            let ledger_delta: LedgerDelta = LedgerDelta::Cancelled {
                phone: removed.phone().clone(),
            };
            Ok(TransitionResult {
                new_book: book.with_removed(index),
                ledger_delta: Some(ledger_delta),
            })
        }
        Command::MarkPaid { target } => {
            let index: usize = position_of(book, &target)?;
            let current: &Reservation = &book.reservations()[index];
            if current.is_paid() {
                return Err(DomainError::AlreadyPaid {
                    identification: String::from(target.value()),
                }
                .into());
            }
            Ok(TransitionResult {
                new_book: book.with_replaced(index, current.with_paid(true)),
                ledger_delta: None,
            })
        }
        Command::UnmarkPaid { target } => {
            let index: usize = position_of(book, &target)?;
            let current: &Reservation = &book.reservations()[index];
            if !current.is_paid() {
                return Err(DomainError::AlreadyUnpaid {
                    identification: String::from(target.value()),
                }
                .into());
            }
            Ok(TransitionResult {
                new_book: book.with_replaced(index, current.with_paid(false)),
                ledger_delta: None,
            })
        }
        Command::SetRemark { target, remark } => {
            let index: usize = position_of(book, &target)?;
            let current: &Reservation = &book.reservations()[index];
            Ok(TransitionResult {
                new_book: book.with_replaced(index, current.with_remark(remark)),
                ledger_delta: None,
            })
        }
    }
}

fn position_of(book: &ReservationBook, target: &Identification) -> Result<usize, CoreError> {
    book.position_of(target).ok_or_else(|| {
        CoreError::DomainViolation(DomainError::ReservationNotFound {
            identification: String::from(target.value()),
        })
    })
}
