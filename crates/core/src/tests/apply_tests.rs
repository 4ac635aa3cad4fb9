// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_book, create_test_reservation};
use crate::{Command, CoreError, LedgerDelta, ReservationBook, TransitionResult, apply};
use tablebook_domain::{
    DomainError, Identification, Name, Phone, Remark, Reservation, ReservationPatch, StartTime,
};

fn id(raw: &str) -> Identification {
    Identification::parse(raw).unwrap()
}

#[test]
fn test_add_appends_and_emits_booked_delta() {
    let book: ReservationBook = ReservationBook::new();
    let reservation: Reservation =
        create_test_reservation("Alice", "94351253", "21/03/2026", "1800");

    let result: TransitionResult = apply(
        &book,
        Command::Add {
            reservation: reservation.clone(),
        },
    )
    .unwrap();

    assert_eq!(result.new_book.len(), 1);
    assert_eq!(
        result.ledger_delta,
        Some(LedgerDelta::Booked {
            name: Name::new("Alice").unwrap(),
            phone: Phone::new("94351253").unwrap(),
        })
    );
    // The input book is untouched; transitions are pure.
    assert!(book.is_empty());
}

#[test]
fn test_add_same_name_rejected_despite_different_details() {
    let book: ReservationBook = create_test_book();
    let duplicate: Reservation =
        create_test_reservation("Alice", "88887777", "25/03/2026", "2000");

    let err: CoreError = apply(&book, Command::Add { reservation: duplicate }).unwrap_err();
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::DuplicateReservation { .. })
    ));
}

#[test]
fn test_add_colliding_identification_rejected() {
    let book: ReservationBook = create_test_book();
    // Different name, same date / phone-last-4 / time as Alice's booking.
    let colliding: Reservation =
        create_test_reservation("Carol", "00001253", "21/03/2026", "1800");

    let err: CoreError = apply(&book, Command::Add { reservation: colliding }).unwrap_err();
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::DuplicateIdentification { .. })
    ));
}

#[test]
fn test_edit_own_fields_keeping_name_is_allowed() {
    let book: ReservationBook = create_test_book();
    let patch: ReservationPatch = ReservationPatch {
        start_time: Some(StartTime::new("1930").unwrap()),
        ..ReservationPatch::default()
    };

    let result: TransitionResult = apply(
        &book,
        Command::Edit {
            target: id("2103202612531800"),
            patch,
        },
    )
    .unwrap();

    let edited: &Reservation = result
        .new_book
        .find_by_identification(&id("2103202612531930"))
        .unwrap();
    assert_eq!(edited.name().value(), "Alice");
    // Time-only edits do not touch the ledger.
    assert_eq!(result.ledger_delta, None);
}

#[test]
fn test_edit_renaming_into_collision_is_rejected() {
    let book: ReservationBook = create_test_book();
    let patch: ReservationPatch = ReservationPatch {
        name: Some(Name::new("Bob").unwrap()),
        ..ReservationPatch::default()
    };

    let err: CoreError = apply(
        &book,
        Command::Edit {
            target: id("2103202612531800"),
            patch,
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::DuplicateReservation { .. })
    ));
}

#[test]
fn test_edit_phone_change_emits_rebooked_delta() {
    let book: ReservationBook = create_test_book();
    let patch: ReservationPatch = ReservationPatch {
        phone: Some(Phone::new("90004444").unwrap()),
        ..ReservationPatch::default()
    };

    let result: TransitionResult = apply(
        &book,
        Command::Edit {
            target: id("2103202612531800"),
            patch,
        },
    )
    .unwrap();

    assert_eq!(
        result.ledger_delta,
        Some(LedgerDelta::Rebooked {
            previous_name: Name::new("Alice").unwrap(),
            previous_phone: Phone::new("94351253").unwrap(),
            name: Name::new("Alice").unwrap(),
            phone: Phone::new("90004444").unwrap(),
        })
    );
}

#[test]
fn test_edit_missing_target_fails() {
    let book: ReservationBook = create_test_book();
    let err: CoreError = apply(
        &book,
        Command::Edit {
            target: id("0101209900000000"),
            patch: ReservationPatch::default(),
        },
    )
    .unwrap_err();
    assert_eq!(
        format!("{err}"),
        "Input reservation id does not exist."
    );
}

#[test]
fn test_delete_removes_and_emits_cancelled_delta() {
    let book: ReservationBook = create_test_book();
    let result: TransitionResult = apply(
        &book,
        Command::Delete {
            target: id("2103202612531800"),
        },
    )
    .unwrap();

    assert_eq!(result.new_book.len(), 1);
    assert!(
        result
            .new_book
            .find_by_identification(&id("2103202612531800"))
            .is_none()
    );
    assert_eq!(
        result.ledger_delta,
        Some(LedgerDelta::Cancelled {
            phone: Phone::new("94351253").unwrap(),
        })
    );
}

#[test]
fn test_delete_missing_target_fails() {
    let book: ReservationBook = create_test_book();
    let err: CoreError = apply(
        &book,
        Command::Delete {
            target: id("0101209900000000"),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::ReservationNotFound { .. })
    ));
}

#[test]
fn test_mark_paid_then_mark_again_fails() {
    let book: ReservationBook = create_test_book();
    let target: Identification = id("2103202612531800");

    let result: TransitionResult = apply(
        &book,
        Command::MarkPaid {
            target: target.clone(),
        },
    )
    .unwrap();
    assert!(
        result
            .new_book
            .find_by_identification(&target)
            .unwrap()
            .is_paid()
    );
    assert_eq!(result.ledger_delta, None);

    let err: CoreError = apply(&result.new_book, Command::MarkPaid { target }).unwrap_err();
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::AlreadyPaid { .. })
    ));
}

#[test]
fn test_unmark_unpaid_fails() {
    let book: ReservationBook = create_test_book();
    let err: CoreError = apply(
        &book,
        Command::UnmarkPaid {
            target: id("2103202612531800"),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CoreError::DomainViolation(DomainError::AlreadyUnpaid { .. })
    ));
}

#[test]
fn test_set_remark_replaces_without_ledger_delta() {
    let book: ReservationBook = create_test_book();
    let target: Identification = id("2103202612531800");

    let result: TransitionResult = apply(
        &book,
        Command::SetRemark {
            target: target.clone(),
            remark: Remark::new("anniversary").unwrap(),
        },
    )
    .unwrap();
    assert_eq!(
        result
            .new_book
            .find_by_identification(&target)
            .unwrap()
            .remark()
            .value(),
        "anniversary"
    );
    assert_eq!(result.ledger_delta, None);
}

#[test]
fn test_failed_command_leaves_book_unchanged() {
    let book: ReservationBook = create_test_book();
    let before: ReservationBook = book.clone();

    let duplicate: Reservation =
        create_test_reservation("Alice", "88887777", "25/03/2026", "2000");
    assert!(apply(&book, Command::Add { reservation: duplicate }).is_err());
    assert_eq!(book, before);
}
