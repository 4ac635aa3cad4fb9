// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_customer;
use crate::{LedgerDelta, apply_ledger_delta};
use tablebook_domain::{Customer, Name, Phone};

fn booked(name: &str, phone: &str) -> LedgerDelta {
    LedgerDelta::Booked {
        name: Name::new(name).unwrap(),
        phone: Phone::new(phone).unwrap(),
    }
}

fn cancelled(phone: &str) -> LedgerDelta {
    LedgerDelta::Cancelled {
        phone: Phone::new(phone).unwrap(),
    }
}

#[test]
fn test_first_booking_creates_entry_at_one() {
    let ledger: Vec<Customer> = apply_ledger_delta(&[], &booked("Alice", "94351253"));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].booking_count(), 1);
    assert!(!ledger[0].is_regular());
}

#[test]
fn test_three_bookings_make_a_regular() {
    let mut ledger: Vec<Customer> = Vec::new();
    for _ in 0..3 {
        ledger = apply_ledger_delta(&ledger, &booked("Alice", "94351253"));
    }
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].booking_count(), 3);
    assert!(ledger[0].is_regular());
}

#[test]
fn test_cancellation_decrements_by_exactly_one() {
    let ledger: Vec<Customer> = vec![create_test_customer("Alice", "94351253", 3)];
    let after: Vec<Customer> = apply_ledger_delta(&ledger, &cancelled("94351253"));
    assert_eq!(after[0].booking_count(), 2);
    assert!(!after[0].is_regular());
}

#[test]
fn test_cancellation_at_one_removes_entry() {
    let ledger: Vec<Customer> = vec![create_test_customer("Alice", "94351253", 1)];
    let after: Vec<Customer> = apply_ledger_delta(&ledger, &cancelled("94351253"));
    assert!(after.is_empty());
}

#[test]
fn test_cancellation_for_unknown_phone_is_a_no_op() {
    let ledger: Vec<Customer> = vec![create_test_customer("Alice", "94351253", 2)];
    let after: Vec<Customer> = apply_ledger_delta(&ledger, &cancelled("80000000"));
    assert_eq!(after, ledger);
}

#[test]
fn test_rebooking_to_new_phone_moves_one_unit() {
    let ledger: Vec<Customer> = vec![
        create_test_customer("Alice", "94351253", 2),
        create_test_customer("Bob", "81234567", 1),
    ];
    let delta: LedgerDelta = LedgerDelta::Rebooked {
        previous_name: Name::new("Alice").unwrap(),
        previous_phone: Phone::new("94351253").unwrap(),
        name: Name::new("Alice").unwrap(),
        phone: Phone::new("81234567").unwrap(),
    };

    let after: Vec<Customer> = apply_ledger_delta(&ledger, &delta);
    let old_entry: &Customer = after
        .iter()
        .find(|c| c.phone().value() == "94351253")
        .unwrap();
    let merged: &Customer = after
        .iter()
        .find(|c| c.phone().value() == "81234567")
        .unwrap();
    assert_eq!(old_entry.booking_count(), 1);
    assert_eq!(merged.booking_count(), 2);
}

#[test]
fn test_rebooking_to_fresh_phone_creates_entry() {
    let ledger: Vec<Customer> = vec![create_test_customer("Alice", "94351253", 1)];
    let delta: LedgerDelta = LedgerDelta::Rebooked {
        previous_name: Name::new("Alice").unwrap(),
        previous_phone: Phone::new("94351253").unwrap(),
        name: Name::new("Alice").unwrap(),
        phone: Phone::new("80000000").unwrap(),
    };

    let after: Vec<Customer> = apply_ledger_delta(&ledger, &delta);
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].phone().value(), "80000000");
    assert_eq!(after[0].booking_count(), 1);
}

#[test]
fn test_rebooking_name_only_renames_preserving_counter() {
    let ledger: Vec<Customer> = vec![create_test_customer("Alice", "94351253", 3)];
    let delta: LedgerDelta = LedgerDelta::Rebooked {
        previous_name: Name::new("Alice").unwrap(),
        previous_phone: Phone::new("94351253").unwrap(),
        name: Name::new("Alicia").unwrap(),
        phone: Phone::new("94351253").unwrap(),
    };

    let after: Vec<Customer> = apply_ledger_delta(&ledger, &delta);
    assert_eq!(after[0].name().value(), "Alicia");
    assert_eq!(after[0].booking_count(), 3);
    assert!(after[0].is_regular());
}

#[test]
fn test_rebooking_with_nothing_changed_is_a_no_op() {
    let ledger: Vec<Customer> = vec![create_test_customer("Alice", "94351253", 2)];
    let delta: LedgerDelta = LedgerDelta::Rebooked {
        previous_name: Name::new("Alice").unwrap(),
        previous_phone: Phone::new("94351253").unwrap(),
        name: Name::new("Alice").unwrap(),
        phone: Phone::new("94351253").unwrap(),
    };
    assert_eq!(apply_ledger_delta(&ledger, &delta), ledger);
}

#[test]
fn test_booking_refreshes_last_seen_name() {
    let ledger: Vec<Customer> = vec![create_test_customer("Alice", "94351253", 1)];
    let after: Vec<Customer> = apply_ledger_delta(&ledger, &booked("Alice Tan", "94351253"));
    assert_eq!(after[0].name().value(), "Alice Tan");
    assert_eq!(after[0].booking_count(), 2);
}
