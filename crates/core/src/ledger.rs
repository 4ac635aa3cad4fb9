// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tablebook_domain::{Customer, Name, Phone};

/// The customer-ledger adjustment implied by a store mutation.
///
/// Each successful transition emits at most one delta, and the ledger is
/// driven exactly once per delta. The delta captures everything the ledger
/// needs, so applying it does not require the reservation book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerDelta {
    /// A reservation was added for this customer.
    Booked {
        /// The reservation holder's name (refreshes the last-seen name).
        name: Name,
        /// The phone keying the ledger entry.
        phone: Phone,
    },
    /// A reservation for this phone was deleted.
    Cancelled {
        /// The phone whose entry loses one booking.
        phone: Phone,
    },
    /// A reservation was edited in a way that touches name or phone.
    Rebooked {
        /// The name before the edit.
        previous_name: Name,
        /// The phone before the edit.
        previous_phone: Phone,
        /// The name after the edit.
        name: Name,
        /// The phone after the edit.
        phone: Phone,
    },
}

/// Applies a ledger delta to the customer list, producing a new list.
///
/// This is the pure half of the ledger consistency protocol; the
/// reload-then-apply-then-save cycle around it lives with the persistence
/// adapter. Semantics:
///
/// - `Booked`: increment the entry for the phone (creating it at count 1),
///   refreshing the last-seen name.
/// - `Cancelled`: decrement the entry; at zero the entry is removed
///   entirely, so a later booking from the same phone starts over as a new
///   customer. A missing entry is left as-is.
/// - `Rebooked` with an unchanged phone: rename the entry in place, counter
///   and regular status preserved; if the name is also unchanged this is a
///   no-op.
/// - `Rebooked` with a changed phone: cancel against the old phone, then
///   book against the new one (merging into an existing entry if present).
///
/// # Arguments
///
/// * `customers` - The ledger entries as last persisted
/// * `delta` - The adjustment to apply
#[must_use]
pub fn apply_ledger_delta(customers: &[Customer], delta: &LedgerDelta) -> Vec<Customer> {
    match delta {
        LedgerDelta::Booked { name, phone } => booked(customers, name, phone),
        LedgerDelta::Cancelled { phone } => cancelled(customers, phone),
        LedgerDelta::Rebooked {
            previous_name,
            previous_phone,
            name,
            phone,
        } => {
            if previous_phone == phone {
                if previous_name == name {
                    return customers.to_vec();
                }
                return renamed(customers, phone, name);
            }
            let without_old: Vec<Customer> = cancelled(customers, previous_phone);
            booked(&without_old, name, phone)
        }
    }
}

fn booked(customers: &[Customer], name: &Name, phone: &Phone) -> Vec<Customer> {
    let mut updated: Vec<Customer> = customers.to_vec();
    if let Some(entry) = updated.iter_mut().find(|c| c.phone() == phone) {
        *entry = entry.booked(name.clone());
    } else {
        updated.push(Customer::new(name.clone(), phone.clone()));
    }
    updated
}

fn cancelled(customers: &[Customer], phone: &Phone) -> Vec<Customer> {
    let mut updated: Vec<Customer> = Vec::with_capacity(customers.len());
    for customer in customers {
        if customer.phone() == phone {
            if let Some(remaining) = customer.cancelled() {
                updated.push(remaining);
            }
            // Counter hit zero: entry dropped.
        } else {
            updated.push(customer.clone());
        }
    }
    updated
}

fn renamed(customers: &[Customer], phone: &Phone, name: &Name) -> Vec<Customer> {
    customers
        .iter()
        .map(|customer| {
            if customer.phone() == phone {
                customer.renamed(name.clone())
            } else {
                customer.clone()
            }
        })
        .collect()
}
