// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Name, Phone};

/// Number of bookings at which a customer becomes a regular.
pub const REGULAR_BOOKING_THRESHOLD: u32 = 3;

/// A customer ledger entry.
///
/// The ledger is a phone-keyed secondary index over the reservation store:
/// one entry per phone number, carrying the last-seen name and a booking
/// counter. Entries are owned exclusively by the ledger; command handlers
/// never construct them directly. The regular flag is a pure derivation of
/// the counter and is never stored independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Last-seen name for this phone number.
    name: Name,
    /// The phone number keying this entry.
    phone: Phone,
    /// Number of live bookings attributed to this phone.
    booking_count: u32,
}

impl Customer {
    /// Creates a ledger entry for a first booking (counter starts at 1).
    #[must_use]
    pub const fn new(name: Name, phone: Phone) -> Self {
        Self {
            name,
            phone,
            booking_count: 1,
        }
    }

    /// Reconstructs an entry with an explicit counter, as loaded from
    /// persistence.
    #[must_use]
    pub const fn with_count(name: Name, phone: Phone, booking_count: u32) -> Self {
        Self {
            name,
            phone,
            booking_count,
        }
    }

    /// Returns the last-seen name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the phone number.
    #[must_use]
    pub const fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Returns the booking counter.
    #[must_use]
    pub const fn booking_count(&self) -> u32 {
        self.booking_count
    }

    /// Returns whether the customer has reached regular status.
    #[must_use]
    pub const fn is_regular(&self) -> bool {
        self.booking_count >= REGULAR_BOOKING_THRESHOLD
    }

    /// Returns a copy with the counter incremented and the last-seen name
    /// refreshed.
    #[must_use]
    pub fn booked(&self, name: Name) -> Self {
        Self {
            name,
            phone: self.phone.clone(),
            booking_count: self.booking_count + 1,
        }
    }

    /// Returns a copy with the counter decremented, or `None` when the
    /// counter reaches zero (the entry is removed entirely; a later booking
    /// from the same phone is a new customer).
    #[must_use]
    pub fn cancelled(&self) -> Option<Self> {
        let remaining: u32 = self.booking_count.saturating_sub(1);
        (remaining > 0).then(|| Self {
            name: self.name.clone(),
            phone: self.phone.clone(),
            booking_count: remaining,
        })
    }

    /// Returns a copy renamed in place, counter preserved.
    #[must_use]
    pub fn renamed(&self, name: Name) -> Self {
        Self {
            name,
            phone: self.phone.clone(),
            booking_count: self.booking_count,
        }
    }
}
