// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::repository::CustomerRepository;
use tablebook::{LedgerDelta, apply_ledger_delta};
use tablebook_domain::Customer;
use tracing::info;

/// Keeps the customer ledger consistent with store mutations.
///
/// Every delta is recorded as reload, apply, save: the ledger state is
/// re-read from the repository before each adjustment rather than cached
/// across commands. This re-synchronization is a deliberate consistency
/// mechanism — the ledger file is a source of truth independent of the
/// in-memory book's lifetime, and reloading first prevents the two files
/// from drifting apart when one of them is replaced externally. It makes
/// every mutation an I/O round-trip, which a single-user tool can afford.
#[derive(Debug)]
pub struct LedgerSync<R: CustomerRepository> {
    repository: R,
}

impl<R: CustomerRepository> LedgerSync<R> {
    /// Creates a ledger sync over the given repository.
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Records one store mutation's delta against the ledger.
    ///
    /// Returns the ledger contents after the adjustment, as persisted.
    ///
    /// # Arguments
    ///
    /// * `delta` - The adjustment emitted by the store transition
    ///
    /// # Errors
    ///
    /// Returns a `PersistenceError` if the reload or the save fails. The
    /// delta application itself is pure and cannot fail.
    pub fn record(&self, delta: &LedgerDelta) -> Result<Vec<Customer>, PersistenceError> {
        let current: Vec<Customer> = self.repository.load()?;
        let updated: Vec<Customer> = apply_ledger_delta(&current, delta);
        self.repository.save(&updated)?;
        info!(
            entries = updated.len(),
            "customer ledger synchronized after store mutation"
        );
        Ok(updated)
    }

    /// Loads the current ledger contents without mutating them.
    ///
    /// # Errors
    ///
    /// Returns a `PersistenceError` if the repository cannot be read.
    pub fn current(&self) -> Result<Vec<Customer>, PersistenceError> {
        self.repository.load()
    }
}
