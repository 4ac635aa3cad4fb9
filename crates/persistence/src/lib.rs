// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the TableBook reservation tracker.
//!
//! Both stores persist as flat JSON documents: one array of reservation
//! records and one array of customer records. The repository traits keep
//! the storage swappable — the file-backed implementations are used by the
//! application, the in-memory ones by tests and ephemeral sessions.
//!
//! The ledger follows a reload-then-merge discipline: [`LedgerSync`]
//! re-reads the customer file before applying each delta, so the persisted
//! ledger never drifts from what a mutation was computed against.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod data_models;
mod error;
mod ledger;
mod repository;

#[cfg(test)]
mod tests;

pub use data_models::{CustomerData, ReservationData};
pub use error::PersistenceError;
pub use ledger::LedgerSync;
pub use repository::{
    CustomerRepository, JsonCustomerRepository, JsonReservationRepository,
    MemoryCustomerRepository, MemoryReservationRepository, ReservationRepository,
};
