// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::{CustomerData, ReservationData};
use crate::error::PersistenceError;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tablebook_domain::{Customer, Reservation};
use tracing::{debug, info};

/// Storage for the reservation book.
///
/// `load` returns the full list in file order; `save` replaces the whole
/// file. There is no partial update: the book is one aggregate.
pub trait ReservationRepository {
    /// Loads every persisted reservation.
    ///
    /// # Errors
    ///
    /// Returns a `PersistenceError` if the backing store cannot be read or
    /// contains invalid records.
    fn load(&self) -> Result<Vec<Reservation>, PersistenceError>;

    /// Persists the full reservation list, replacing previous contents.
    ///
    /// # Errors
    ///
    /// Returns a `PersistenceError` if the backing store cannot be written.
    fn save(&self, reservations: &[Reservation]) -> Result<(), PersistenceError>;
}

/// Storage for the customer ledger, with the same whole-list contract.
pub trait CustomerRepository {
    /// Loads every persisted ledger entry.
    ///
    /// # Errors
    ///
    /// Returns a `PersistenceError` if the backing store cannot be read or
    /// contains invalid records.
    fn load(&self) -> Result<Vec<Customer>, PersistenceError>;

    /// Persists the full ledger, replacing previous contents.
    ///
    /// # Errors
    ///
    /// Returns a `PersistenceError` if the backing store cannot be written.
    fn save(&self, customers: &[Customer]) -> Result<(), PersistenceError>;
}

/// File-backed reservation storage: a single JSON array of records.
#[derive(Debug, Clone)]
pub struct JsonReservationRepository {
    path: PathBuf,
}

impl JsonReservationRepository {
    /// Creates a repository backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReservationRepository for JsonReservationRepository {
    fn load(&self) -> Result<Vec<Reservation>, PersistenceError> {
        let records: Vec<ReservationData> = read_records(&self.path)?;
        let reservations: Vec<Reservation> = records
            .iter()
            .map(ReservationData::to_domain)
            .collect::<Result<_, _>>()?;
        debug!(
            count = reservations.len(),
            path = %self.path.display(),
            "loaded reservation book"
        );
        Ok(reservations)
    }

    fn save(&self, reservations: &[Reservation]) -> Result<(), PersistenceError> {
        let records: Vec<ReservationData> =
            reservations.iter().map(ReservationData::from_domain).collect();
        write_records(&self.path, &records)?;
        info!(
            count = reservations.len(),
            path = %self.path.display(),
            "saved reservation book"
        );
        Ok(())
    }
}

/// File-backed ledger storage: a single JSON array of customer records.
#[derive(Debug, Clone)]
pub struct JsonCustomerRepository {
    path: PathBuf,
}

impl JsonCustomerRepository {
    /// Creates a repository backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CustomerRepository for JsonCustomerRepository {
    fn load(&self) -> Result<Vec<Customer>, PersistenceError> {
        let records: Vec<CustomerData> = read_records(&self.path)?;
        let customers: Vec<Customer> = records
            .iter()
            .map(CustomerData::to_domain)
            .collect::<Result<_, _>>()?;
        debug!(
            count = customers.len(),
            path = %self.path.display(),
            "loaded customer ledger"
        );
        Ok(customers)
    }

    fn save(&self, customers: &[Customer]) -> Result<(), PersistenceError> {
        let records: Vec<CustomerData> =
            customers.iter().map(CustomerData::from_domain).collect();
        write_records(&self.path, &records)?;
        info!(
            count = customers.len(),
            path = %self.path.display(),
            "saved customer ledger"
        );
        Ok(())
    }
}

/// In-memory reservation storage for tests and ephemeral sessions.
///
/// The tool is single-threaded, so interior mutability via `RefCell` is
/// sufficient.
#[derive(Debug, Default)]
pub struct MemoryReservationRepository {
    reservations: RefCell<Vec<Reservation>>,
}

impl MemoryReservationRepository {
    /// Creates an empty in-memory store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reservations: RefCell::new(Vec::new()),
        }
    }

    /// Creates a store pre-filled with reservations.
    #[must_use]
    pub const fn with_reservations(reservations: Vec<Reservation>) -> Self {
        Self {
            reservations: RefCell::new(reservations),
        }
    }
}

impl ReservationRepository for MemoryReservationRepository {
    fn load(&self) -> Result<Vec<Reservation>, PersistenceError> {
        Ok(self.reservations.borrow().clone())
    }

    fn save(&self, reservations: &[Reservation]) -> Result<(), PersistenceError> {
        *self.reservations.borrow_mut() = reservations.to_vec();
        Ok(())
    }
}

/// In-memory ledger storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCustomerRepository {
    customers: RefCell<Vec<Customer>>,
}

impl MemoryCustomerRepository {
    /// Creates an empty in-memory store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            customers: RefCell::new(Vec::new()),
        }
    }

    /// Creates a store pre-filled with ledger entries.
    #[must_use]
    pub const fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: RefCell::new(customers),
        }
    }
}

impl CustomerRepository for MemoryCustomerRepository {
    fn load(&self) -> Result<Vec<Customer>, PersistenceError> {
        Ok(self.customers.borrow().clone())
    }

    fn save(&self, customers: &[Customer]) -> Result<(), PersistenceError> {
        *self.customers.borrow_mut() = customers.to_vec();
        Ok(())
    }
}

/// Reads a JSON array of records from `path`.
///
/// A missing file is a first run and loads as an empty list; an unreadable
/// or undecodable file is an error, never silently dropped.
fn read_records<T>(path: &Path) -> Result<Vec<T>, PersistenceError>
where
    T: serde::de::DeserializeOwned,
{
    if !path.exists() {
        debug!(path = %path.display(), "data file missing, starting empty");
        return Ok(Vec::new());
    }
    let contents: String =
        std::fs::read_to_string(path).map_err(|err| PersistenceError::IoError(err.to_string()))?;
    serde_json::from_str(&contents)
        .map_err(|err| PersistenceError::SerializationError(err.to_string()))
}

/// Writes a JSON array of records to `path`, creating parent directories.
fn write_records<T>(path: &Path, records: &[T]) -> Result<(), PersistenceError>
where
    T: serde::Serialize,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|err| PersistenceError::IoError(err.to_string()))?;
    }
    let contents: String = serde_json::to_string_pretty(records)
        .map_err(|err| PersistenceError::SerializationError(err.to_string()))?;
    std::fs::write(path, contents).map_err(|err| PersistenceError::IoError(err.to_string()))
}
