// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Reading or writing a data file failed.
    IoError(String),
    /// A data file could not be serialized or deserialized as JSON.
    SerializationError(String),
    /// A record deserialized fine but failed domain validation.
    InvalidRecord(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(msg) => write!(f, "IO error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InvalidRecord(msg) => write!(f, "Invalid record: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}
