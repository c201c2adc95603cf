//! # Core Traits (Ports)
//!
//! Any persistence plugin must implement `KeyValueStore` to back a
//! `PersistentStore`.

use chrono::{DateTime, Utc};

use crate::error::StorageError;

/// Flat string-keyed persistence medium.
///
/// Receivers are `&self`; implementations use interior mutability. A missing
/// key is `Ok(None)`, and removing a missing key is not an error.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Source of the timestamps the store stamps on its own.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
