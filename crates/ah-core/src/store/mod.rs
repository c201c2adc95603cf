//! # PersistentStore
//!
//! Typed CRUD and query operations over the AcademicHub collections.
//!
//! Every call reads the collection it needs in full from the injected
//! `KeyValueStore`, applies the change, and writes the whole collection back.
//! Nothing is cached between calls. Faults never reach the caller: a missing,
//! unreadable, or undecodable entry reads as empty, and a failed write is
//! logged and dropped.
//!
//! Read-modify-write cycles assume a single writer. Sharing one medium
//! between concurrent stores can break the per-pair uniqueness rules.

mod collaboration;
mod downloads;
mod progress;
mod resources;
mod reviews;
mod users;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::keys::{Record, StorageKey, DEFAULT_KEY_PREFIX};
use crate::traits::{Clock, KeyValueStore, SystemClock};

pub struct PersistentStore {
    medium: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    prefix: String,
}

impl PersistentStore {
    pub fn new(medium: impl KeyValueStore + 'static) -> Self {
        Self {
            medium: Box::new(medium),
            clock: Box::new(SystemClock),
            prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // ── Raw access ──────────────────────────────────────────────────────────

    fn read_value<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let physical = key.with_prefix(&self.prefix);
        let raw = match self.medium.get(&physical) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %physical, error = %e, "read failed, treating as empty");
                return None;
            }
        };
        match serde_json::from_str::<Option<T>>(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %physical, error = %e, "undecodable entry, treating as empty");
                None
            }
        }
    }

    /// Returns `false` when the value did not reach the medium.
    fn write_value<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> bool {
        let physical = key.with_prefix(&self.prefix);
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!(key = %physical, error = %e, "failed to encode value, write dropped");
                return false;
            }
        };
        match self.medium.set(&physical, &encoded) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key = %physical, error = %e, "write failed");
                false
            }
        }
    }

    fn remove_value(&self, key: StorageKey) {
        let physical = key.with_prefix(&self.prefix);
        if let Err(e) = self.medium.remove(&physical) {
            tracing::error!(key = %physical, error = %e, "remove failed");
        }
    }

    // ── Collection primitives ───────────────────────────────────────────────

    /// The whole collection in storage order. Never fails; an absent entry
    /// or one that is not a JSON array reads as an empty vector. Individual
    /// records that do not fit `T` are skipped, so the rest survive the next
    /// write.
    pub fn get_all<T: Record>(&self) -> Vec<T> {
        let raw = self.read_value::<Vec<serde_json::Value>>(T::KEY).unwrap_or_default();
        raw.into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<T>(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(key = %T::KEY, index, error = %e, "skipping undecodable record");
                    None
                }
            })
            .collect()
    }

    /// Overwrites the whole collection. Returns `false` if the write was
    /// dropped.
    pub fn replace_all<T: Record>(&self, items: &[T]) -> bool {
        tracing::debug!(key = %T::KEY, count = items.len(), "replacing collection");
        self.write_value(T::KEY, items)
    }

    /// Applies `change` to the first record accepted by `matches` and
    /// persists the collection. Returns the changed record, or `None` (and
    /// writes nothing) if no record matched.
    fn modify_first<T: Record>(
        &self,
        matches: impl Fn(&T) -> bool,
        change: impl FnOnce(&mut T),
    ) -> Option<T> {
        let mut items = self.get_all::<T>();
        let slot = items.iter_mut().find(|item| matches(item))?;
        change(slot);
        let changed = slot.clone();
        self.replace_all(&items);
        Some(changed)
    }

    fn filter_all<T: Record>(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.get_all::<T>().into_iter().filter(|item| keep(item)).collect()
    }

    fn append<T: Record>(&self, item: T) {
        let mut items = self.get_all::<T>();
        items.push(item);
        self.replace_all(&items);
    }

    // ── Seeding flag ────────────────────────────────────────────────────────

    /// Only a stored JSON `true` counts; other truthy values read as unseeded.
    pub fn is_seeded(&self) -> bool {
        self.read_value::<bool>(StorageKey::Seeded).unwrap_or(false)
    }

    pub fn mark_seeded(&self) {
        self.write_value(StorageKey::Seeded, &true);
    }
}
