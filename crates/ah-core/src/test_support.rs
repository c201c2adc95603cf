//! Fixtures shared by the unit tests in this crate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::error::StorageError;
use crate::models::{Resource, Review, User, UserProfile};
use crate::store::PersistentStore;
use crate::traits::{Clock, KeyValueStore};

/// Shared map; clones see the same entries.
#[derive(Clone, Default)]
pub struct MapStore(Arc<Mutex<HashMap<String, String>>>);

impl MapStore {
    pub fn put(&self, key: &str, value: &str) {
        self.0.lock().unwrap().insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.0.lock().unwrap().get(key).cloned()
    }
}

impl KeyValueStore for MapStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.put(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.0.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Clock that only moves when told to.
#[derive(Clone)]
pub struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

impl ManualClock {
    pub fn starting_at(at: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(at)))
    }

    pub fn advance(&self, by: Duration) {
        *self.0.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap()
}

pub fn memory_store() -> PersistentStore {
    PersistentStore::new(MapStore::default())
}

pub fn user(id: &str, email: &str) -> User {
    User {
        id: id.into(),
        email: email.into(),
        display_name: format!("User {id}"),
        password: "password1".into(),
        role: "student".into(),
        profile: UserProfile::default(),
    }
}

pub fn resource(id: &str, created_at: DateTime<Utc>) -> Resource {
    Resource {
        id: id.into(),
        title: format!("Resource {id}"),
        description: String::new(),
        tags: Vec::new(),
        department: "CS".into(),
        course_code: "CS101".into(),
        subject: "Programming".into(),
        kind: "pdf".into(),
        created_at,
        downloads: 0,
        uploader_id: "u0".into(),
    }
}

pub fn review(user_id: &str, resource_id: &str, rating: f64) -> Review {
    Review {
        resource_id: resource_id.into(),
        user_id: user_id.into(),
        rating,
        text: String::new(),
        created_at: t0(),
        updated_at: None,
    }
}
