//! Fixtures shared by the integration test targets.

use std::sync::{Arc, Mutex};

use ah_core::{Clock, PersistentStore, Resource, Review, User, UserProfile};
use ah_storage_memory::MemoryKeyValueStore;
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Clock that only moves when told to.
#[derive(Clone)]
pub struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

impl ManualClock {
    pub fn starting_at(at: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(at)))
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.0.lock() {
            *now += by;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.lock().map(|now| *now).unwrap_or_else(|p| *p.into_inner())
    }
}

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).single().unwrap_or_default()
}

/// Store over a fresh memory medium; the medium handle is returned so tests
/// can inspect or corrupt raw entries.
pub fn memory_store() -> (PersistentStore, MemoryKeyValueStore) {
    let medium = MemoryKeyValueStore::new();
    (PersistentStore::new(medium.clone()), medium)
}

pub fn user(id: &str, email: &str) -> User {
    User {
        id: id.into(),
        email: email.into(),
        display_name: id.to_uppercase(),
        password: "hunter22".into(),
        role: "student".into(),
        profile: UserProfile::default(),
    }
}

pub fn resource(id: &str, department: &str, kind: &str) -> Resource {
    Resource {
        id: id.into(),
        title: format!("{department} {kind} {id}"),
        description: String::new(),
        tags: Vec::new(),
        department: department.into(),
        course_code: format!("{department}100"),
        subject: String::new(),
        kind: kind.into(),
        created_at: epoch(),
        downloads: 0,
        uploader_id: "uploader".into(),
    }
}

pub fn review(user_id: &str, resource_id: &str, rating: f64) -> Review {
    Review {
        resource_id: resource_id.into(),
        user_id: user_id.into(),
        rating,
        text: format!("{rating} stars"),
        created_at: epoch(),
        updated_at: None,
    }
}
