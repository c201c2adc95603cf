//! # Storage Key Schema
//!
//! Every value AcademicHub persists lives under one of these keys.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Prefix used by the browser build; kept so existing dumps stay readable.
pub const DEFAULT_KEY_PREFIX: &str = "ah_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Users,
    CurrentUser,
    Resources,
    Reviews,
    Comments,
    PullRequests,
    Progress,
    Downloads,
    Seeded,
}

impl StorageKey {
    pub const ALL: [StorageKey; 9] = [
        StorageKey::Users,
        StorageKey::CurrentUser,
        StorageKey::Resources,
        StorageKey::Reviews,
        StorageKey::Comments,
        StorageKey::PullRequests,
        StorageKey::Progress,
        StorageKey::Downloads,
        StorageKey::Seeded,
    ];

    /// Unprefixed key name.
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Users => "users",
            StorageKey::CurrentUser => "currentUser",
            StorageKey::Resources => "resources",
            StorageKey::Reviews => "reviews",
            StorageKey::Comments => "comments",
            StorageKey::PullRequests => "pullRequests",
            StorageKey::Progress => "progress",
            StorageKey::Downloads => "downloads",
            StorageKey::Seeded => "seeded",
        }
    }

    /// Physical key in the medium.
    pub fn with_prefix(self, prefix: &str) -> String {
        format!("{}{}", prefix, self.as_str())
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entity persisted as one JSON array under a fixed key.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const KEY: StorageKey;
}
