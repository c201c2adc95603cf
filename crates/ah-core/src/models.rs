//! # Domain Models
//!
//! These structs represent the core entities of AcademicHub. They serialize
//! with camelCase field names, the layout the browser build already wrote.
//! Identifiers are opaque strings; freshly minted ones are UUID v4.
//! References between entities (e.g. `Review::resource_id`) are never
//! validated and may dangle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::keys::{Record, StorageKey};

/// Mints a new opaque identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Unique by convention, compared case-sensitively
    pub email: String,
    pub display_name: String,
    /// Stored in clear; there is no hashing in this system
    pub password: String,
    /// e.g. "student", "educator"
    pub role: String,
    #[serde(default)]
    pub profile: UserProfile,
}

/// Free-form profile fields. Replaced as a whole by `UserUpdate::profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// An uploaded study resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub course_code: String,
    #[serde(default)]
    pub subject: String,
    /// e.g. "pdf", "video", "notes"
    #[serde(rename = "type", default)]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    /// Missing in older records; read as 0
    #[serde(default)]
    pub downloads: u64,
    pub uploader_id: String,
}

/// One user's rating of one resource. At most one per (user, resource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub resource_id: String,
    pub user_id: String,
    pub rating: f64,
    #[serde(default)]
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub resource_id: String,
    pub user_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// A proposed change to someone else's resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub id: String,
    pub resource_id: String,
    pub author_id: String,
    #[serde(default)]
    pub title: String,
    pub proposed_change: String,
    #[serde(default)]
    pub status: PullRequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    /// A fresh pending proposal with a new id.
    pub fn propose(
        resource_id: impl Into<String>,
        author_id: impl Into<String>,
        title: impl Into<String>,
        proposed_change: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_id(),
            resource_id: resource_id.into(),
            author_id: author_id.into(),
            title: title.into(),
            proposed_change: proposed_change.into(),
            status: PullRequestStatus::Pending,
            created_at: Some(at),
        }
    }
}

/// A user's study status for a resource. At most one per (user, resource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub user_id: String,
    pub resource_id: String,
    /// e.g. "not-started", "in-progress", "done"
    pub status: String,
}

/// First download of a resource by a user. At most one per (user, resource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    pub user_id: String,
    pub resource_id: String,
    pub at: DateTime<Utc>,
}

impl Record for User {
    const KEY: StorageKey = StorageKey::Users;
}

impl Record for Resource {
    const KEY: StorageKey = StorageKey::Resources;
}

impl Record for Review {
    const KEY: StorageKey = StorageKey::Reviews;
}

impl Record for Comment {
    const KEY: StorageKey = StorageKey::Comments;
}

impl Record for PullRequest {
    const KEY: StorageKey = StorageKey::PullRequests;
}

impl Record for ProgressEntry {
    const KEY: StorageKey = StorageKey::Progress;
}

impl Record for Download {
    const KEY: StorageKey = StorageKey::Downloads;
}

// ── Partial updates ─────────────────────────────────────────────────────────
//
// `Some` replaces the whole field, `None` leaves it alone. Nothing is merged
// below the top level.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub profile: Option<UserProfile>,
}

impl UserUpdate {
    pub fn apply(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(display_name) = self.display_name {
            user.display_name = display_name;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(profile) = self.profile {
            user.profile = profile;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub department: Option<String>,
    pub course_code: Option<String>,
    pub subject: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub downloads: Option<u64>,
}

impl ResourceUpdate {
    pub fn apply(self, resource: &mut Resource) {
        if let Some(title) = self.title {
            resource.title = title;
        }
        if let Some(description) = self.description {
            resource.description = description;
        }
        if let Some(tags) = self.tags {
            resource.tags = tags;
        }
        if let Some(department) = self.department {
            resource.department = department;
        }
        if let Some(course_code) = self.course_code {
            resource.course_code = course_code;
        }
        if let Some(subject) = self.subject {
            resource.subject = subject;
        }
        if let Some(kind) = self.kind {
            resource.kind = kind;
        }
        if let Some(downloads) = self.downloads {
            resource.downloads = downloads;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PullRequestUpdate {
    pub title: Option<String>,
    pub proposed_change: Option<String>,
    pub status: Option<PullRequestStatus>,
}

impl PullRequestUpdate {
    /// Shorthand for a status transition.
    pub fn status(status: PullRequestStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply(self, pr: &mut PullRequest) {
        if let Some(title) = self.title {
            pr.title = title;
        }
        if let Some(proposed_change) = self.proposed_change {
            pr.proposed_change = proposed_change;
        }
        if let Some(status) = self.status {
            pr.status = status;
        }
    }
}
