//! Comments and pull requests.

use crate::models::{Comment, PullRequest, PullRequestUpdate};

use super::PersistentStore;

impl PersistentStore {
    pub fn add_comment(&self, comment: Comment) {
        self.append(comment);
    }

    /// Insertion order.
    pub fn get_comments_for_resource(&self, resource_id: &str) -> Vec<Comment> {
        self.filter_all(|c: &Comment| c.resource_id == resource_id)
    }

    pub fn add_pull_request(&self, pr: PullRequest) {
        tracing::debug!(pr_id = %pr.id, resource_id = %pr.resource_id, "pull request opened");
        self.append(pr);
    }

    /// Shallow merge by id; used for status transitions. No-op for an
    /// unknown id.
    pub fn update_pull_request(&self, id: &str, update: PullRequestUpdate) -> Option<PullRequest> {
        self.modify_first(|p: &PullRequest| p.id == id, |p| update.apply(p))
    }
}
