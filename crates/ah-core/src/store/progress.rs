use crate::models::ProgressEntry;

use super::PersistentStore;

impl PersistentStore {
    /// Upsert keyed by (user, resource).
    pub fn set_progress(&self, user_id: &str, resource_id: &str, status: &str) {
        let updated = self.modify_first(
            |p: &ProgressEntry| p.user_id == user_id && p.resource_id == resource_id,
            |p| p.status = status.to_string(),
        );
        if updated.is_none() {
            self.append(ProgressEntry {
                user_id: user_id.to_string(),
                resource_id: resource_id.to_string(),
                status: status.to_string(),
            });
        }
    }

    pub fn get_progress_for_user(&self, user_id: &str) -> Vec<ProgressEntry> {
        self.filter_all(|p: &ProgressEntry| p.user_id == user_id)
    }
}
