use crate::models::{Download, ResourceUpdate};

use super::PersistentStore;

impl PersistentStore {
    /// Records the first download of a resource by a user and bumps the
    /// resource's counter. Repeat calls for the same pair change nothing, and
    /// the counter is left alone if the record could not be written.
    pub fn add_download(&self, user_id: &str, resource_id: &str) {
        let mut downloads = self.get_all::<Download>();
        if downloads.iter().any(|d| d.user_id == user_id && d.resource_id == resource_id) {
            return;
        }
        downloads.push(Download {
            user_id: user_id.to_string(),
            resource_id: resource_id.to_string(),
            at: self.now(),
        });
        if !self.replace_all(&downloads) {
            return;
        }

        if let Some(resource) = self.get_resource_by_id(resource_id) {
            self.update_resource(
                resource_id,
                ResourceUpdate {
                    downloads: Some(resource.downloads.saturating_add(1)),
                    ..Default::default()
                },
            );
        }
    }

    pub fn get_downloads_for_user(&self, user_id: &str) -> Vec<Download> {
        self.filter_all(|d: &Download| d.user_id == user_id)
    }
}
