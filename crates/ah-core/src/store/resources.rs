use crate::models::{Resource, ResourceUpdate, Review};
use crate::search::{self, ResourceSummary, SearchCriteria};

use super::PersistentStore;

impl PersistentStore {
    /// Prepends, so the default listing shows newest uploads first.
    pub fn add_resource(&self, resource: Resource) {
        tracing::debug!(resource_id = %resource.id, "adding resource");
        let mut resources = self.get_all::<Resource>();
        resources.insert(0, resource);
        self.replace_all(&resources);
    }

    pub fn get_resource_by_id(&self, id: &str) -> Option<Resource> {
        self.get_all::<Resource>().into_iter().find(|r| r.id == id)
    }

    /// Shallow merge by id. No-op for an unknown id.
    pub fn update_resource(&self, id: &str, update: ResourceUpdate) -> Option<Resource> {
        self.modify_first(|r: &Resource| r.id == id, |r| update.apply(r))
    }

    /// Removes every resource with `id`. Reviews, comments and other
    /// records pointing at it are left in place.
    pub fn delete_resource(&self, id: &str) {
        let mut resources = self.get_all::<Resource>();
        let before = resources.len();
        resources.retain(|r| r.id != id);
        if resources.len() != before {
            tracing::debug!(resource_id = %id, "deleting resource");
            self.replace_all(&resources);
        }
    }

    pub fn search_resources(&self, criteria: &SearchCriteria) -> Vec<ResourceSummary> {
        search::search(self.get_all::<Resource>(), &self.get_all::<Review>(), criteria)
    }
}
