use crate::models::Review;

use super::PersistentStore;

impl PersistentStore {
    pub fn get_reviews_for_resource(&self, resource_id: &str) -> Vec<Review> {
        self.filter_all(|r: &Review| r.resource_id == resource_id)
    }

    /// One review per (user, resource). A repeat submission replaces rating
    /// and text on the existing record, keeps its `created_at`, and stamps
    /// `updated_at` from the store clock. A first submission is stored as
    /// given; the caller supplies `created_at`.
    pub fn add_review(&self, review: Review) {
        let now = self.now();
        let updated = self.modify_first(
            |r: &Review| r.resource_id == review.resource_id && r.user_id == review.user_id,
            |existing| {
                existing.rating = review.rating;
                existing.text = review.text.clone();
                existing.updated_at = Some(now);
            },
        );
        if updated.is_none() {
            tracing::debug!(user_id = %review.user_id, resource_id = %review.resource_id, "new review");
            self.append(review);
        }
    }
}
