use crate::keys::StorageKey;
use crate::models::{User, UserUpdate};

use super::PersistentStore;

impl PersistentStore {
    /// Appends without checking email uniqueness; see `accounts::sign_up`
    /// for the checked path.
    pub fn add_user(&self, user: User) {
        tracing::debug!(user_id = %user.id, "adding user");
        self.append(user);
    }

    /// First user whose email matches exactly (case-sensitive).
    pub fn find_user(&self, email: &str) -> Option<User> {
        self.get_all::<User>().into_iter().find(|u| u.email == email)
    }

    pub fn get_user_by_id(&self, id: &str) -> Option<User> {
        self.get_all::<User>().into_iter().find(|u| u.id == id)
    }

    pub fn current_user(&self) -> Option<User> {
        self.read_value(StorageKey::CurrentUser)
    }

    pub fn set_current_user(&self, user: &User) {
        self.write_value(StorageKey::CurrentUser, user);
    }

    pub fn logout(&self) {
        self.remove_value(StorageKey::CurrentUser);
    }

    /// Shallow-merges `update` into the user with `id`, refreshing the
    /// session slot when that user is signed in. No-op for an unknown id.
    pub fn update_user(&self, id: &str, update: UserUpdate) -> Option<User> {
        let updated = self.modify_first(|u: &User| u.id == id, |u| update.apply(u))?;
        if self.current_user().is_some_and(|cur| cur.id == id) {
            self.set_current_user(&updated);
        }
        Some(updated)
    }
}
