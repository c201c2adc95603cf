//! # Accounts
//!
//! Sign-up and log-in flows on top of `PersistentStore`. These are the only
//! paths that enforce email uniqueness; `PersistentStore::add_user` does not.
//! Passwords are compared in clear.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{new_id, User, UserProfile, UserUpdate};
use crate::store::PersistentStore;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const DEFAULT_ROLE: &str = "student";

/// Sign-up form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub email: String,
    pub display_name: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub profile: UserProfile,
}

fn validate_email(email: &str) -> Result<()> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(AppError::ValidationError(format!("'{email}' is not an email address"))),
    }
}

fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::ValidationError(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Registers a new user and signs them in.
pub fn sign_up(store: &PersistentStore, account: NewAccount) -> Result<User> {
    let email = account.email.trim().to_string();
    validate_email(&email)?;
    if account.display_name.trim().is_empty() {
        return Err(AppError::ValidationError("display name is required".into()));
    }
    validate_password(&account.password)?;
    if store.find_user(&email).is_some() {
        return Err(AppError::Conflict(format!("email {email} is already registered")));
    }

    let user = User {
        id: new_id(),
        email,
        display_name: account.display_name.trim().to_string(),
        password: account.password,
        role: account.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        profile: account.profile,
    };
    store.add_user(user.clone());
    store.set_current_user(&user);
    tracing::info!(user_id = %user.id, "user signed up");
    Ok(user)
}

/// Checks credentials and makes the user the session user.
pub fn log_in(store: &PersistentStore, email: &str, password: &str) -> Result<User> {
    let user = store
        .find_user(email.trim())
        .filter(|u| u.password == password)
        .ok_or_else(|| AppError::Unauthorized("invalid email or password".into()))?;
    store.set_current_user(&user);
    tracing::info!(user_id = %user.id, "user logged in");
    Ok(user)
}

/// Profile edit with the checks the raw `update_user` skips: the user must
/// exist, and a changed email must stay unique and well-formed.
pub fn update_profile(store: &PersistentStore, user_id: &str, update: UserUpdate) -> Result<User> {
    if let Some(email) = update.email.as_deref() {
        validate_email(email)?;
        if store.find_user(email).is_some_and(|other| other.id != user_id) {
            return Err(AppError::Conflict(format!("email {email} is already registered")));
        }
    }
    if let Some(password) = update.password.as_deref() {
        validate_password(password)?;
    }
    store
        .update_user(user_id, update)
        .ok_or_else(|| AppError::NotFound("User".into(), user_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{memory_store, user};

    fn form(email: &str) -> NewAccount {
        NewAccount {
            email: email.into(),
            display_name: "Grace".into(),
            password: "hopper42".into(),
            role: None,
            profile: UserProfile::default(),
        }
    }

    #[test]
    fn test_sign_up_registers_and_starts_session() {
        let store = memory_store();
        let grace = sign_up(&store, form("grace@navy.mil")).unwrap();

        assert_eq!(grace.role, DEFAULT_ROLE);
        assert_eq!(store.find_user("grace@navy.mil"), Some(grace.clone()));
        assert_eq!(store.current_user(), Some(grace));
    }

    #[test]
    fn test_sign_up_rejects_duplicate_email() {
        let store = memory_store();
        store.add_user(user("u1", "grace@navy.mil"));

        let err = sign_up(&store, form("grace@navy.mil")).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.get_all::<User>().len(), 1);
    }

    #[test]
    fn test_sign_up_validates_input() {
        let store = memory_store();
        assert!(matches!(sign_up(&store, form("no-at-sign")), Err(AppError::ValidationError(_))));

        let mut short = form("g@navy.mil");
        short.password = "abc".into();
        assert!(matches!(sign_up(&store, short), Err(AppError::ValidationError(_))));

        let mut nameless = form("g@navy.mil");
        nameless.display_name = "   ".into();
        assert!(matches!(sign_up(&store, nameless), Err(AppError::ValidationError(_))));

        assert!(store.get_all::<User>().is_empty());
    }

    #[test]
    fn test_log_in_checks_password() {
        let store = memory_store();
        store.add_user(user("u1", "ada@uni.edu"));

        assert!(matches!(log_in(&store, "ada@uni.edu", "wrong"), Err(AppError::Unauthorized(_))));
        assert!(matches!(log_in(&store, "nobody@uni.edu", "password1"), Err(AppError::Unauthorized(_))));
        assert!(store.current_user().is_none());

        let ada = log_in(&store, "ada@uni.edu", "password1").unwrap();
        assert_eq!(store.current_user(), Some(ada));
    }

    #[test]
    fn test_update_profile_guards_email() {
        let store = memory_store();
        store.add_user(user("u1", "ada@uni.edu"));
        store.add_user(user("u2", "bob@uni.edu"));

        let taken = UserUpdate { email: Some("bob@uni.edu".into()), ..Default::default() };
        assert!(matches!(update_profile(&store, "u1", taken), Err(AppError::Conflict(_))));

        let same = UserUpdate { email: Some("ada@uni.edu".into()), ..Default::default() };
        assert!(update_profile(&store, "u1", same).is_ok());

        let ghost = UserUpdate { role: Some("educator".into()), ..Default::default() };
        assert!(matches!(update_profile(&store, "u9", ghost), Err(AppError::NotFound(_, _))));
    }
}
