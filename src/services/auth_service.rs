use bcrypt::{hash, verify, DEFAULT_COST};
use serde::Deserialize;

use crate::models::User;
use crate::storage::UserStore;
use crate::utils::AppError;

/// Login/signup form body. Field names match the legacy HTML forms.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

/// Registers a new user, hashing the password with bcrypt before the
/// registry is rewritten. Usernames are unique, case-sensitive.
pub fn register(store: &UserStore, username: &str, password: &str) -> Result<(), AppError> {
    let mut registry = store.load()?;

    if registry.users.iter().any(|u| u.username == username) {
        return Err(AppError::DuplicateUser(username.to_string()));
    }

    let password_hash = hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("failed to hash password: {}", e)))?;

    registry.users.push(User {
        username: username.to_string(),
        password_hash,
    });

    store.save(&registry)
}

/// Linear scan over all users; succeeds only when a username match has a
/// hash that bcrypt-verifies against the supplied plaintext. A wrong
/// password returns `InvalidCredentials`, never a panic.
///
/// There is no rate limiting or lockout here (known design gap, see
/// DESIGN.md).
pub fn authenticate(store: &UserStore, username: &str, password: &str) -> Result<(), AppError> {
    let registry = store.load()?;

    for user in &registry.users {
        if user.username == username {
            let valid = verify(password, &user.password_hash)
                .map_err(|e| AppError::Internal(format!("password verification failed: {}", e)))?;
            if valid {
                return Ok(());
            }
        }
    }

    Err(AppError::InvalidCredentials)
}
