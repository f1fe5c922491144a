use serde::{Deserialize, Serialize};

/// A registered user. Created on signup, never mutated or deleted.
/// The hash is persisted under the legacy `password` field name so the
/// on-disk document stays compatible with existing `users.json` files.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub username: String,
    #[serde(rename = "password")]
    pub password_hash: String,
}

/// The whole persisted user document: `{"users": [...]}`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UserRegistry {
    pub users: Vec<User>,
}
