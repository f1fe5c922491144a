use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// A persisted document could not be read, parsed or written.
    Storage(String),
    /// Signup with a username that already exists (case-sensitive match).
    DuplicateUser(String),
    /// Unknown username or a password hash that does not verify.
    InvalidCredentials,
    /// An outbound provider call failed (transport or non-success status).
    Provider(String),
    /// A capability slot with no defined behavior yet.
    NotSupported(&'static str),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::DuplicateUser(username) => write!(f, "Username already exists: {}", username),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::Provider(msg) => write!(f, "Provider error: {}", msg),
            AppError::NotSupported(what) => write!(f, "{} is not yet supported", what),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
