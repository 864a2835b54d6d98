use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email: {0}.")]
    InvalidFormat(String),
}

/// Error for Password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain at least one digit")]
    NoDigit,

    #[error("Password must contain at least one letter")]
    NoLetter,
}

/// Error for token verification failures.
///
/// `Invalid` and `Expired` are verification outcomes the middleware maps to
/// Forbidden. `Fault` is the infrastructure channel: the verifier itself
/// failed, and the caller presents a server error instead.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token.")]
    Invalid,

    #[error("Token is expired.")]
    Expired,

    #[error(transparent)]
    Fault(#[from] anyhow::Error),
}

/// Top-level error for sign-up and sign-in operations
#[derive(Debug, Error)]
pub enum UserError {
    // Value object validation errors (converted via #[from])
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}.")]
    InvalidPassword(#[from] PasswordError),

    // Business-rule errors
    #[error("User {0} already registered.")]
    ExistingUser(String),

    #[error("User not found: {0}.")]
    NotFound(String),

    #[error("Wrong password.")]
    WrongPassword,

    // Infrastructure faults
    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        UserError::Unknown(err.to_string())
    }
}
