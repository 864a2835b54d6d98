use async_trait::async_trait;
use chrono::Duration;

use crate::domain::user::errors::TokenError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::AuthenticationResult;
use crate::domain::user::models::Payload;
use crate::domain::user::models::UserData;

/// Port for the user-facing business operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user from raw credentials.
    ///
    /// # Returns
    /// The persisted record, with the repository-assigned id and the
    /// password as stored (encoded)
    ///
    /// # Errors
    /// * `InvalidEmail` / `InvalidPassword` - Validation failed
    /// * `ExistingUser` - The email is already registered
    /// * `Unknown` - Repository or encoder fault
    async fn sign_up(&self, email: String, password: String) -> Result<UserData, UserError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `WrongPassword` - Credentials do not match
    /// * `Unknown` - Repository, encoder, or token fault
    async fn sign_in(
        &self,
        email: String,
        password: String,
    ) -> Result<AuthenticationResult, UserError>;
}

/// Persistence operations for user records.
///
/// Failures here are infrastructure faults; business conditions (user
/// present or absent) travel through the `Option` in the success arm.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    async fn find_all(&self) -> Result<Vec<UserData>, anyhow::Error>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserData>, anyhow::Error>;

    /// Persist a new record, assigning a fresh identifier.
    async fn add(&self, user: UserData) -> Result<UserData, anyhow::Error>;
}

/// One-way password encoding.
#[async_trait]
pub trait Encoder: Send + Sync + 'static {
    /// Encode a plaintext password. Non-reversible.
    async fn encode(&self, plain: &str) -> Result<String, anyhow::Error>;

    /// Compare a plaintext password against a stored encoded one.
    async fn compare(&self, plain: &str, encoded: &str) -> Result<bool, anyhow::Error>;
}

/// Token issuing and verification.
///
/// `verify` must be idempotent and side-effect-free, and must round-trip the
/// exact payload given to `sign` for the token's validity window. A token
/// past its expiry is a verification failure (`Expired`), not a fault.
#[async_trait]
pub trait TokenManager: Send + Sync + 'static {
    async fn sign(
        &self,
        payload: Payload,
        expires_in: Option<Duration>,
    ) -> Result<String, anyhow::Error>;

    async fn verify(&self, token: &str) -> Result<Payload, TokenError>;
}
