use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AuthenticationResult;
use crate::domain::user::models::Payload;
use crate::domain::user::models::User;
use crate::domain::user::models::UserData;
use crate::domain::user::ports::Encoder;
use crate::domain::user::ports::TokenManager;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service for sign-up and sign-in.
///
/// Orchestrates the repository, encoder, and token manager ports; every
/// business failure comes back as a `UserError`, never a panic.
pub struct UserService<UR, E, TM>
where
    UR: UserRepository,
    E: Encoder,
    TM: TokenManager,
{
    repository: Arc<UR>,
    encoder: Arc<E>,
    token_manager: Arc<TM>,
    token_ttl: Duration,
}

impl<UR, E, TM> UserService<UR, E, TM>
where
    UR: UserRepository,
    E: Encoder,
    TM: TokenManager,
{
    /// Create a new user service with injected ports.
    ///
    /// # Arguments
    /// * `token_ttl_hours` - Validity window for issued access tokens
    pub fn new(
        repository: Arc<UR>,
        encoder: Arc<E>,
        token_manager: Arc<TM>,
        token_ttl_hours: i64,
    ) -> Self {
        Self {
            repository,
            encoder,
            token_manager,
            token_ttl: Duration::hours(token_ttl_hours),
        }
    }
}

#[async_trait]
impl<UR, E, TM> UserServicePort for UserService<UR, E, TM>
where
    UR: UserRepository,
    E: Encoder,
    TM: TokenManager,
{
    async fn sign_up(&self, email: String, password: String) -> Result<UserData, UserError> {
        // Validation first: no repository call happens for invalid input.
        let user = User::create(email, password)?;

        if self
            .repository
            .find_by_email(user.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::ExistingUser(user.email.as_str().to_string()));
        }

        let encoded = self.encoder.encode(user.password.as_str()).await?;

        let stored = self
            .repository
            .add(UserData {
                id: None,
                email: user.email.as_str().to_string(),
                password: encoded,
            })
            .await?;

        tracing::info!(email = %stored.email, "User signed up");

        Ok(stored)
    }

    async fn sign_in(
        &self,
        email: String,
        password: String,
    ) -> Result<AuthenticationResult, UserError> {
        let stored = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| UserError::NotFound(email.clone()))?;

        if !self.encoder.compare(&password, &stored.password).await? {
            return Err(UserError::WrongPassword);
        }

        let id = stored
            .id
            .ok_or_else(|| UserError::Unknown(format!("Stored user {} has no id", email)))?;

        let access_token = self
            .token_manager
            .sign(Payload { id: id.clone() }, Some(self.token_ttl))
            .await?;

        Ok(AuthenticationResult { id, access_token })
    }
}
