use async_trait::async_trait;
use auth::JwtCodec;
use auth::TokenClaims;
use auth::TokenCodecError;
use chrono::Duration;

use crate::domain::user::errors::TokenError;
use crate::domain::user::models::Payload;
use crate::domain::user::ports::TokenManager;

/// `TokenManager` adapter over the JWT codec from the auth library.
///
/// The payload identifier travels as the `sub` claim.
pub struct JwtTokenManager {
    codec: JwtCodec,
}

impl JwtTokenManager {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            codec: JwtCodec::new(secret),
        }
    }
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn sign(
        &self,
        payload: Payload,
        expires_in: Option<Duration>,
    ) -> Result<String, anyhow::Error> {
        let claims = match expires_in {
            Some(valid_for) => TokenClaims::expiring_in(payload.id, valid_for),
            None => TokenClaims::new(payload.id),
        };
        Ok(self.codec.encode(&claims)?)
    }

    async fn verify(&self, token: &str) -> Result<Payload, TokenError> {
        match self.codec.decode(token) {
            Ok(claims) => Ok(Payload { id: claims.sub }),
            Err(TokenCodecError::Expired) => Err(TokenError::Expired),
            Err(e) => {
                tracing::debug!(error = %e, "Token failed verification");
                Err(TokenError::Invalid)
            }
        }
    }
}
