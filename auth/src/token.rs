use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenCodecError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}

/// Claims embedded in a signed token.
///
/// `sub` carries the entity identifier; `exp`/`iat` are Unix timestamps and
/// optional so that non-expiring tokens stay representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl TokenClaims {
    /// Claims without an expiry.
    pub fn new(sub: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            exp: None,
            iat: None,
        }
    }

    /// Claims that expire `valid_for` from now.
    pub fn expiring_in(sub: impl Into<String>, valid_for: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: sub.into(),
            exp: Some((now + valid_for).timestamp()),
            iat: Some(now.timestamp()),
        }
    }
}

/// JWT encoder/verifier using HS256.
///
/// Verification is pure: decoding the same token twice yields the same
/// result, and no state is kept between calls.
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtCodec {
    /// Create a codec from a shared secret.
    ///
    /// The secret should be at least 32 bytes for HS256 and come from
    /// configuration, never from source.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign claims into a compact token string.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn encode(&self, claims: &TokenClaims) -> Result<String, TokenCodecError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenCodecError::EncodingFailed(e.to_string()))
    }

    /// Verify a token signature and decode its claims.
    ///
    /// Tokens without an `exp` claim are accepted; tokens with one are
    /// rejected with `Expired` once past it.
    ///
    /// # Errors
    /// * `Expired` - The `exp` claim is in the past
    /// * `InvalidToken` - Bad signature, malformed token, or wrong algorithm
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenCodecError> {
        let mut validation = Validation::new(self.algorithm);
        validation.required_spec_claims.clear();

        let token_data =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenCodecError::Expired,
                    _ => TokenCodecError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_decode_round_trip() {
        let codec = JwtCodec::new(b"my_secret_key_at_least_32_bytes_long!");

        let claims = TokenClaims::new("user123");
        let token = codec.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = codec.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_tampered_token() {
        let codec = JwtCodec::new(b"my_secret_key_at_least_32_bytes_long!");

        let token = codec.encode(&TokenClaims::new("user123")).unwrap();
        let tampered = format!("{}some trash", token);

        assert!(matches!(
            codec.decode(&tampered),
            Err(TokenCodecError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let signer = JwtCodec::new(b"secret1_at_least_32_bytes_long_key!");
        let verifier = JwtCodec::new(b"secret2_at_least_32_bytes_long_key!");

        let token = signer.encode(&TokenClaims::new("user123")).unwrap();
        assert!(verifier.decode(&token).is_err());
    }

    #[test]
    fn test_decode_expired_token() {
        let codec = JwtCodec::new(b"my_secret_key_at_least_32_bytes_long!");

        let stale = TokenClaims {
            sub: "user123".to_string(),
            exp: Some((Utc::now() - Duration::hours(2)).timestamp()),
            iat: Some((Utc::now() - Duration::hours(3)).timestamp()),
        };
        let token = codec.encode(&stale).unwrap();

        assert!(matches!(
            codec.decode(&token),
            Err(TokenCodecError::Expired)
        ));
    }

    #[test]
    fn test_expiring_claims_window() {
        let claims = TokenClaims::expiring_in("user123", Duration::hours(24));
        let exp = claims.exp.unwrap();
        let iat = claims.iat.unwrap();
        assert_eq!(exp - iat, 24 * 60 * 60);
    }
}
