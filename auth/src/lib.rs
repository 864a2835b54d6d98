//! Authentication infrastructure library
//!
//! Provides the cryptographic building blocks the notes service consumes
//! through its ports:
//! - Password hashing (Argon2id)
//! - JWT token encoding and verification with optional expiry
//!
//! The service defines its own `Encoder` and `TokenManager` traits and adapts
//! these implementations. Keeping the crate domain-free means it can back any
//! claims shape that serializes to a `sub` identifier.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{JwtCodec, TokenClaims};
//!
//! let codec = JwtCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.encode(&TokenClaims::new("user123")).unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::JwtCodec;
pub use token::TokenClaims;
pub use token::TokenCodecError;
