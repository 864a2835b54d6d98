use async_trait::async_trait;
use auth::PasswordHasher;

use crate::domain::user::ports::Encoder;

/// `Encoder` adapter over the Argon2id hasher from the auth library.
pub struct Argon2Encoder {
    hasher: PasswordHasher,
}

impl Argon2Encoder {
    pub fn new() -> Self {
        Self {
            hasher: PasswordHasher::new(),
        }
    }
}

impl Default for Argon2Encoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Encoder for Argon2Encoder {
    async fn encode(&self, plain: &str) -> Result<String, anyhow::Error> {
        Ok(self.hasher.hash(plain)?)
    }

    async fn compare(&self, plain: &str, encoded: &str) -> Result<bool, anyhow::Error> {
        Ok(self.hasher.verify(plain, encoded)?)
    }
}
