use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::UserData;
use crate::domain::user::ports::UserRepository;

/// In-memory user store.
///
/// The record arena is owned by the instance and passed in at construction,
/// never a module-level singleton, so parallel tests cannot contaminate each
/// other. Identifiers are sequential and rendered as strings, continuing
/// after any seeded records.
pub struct InMemoryUserRepository {
    records: RwLock<Vec<UserData>>,
    id_seq: AtomicU64,
}

impl InMemoryUserRepository {
    pub fn new(records: Vec<UserData>) -> Self {
        let id_seq = AtomicU64::new(records.len() as u64);
        Self {
            records: RwLock::new(records),
            id_seq,
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<UserData>, anyhow::Error> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserData>, anyhow::Error> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|record| record.email == email)
            .cloned())
    }

    async fn add(&self, mut user: UserData) -> Result<UserData, anyhow::Error> {
        let id = self.id_seq.fetch_add(1, Ordering::SeqCst);
        user.id = Some(id.to_string());

        self.records.write().await.push(user.clone());
        Ok(user)
    }
}
