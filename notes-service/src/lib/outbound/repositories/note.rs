use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::note::models::NoteData;
use crate::domain::note::ports::NoteRepository;

/// In-memory note store, same construction rules as the user store:
/// instance-owned arena, sequential string ids.
pub struct InMemoryNoteRepository {
    records: RwLock<Vec<NoteData>>,
    id_seq: AtomicU64,
}

impl InMemoryNoteRepository {
    pub fn new(records: Vec<NoteData>) -> Self {
        let id_seq = AtomicU64::new(records.len() as u64);
        Self {
            records: RwLock::new(records),
            id_seq,
        }
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn find_all_notes_from(&self, owner_id: &str) -> Result<Vec<NoteData>, anyhow::Error> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|note| note.owner_id.as_deref() == Some(owner_id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, note_id: &str) -> Result<Option<NoteData>, anyhow::Error> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|note| note.id.as_deref() == Some(note_id))
            .cloned())
    }

    async fn add(&self, mut note: NoteData) -> Result<NoteData, anyhow::Error> {
        let id = self.id_seq.fetch_add(1, Ordering::SeqCst);
        note.id = Some(id.to_string());

        self.records.write().await.push(note.clone());
        Ok(note)
    }

    async fn remove(&self, note_id: &str) -> Result<Option<NoteData>, anyhow::Error> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|note| note.id.as_deref() == Some(note_id));
        Ok(position.map(|index| records.remove(index)))
    }

    async fn update_title(&self, note_id: &str, title: &str) -> Result<bool, anyhow::Error> {
        let mut records = self.records.write().await;
        match records
            .iter_mut()
            .find(|note| note.id.as_deref() == Some(note_id))
        {
            Some(note) => {
                note.title = Some(title.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_content(&self, note_id: &str, content: &str) -> Result<bool, anyhow::Error> {
        let mut records = self.records.write().await;
        match records
            .iter_mut()
            .find(|note| note.id.as_deref() == Some(note_id))
        {
            Some(note) => {
                note.content = Some(content.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(owner_id: &str, title: &str) -> NoteData {
        NoteData {
            id: None,
            title: Some(title.to_string()),
            content: Some("content".to_string()),
            owner_id: Some(owner_id.to_string()),
            owner_email: Some("my@mail.com".to_string()),
        }
    }

    #[tokio::test]
    async fn test_find_all_notes_from_filters_by_owner() {
        let repository = InMemoryNoteRepository::new(Vec::new());
        repository.add(note("0", "first")).await.unwrap();
        repository.add(note("0", "second")).await.unwrap();
        repository.add(note("1", "third")).await.unwrap();

        let notes = repository.find_all_notes_from("0").await.unwrap();
        assert_eq!(notes.len(), 2);
        assert!(notes.iter().all(|n| n.owner_id.as_deref() == Some("0")));
    }

    #[tokio::test]
    async fn test_update_title_reports_missing_record() {
        let repository = InMemoryNoteRepository::new(Vec::new());
        assert!(!repository.update_title("99", "renamed").await.unwrap());

        let stored = repository.add(note("0", "first")).await.unwrap();
        let id = stored.id.unwrap();
        assert!(repository.update_title(&id, "renamed").await.unwrap());

        let updated = repository.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(updated.title.as_deref(), Some("renamed"));
    }

    #[tokio::test]
    async fn test_update_content() {
        let repository = InMemoryNoteRepository::new(Vec::new());
        let stored = repository.add(note("0", "first")).await.unwrap();
        let id = stored.id.unwrap();

        assert!(repository.update_content(&id, "new content").await.unwrap());
        let updated = repository.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(updated.content.as_deref(), Some("new content"));
    }

    #[tokio::test]
    async fn test_remove_returns_the_removed_record() {
        let repository = InMemoryNoteRepository::new(Vec::new());
        let stored = repository.add(note("0", "first")).await.unwrap();
        let id = stored.id.clone().unwrap();

        let removed = repository.remove(&id).await.unwrap();
        assert_eq!(removed, Some(stored));
        assert!(repository.remove(&id).await.unwrap().is_none());
    }
}
