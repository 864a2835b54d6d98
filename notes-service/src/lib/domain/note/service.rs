use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::note::errors::NoteError;
use crate::domain::note::models::Note;
use crate::domain::note::models::NoteData;
use crate::domain::note::ports::NoteRepository;
use crate::domain::note::ports::NoteServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::UserData;
use crate::domain::user::ports::UserRepository;

/// Domain service for note operations.
///
/// Title uniqueness is scoped per owner, not global: two users may both
/// have a note called "todo".
pub struct NoteService<NR, UR>
where
    NR: NoteRepository,
    UR: UserRepository,
{
    note_repository: Arc<NR>,
    user_repository: Arc<UR>,
}

impl<NR, UR> NoteService<NR, UR>
where
    NR: NoteRepository,
    UR: UserRepository,
{
    pub fn new(note_repository: Arc<NR>, user_repository: Arc<UR>) -> Self {
        Self {
            note_repository,
            user_repository,
        }
    }

    /// Resolve an owner by email and re-validate the stored record.
    ///
    /// Persisted data is not trusted: the entity is rebuilt so a record that
    /// somehow violates the invariants fails fast instead of flowing on.
    async fn validated_owner(&self, owner_email: &str) -> Result<(User, UserData), NoteError> {
        let record = self
            .user_repository
            .find_by_email(owner_email)
            .await?
            .ok_or_else(|| NoteError::OwnerNotFound(owner_email.to_string()))?;

        let owner = User::create(record.email.clone(), record.password.clone())
            .map_err(NoteError::CorruptOwner)?;

        Ok((owner, record))
    }
}

#[async_trait]
impl<NR, UR> NoteServicePort for NoteService<NR, UR>
where
    NR: NoteRepository,
    UR: UserRepository,
{
    async fn create_note(
        &self,
        owner_email: String,
        title: String,
        content: String,
    ) -> Result<NoteData, NoteError> {
        let (owner, record) = self.validated_owner(&owner_email).await?;
        let note = Note::create(owner, &title, &content)?;

        let owner_id = record
            .id
            .ok_or_else(|| NoteError::Unknown(format!("Stored user {} has no id", owner_email)))?;

        let siblings = self.note_repository.find_all_notes_from(&owner_id).await?;
        if siblings
            .iter()
            .any(|sibling| sibling.title.as_deref() == Some(note.title.as_str()))
        {
            return Err(NoteError::ExistingTitle(note.title.as_str().to_string()));
        }

        let stored = self
            .note_repository
            .add(NoteData {
                id: None,
                title: Some(note.title.as_str().to_string()),
                content: Some(note.content.clone()),
                owner_id: Some(owner_id),
                owner_email: Some(owner_email),
            })
            .await?;

        Ok(stored)
    }

    async fn load_notes(&self, owner_id: String) -> Result<Vec<NoteData>, NoteError> {
        Ok(self.note_repository.find_all_notes_from(&owner_id).await?)
    }

    async fn update_note(&self, data: NoteData) -> Result<NoteData, NoteError> {
        let note_id = data
            .id
            .clone()
            .ok_or_else(|| NoteError::Unknown("Update request carries no note id".to_string()))?;
        let owner_email = data
            .owner_email
            .clone()
            .ok_or_else(|| NoteError::Unknown("Update request carries no owner email".to_string()))?;
        let owner_id = data
            .owner_id
            .clone()
            .ok_or_else(|| NoteError::Unknown("Update request carries no owner id".to_string()))?;

        let (owner, _) = self.validated_owner(&owner_email).await?;

        let current = self
            .note_repository
            .find_by_id(&note_id)
            .await?
            .ok_or_else(|| NoteError::NotFound(note_id.clone()))?;

        // The candidate carries the title and content the record will have
        // after the update, so validation covers the effective state even
        // when a field is left unchanged.
        let effective_title = data
            .title
            .clone()
            .or_else(|| current.title.clone())
            .unwrap_or_default();
        let effective_content = data
            .content
            .clone()
            .or_else(|| current.content.clone())
            .unwrap_or_default();
        let candidate = Note::create(owner, &effective_title, &effective_content)?;

        let siblings = self.note_repository.find_all_notes_from(&owner_id).await?;
        let collision = siblings.iter().any(|sibling| {
            sibling.id != data.id && sibling.title.as_deref() == Some(candidate.title.as_str())
        });
        if collision {
            return Err(NoteError::ExistingTitle(candidate.title.as_str().to_string()));
        }

        // The two field updates are independent and not wrapped in a
        // transaction; a title update may land even if the content update
        // then faults.
        if data.title.is_some() {
            if !self
                .note_repository
                .update_title(&note_id, candidate.title.as_str())
                .await?
            {
                return Err(NoteError::NotFound(note_id));
            }
        }
        if let Some(content) = &data.content {
            if !self.note_repository.update_content(&note_id, content).await? {
                return Err(NoteError::NotFound(note_id));
            }
        }

        Ok(data)
    }

    async fn remove_note(&self, note_id: String) -> Result<NoteData, NoteError> {
        self.note_repository
            .remove(&note_id)
            .await?
            .ok_or(NoteError::NotFound(note_id))
    }
}
