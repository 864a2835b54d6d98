use async_trait::async_trait;

use crate::domain::note::errors::NoteError;
use crate::domain::note::models::NoteData;

/// Port for the note-facing business operations.
#[async_trait]
pub trait NoteServicePort: Send + Sync + 'static {
    /// Create a note for the user registered under `owner_email`.
    ///
    /// # Errors
    /// * `OwnerNotFound` - No user with this email
    /// * `InvalidTitle` - Title is blank
    /// * `ExistingTitle` - The owner already has a note with this title
    /// * `Unknown` - Repository fault
    async fn create_note(
        &self,
        owner_email: String,
        title: String,
        content: String,
    ) -> Result<NoteData, NoteError>;

    /// List every note owned by `owner_id`.
    async fn load_notes(&self, owner_id: String) -> Result<Vec<NoteData>, NoteError>;

    /// Apply a partial update to an existing note.
    ///
    /// `data` carries the note id, owner id and owner email, plus an
    /// optional new title and optional new content; the supplied fields are
    /// updated independently. Returns the input data on success.
    ///
    /// # Errors
    /// * `OwnerNotFound` / `NotFound` - Owner or note missing
    /// * `InvalidTitle` - Effective title is blank
    /// * `ExistingTitle` - Another note of the same owner has the title
    /// * `CorruptOwner` - Stored owner record fails re-validation
    /// * `Unknown` - Repository fault
    async fn update_note(&self, data: NoteData) -> Result<NoteData, NoteError>;

    /// Remove a note, returning the removed record.
    ///
    /// # Errors
    /// * `NotFound` - No note with this id
    async fn remove_note(&self, note_id: String) -> Result<NoteData, NoteError>;
}

/// Persistence operations for note records.
///
/// `update_title`/`update_content` report whether a record was touched;
/// failures are infrastructure faults.
#[async_trait]
pub trait NoteRepository: Send + Sync + 'static {
    async fn find_all_notes_from(&self, owner_id: &str) -> Result<Vec<NoteData>, anyhow::Error>;

    async fn find_by_id(&self, note_id: &str) -> Result<Option<NoteData>, anyhow::Error>;

    /// Persist a new record, assigning a fresh identifier.
    async fn add(&self, note: NoteData) -> Result<NoteData, anyhow::Error>;

    /// Remove a record, returning it if it existed.
    async fn remove(&self, note_id: &str) -> Result<Option<NoteData>, anyhow::Error>;

    async fn update_title(&self, note_id: &str, title: &str) -> Result<bool, anyhow::Error>;

    async fn update_content(&self, note_id: &str, content: &str) -> Result<bool, anyhow::Error>;
}
