use serde::Deserialize;
use serde::Serialize;

use crate::domain::note::errors::TitleError;
use crate::domain::user::models::User;

/// Note aggregate entity.
///
/// Holds a reference to its owning user but does not manage the owner's
/// lifecycle; the same user may own many notes. The owner is expected to be
/// valid already and is not re-checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: Option<String>,
    pub owner: User,
    pub title: Title,
    pub content: String,
}

impl Note {
    /// Validate a raw title into a Note owned by `owner`.
    ///
    /// # Errors
    /// * `Empty` - Title is blank after trimming
    pub fn create(owner: User, title: &str, content: &str) -> Result<Self, TitleError> {
        let title = Title::new(title)?;
        Ok(Self {
            id: None,
            owner,
            title,
            content: content.to_string(),
        })
    }
}

/// Title value type
///
/// Non-empty after trimming; stores the trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    /// Create a new valid title.
    ///
    /// # Errors
    /// * `Empty` - Blank after trimming; carries the offending value
    pub fn new(title: &str) -> Result<Self, TitleError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TitleError::Empty(title.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw note record as it crosses the repository port.
///
/// Also the update-note input shape: `title` and `content` are optional
/// there because either field may be left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteData {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub owner_id: Option<String>,
    pub owner_email: Option<String>,
}
