use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::missing_param_names;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::note::models::NoteData;
use crate::inbound::http::router::AppState;

pub async fn update_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    Json(body): Json<UpdateNoteRequestBody>,
) -> Result<ApiSuccess<NoteData>, ApiError> {
    let missing = missing_param_names(&[
        ("owner_id", body.owner_id.is_some()),
        ("owner_email", body.owner_email.is_some()),
    ]);
    if !missing.is_empty() {
        return Err(ApiError::missing_params(&missing));
    }

    let data = NoteData {
        id: Some(note_id),
        title: body.title,
        content: body.content,
        owner_id: body.owner_id,
        owner_email: body.owner_email,
    };

    state
        .note_service
        .update_note(data)
        .await
        .map_err(ApiError::from)
        .map(|confirmed| ApiSuccess::new(StatusCode::OK, confirmed))
}

/// Title and content are genuinely optional: either, both, or neither may
/// be supplied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateNoteRequestBody {
    owner_id: Option<String>,
    owner_email: Option<String>,
    title: Option<String>,
    content: Option<String>,
}
