use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::missing_param_names;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::note::models::NoteData;
use crate::inbound::http::router::AppState;

pub async fn create_note(
    State(state): State<AppState>,
    Json(body): Json<CreateNoteRequestBody>,
) -> Result<ApiSuccess<NoteData>, ApiError> {
    let missing = missing_param_names(&[
        ("title", body.title.is_some()),
        ("content", body.content.is_some()),
        ("owner_email", body.owner_email.is_some()),
    ]);
    if !missing.is_empty() {
        return Err(ApiError::missing_params(&missing));
    }

    state
        .note_service
        .create_note(
            body.owner_email.unwrap_or_default(),
            body.title.unwrap_or_default(),
            body.content.unwrap_or_default(),
        )
        .await
        .map_err(ApiError::from)
        .map(|note| ApiSuccess::new(StatusCode::CREATED, note))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateNoteRequestBody {
    title: Option<String>,
    content: Option<String>,
    owner_email: Option<String>,
}
