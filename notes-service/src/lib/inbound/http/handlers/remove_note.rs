use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::note::models::NoteData;
use crate::inbound::http::router::AppState;

pub async fn remove_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<ApiSuccess<NoteData>, ApiError> {
    state
        .note_service
        .remove_note(note_id)
        .await
        .map_err(ApiError::from)
        .map(|removed| ApiSuccess::new(StatusCode::OK, removed))
}
