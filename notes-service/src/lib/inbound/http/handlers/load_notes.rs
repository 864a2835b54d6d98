use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::note::models::NoteData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Lists the notes of the authenticated user; the owner comes from the
/// verified token, not from the request.
pub async fn load_notes(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<NoteData>>, ApiError> {
    state
        .note_service
        .load_notes(user.id)
        .await
        .map_err(ApiError::from)
        .map(|notes| ApiSuccess::new(StatusCode::OK, notes))
}
