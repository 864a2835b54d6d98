use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Payload;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Echoes the verified token payload. Reaching this handler at all means
/// the authentication middleware accepted the token.
pub async fn verify(
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Payload>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, Payload { id: user.id }))
}
