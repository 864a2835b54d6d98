use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::missing_param_names;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::AuthenticationResult;
use crate::inbound::http::router::AppState;

pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequestBody>,
) -> Result<ApiSuccess<AuthenticationResult>, ApiError> {
    let missing = missing_param_names(&[
        ("email", body.email.is_some()),
        ("password", body.password.is_some()),
    ]);
    if !missing.is_empty() {
        return Err(ApiError::missing_params(&missing));
    }

    state
        .user_service
        .sign_in(
            body.email.unwrap_or_default(),
            body.password.unwrap_or_default(),
        )
        .await
        .map_err(ApiError::from)
        .map(|result| ApiSuccess::new(StatusCode::OK, result))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInRequestBody {
    email: Option<String>,
    password: Option<String>,
}
