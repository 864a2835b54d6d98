use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::missing_param_names;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::UserData;
use crate::inbound::http::router::AppState;

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequestBody>,
) -> Result<ApiSuccess<SignUpResponseData>, ApiError> {
    let missing = missing_param_names(&[
        ("email", body.email.is_some()),
        ("password", body.password.is_some()),
    ]);
    if !missing.is_empty() {
        return Err(ApiError::missing_params(&missing));
    }

    state
        .user_service
        .sign_up(
            body.email.unwrap_or_default(),
            body.password.unwrap_or_default(),
        )
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignUpRequestBody {
    email: Option<String>,
    password: Option<String>,
}

/// The stored password is encoded but still never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignUpResponseData {
    pub id: String,
    pub email: String,
}

impl From<&UserData> for SignUpResponseData {
    fn from(user: &UserData) -> Self {
        Self {
            id: user.id.clone().unwrap_or_default(),
            email: user.email.clone(),
        }
    }
}
