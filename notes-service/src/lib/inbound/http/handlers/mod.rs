use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::note::errors::NoteError;
use crate::domain::user::errors::UserError;

pub mod create_note;
pub mod load_notes;
pub mod remove_note;
pub mod sign_in;
pub mod sign_up;
pub mod update_note;
pub mod verify;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// HTTP-facing error with a fixed status mapping.
///
/// Business and validation failures are 400, failed authentication is 403,
/// infrastructure faults are 500. Internals never leak beyond the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Forbidden(String),
    InternalServerError(String),
}

impl ApiError {
    /// One error for every required field absent from a request, in
    /// declared order: `Missing parameter: email password.`
    pub fn missing_params(names: &[&str]) -> Self {
        ApiError::BadRequest(format!("Missing parameter: {}.", names.join(" ")))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_)
            | UserError::ExistingUser(_)
            | UserError::NotFound(_) => ApiError::BadRequest(err.to_string()),
            UserError::WrongPassword => ApiError::Forbidden(err.to_string()),
            UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<NoteError> for ApiError {
    fn from(err: NoteError) -> Self {
        match err {
            NoteError::InvalidTitle(_)
            | NoteError::ExistingTitle(_)
            | NoteError::NotFound(_)
            | NoteError::OwnerNotFound(_) => ApiError::BadRequest(err.to_string()),
            NoteError::CorruptOwner(_) | NoteError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Collect the names of required fields missing from a request body, in
/// declared order. Presence checking happens at the controller, not in the
/// use-case.
pub(crate) fn missing_param_names<'a>(fields: &[(&'a str, bool)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
