use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::errors::TokenError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Verified token payload, made available to downstream handlers as a
/// request extension.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: String,
}

/// Guards the protected routes. Requests without a valid bearer token are
/// rejected before they reach a handler.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&request)?.to_owned();

    match state.token_manager.verify(&token).await {
        Ok(payload) => {
            request
                .extensions_mut()
                .insert(AuthenticatedUser { id: payload.id });
            Ok(next.run(request).await)
        }
        Err(TokenError::Fault(cause)) => {
            tracing::error!("token verification fault: {cause:#}");
            Err(ApiError::InternalServerError(cause.to_string()).into_response())
        }
        Err(error) => {
            tracing::debug!("rejected token: {error}");
            Err(forbidden())
        }
    }
}

fn extract_bearer_token(request: &Request) -> Result<&str, Response> {
    let header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(forbidden)?;
    let value = header.to_str().map_err(|_| forbidden())?;
    let token = value.strip_prefix("Bearer ").ok_or_else(forbidden)?;
    if token.is_empty() {
        return Err(forbidden());
    }
    Ok(token)
}

// Every rejection looks the same to the caller; the actual reason only
// shows up in the logs.
fn forbidden() -> Response {
    ApiError::Forbidden("Invalid token.".to_string()).into_response()
}
