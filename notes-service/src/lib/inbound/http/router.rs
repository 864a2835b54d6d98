use std::sync::Arc;

use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domain::note::ports::NoteServicePort;
use crate::domain::user::ports::TokenManager;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::create_note::create_note;
use crate::inbound::http::handlers::load_notes::load_notes;
use crate::inbound::http::handlers::remove_note::remove_note;
use crate::inbound::http::handlers::sign_in::sign_in;
use crate::inbound::http::handlers::sign_up::sign_up;
use crate::inbound::http::handlers::update_note::update_note;
use crate::inbound::http::handlers::verify::verify;
use crate::inbound::http::middleware::authenticate;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub note_service: Arc<dyn NoteServicePort>,
    pub token_manager: Arc<dyn TokenManager>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/signup", post(sign_up))
        .route("/api/signin", post(sign_in));

    let protected_routes = Router::new()
        .route("/api/auth/verify", get(verify))
        .route("/api/notes", post(create_note))
        .route("/api/notes", get(load_notes))
        .route("/api/notes/:note_id", put(update_note))
        .route("/api/notes/:note_id", delete(remove_note))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
