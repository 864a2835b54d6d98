use std::sync::Arc;

use anyhow::Error;
use notes_service::config::Config;
use notes_service::domain::note::ports::NoteServicePort;
use notes_service::domain::note::service::NoteService;
use notes_service::domain::user::ports::TokenManager;
use notes_service::domain::user::ports::UserServicePort;
use notes_service::domain::user::service::UserService;
use notes_service::inbound::http::router::create_router;
use notes_service::inbound::http::router::AppState;
use notes_service::outbound::encoder::Argon2Encoder;
use notes_service::outbound::repositories::InMemoryNoteRepository;
use notes_service::outbound::repositories::InMemoryUserRepository;
use notes_service::outbound::token::JwtTokenManager;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notes_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "notes-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let user_repository = Arc::new(InMemoryUserRepository::new(Vec::new()));
    let note_repository = Arc::new(InMemoryNoteRepository::new(Vec::new()));
    let encoder = Arc::new(Argon2Encoder::new());
    let token_manager = Arc::new(JwtTokenManager::new(config.jwt.secret.as_bytes()));

    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        encoder,
        Arc::clone(&token_manager),
        config.jwt.expiration_hours,
    ));

    let note_service = Arc::new(NoteService::new(note_repository, user_repository));

    let state = AppState {
        user_service: user_service as Arc<dyn UserServicePort>,
        note_service: note_service as Arc<dyn NoteServicePort>,
        token_manager: token_manager as Arc<dyn TokenManager>,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        "Server Listening"
    );

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
