use std::sync::Arc;

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
use serde_json::json;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server on a random port, backed by
/// fresh in-memory stores.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(TEST_JWT_SECRET));
        Self::spawn_with_token_manager(token_manager).await
    }

    /// Spawn with a caller-supplied token manager, so tests can exercise the
    /// authentication middleware against misbehaving verifiers.
    pub async fn spawn_with_token_manager(token_manager: Arc<dyn TokenManager>) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(InMemoryUserRepository::new(Vec::new()));
        let note_repository = Arc::new(InMemoryNoteRepository::new(Vec::new()));
        let encoder = Arc::new(Argon2Encoder::new());

        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repository),
            encoder,
            Arc::new(JwtTokenManager::new(TEST_JWT_SECRET)),
            24,
        ));
        let note_service = Arc::new(NoteService::new(note_repository, user_repository));

        let state = AppState {
            user_service: user_service as Arc<dyn UserServicePort>,
            note_service: note_service as Arc<dyn NoteServicePort>,
            token_manager,
        };

        let router = create_router(state);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register a user and return the assigned id
    pub async fn sign_up(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/signup")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"]
            .as_str()
            .expect("sign-up response missing id")
            .to_string()
    }

    /// Register and authenticate a user, returning (id, access token)
    pub async fn sign_up_and_in(&self, email: &str, password: &str) -> (String, String) {
        let id = self.sign_up(email, password).await;

        let response = self
            .post("/api/signin")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        let token = body["data"]["access_token"]
            .as_str()
            .expect("sign-in response missing access token")
            .to_string();
        (id, token)
    }
}
