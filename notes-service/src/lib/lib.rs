pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

// Re-export commonly used types
pub use domain::note::models::*;
pub use domain::note::service::NoteService;
pub use domain::user::models::*;
pub use domain::user::service::UserService;
