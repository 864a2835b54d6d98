pub mod note;
pub mod user;

pub use note::InMemoryNoteRepository;
pub use user::InMemoryUserRepository;
