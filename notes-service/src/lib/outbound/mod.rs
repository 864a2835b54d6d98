pub mod encoder;
pub mod repositories;
pub mod token;
