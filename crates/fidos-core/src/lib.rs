// Core business logic lives here - the brain of the operation
pub mod classify;
pub mod config;
pub mod error;
pub mod gallery;
pub mod models;

pub use config::Config;
pub use error::Error;
pub use gallery::ProjectGallery;
pub use models::{Category, Project};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
