//! Error types for the course catalog.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Duplicate slug in search index: {0}")]
    DuplicateSlug(String),

    #[error("Duplicate course code in search index: {0}")]
    DuplicateCode(String),

    #[error("Entry {index} has an empty `{field}`")]
    EmptyField { index: usize, field: &'static str },

    #[error("Invalid syllabus record: {0}")]
    InvalidSyllabus(String),

    #[error("Could not persist asset: {0}")]
    Persist(#[from] tempfile::PersistError),
}
