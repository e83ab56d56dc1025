// ABOUTME: Error types for the act template library
// ABOUTME: Covers loading, structural validation and lookups by id

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Failed to read template library: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Missing required field '{field}' in template #{index}")]
    MissingField { index: usize, field: String },

    #[error("Duplicate template id: {id}")]
    DuplicateId { id: u32 },

    #[error("Template not found: {id}")]
    NotFound { id: u32 },

    #[error("Library holds {count} templates; a template id is required")]
    IdRequired { count: usize },

    #[error("Template library is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, LibraryError>;
