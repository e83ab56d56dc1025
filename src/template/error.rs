// ABOUTME: Error types for variable path parsing and context serialization
// ABOUTME: Missing data during rendering is never an error and has no variant here

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Invalid variable path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
