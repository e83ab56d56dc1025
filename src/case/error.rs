// ABOUTME: Error types for loading case records
// ABOUTME: Covers file access and YAML/JSON decoding of dossier snapshots

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaseError {
    #[error("Failed to read case file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CaseError>;
