// ABOUTME: Error types for act draft lifecycle operations
// ABOUTME: Rendering itself never fails; only status changes can be refused

use thiserror::Error;

use super::draft::ActStatus;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActError {
    #[error("Cannot move act from {from} to {to}")]
    InvalidTransition { from: ActStatus, to: ActStatus },

    #[error("Act still contains {count} unresolved placeholders: {paths:?}")]
    UnresolvedPlaceholders { count: usize, paths: Vec<String> },
}

pub type Result<T> = std::result::Result<T, ActError>;
