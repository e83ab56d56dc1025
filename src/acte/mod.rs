// ABOUTME: Act module for drafts produced from rendered templates
// ABOUTME: Exports drafts, their status lifecycle and errors

pub mod draft;
pub mod error;

pub use draft::{generate_act, ActDraft, ActStatus};
pub use error::{ActError, Result};
