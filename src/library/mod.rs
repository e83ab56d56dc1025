// ABOUTME: Template library module for reusable act skeletons
// ABOUTME: Exports act templates, the YAML library and file loading

pub mod error;
pub mod template;

pub use error::{LibraryError, Result};
pub use template::{load_template, ActTemplate, TemplateLibrary};
