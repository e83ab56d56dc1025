// ABOUTME: Main library module for the acta notarial act renderer
// ABOUTME: Exports all core modules and provides the public API

pub mod acte;
pub mod case;
pub mod cli;
pub mod library;
pub mod output;
pub mod template;

// Re-export commonly used types
pub use acte::{generate_act, ActDraft, ActStatus};
pub use case::{CaseRecord, Client, ClientKind, Dossier, PartyAttachment};
pub use cli::{App, Args, Config};
pub use library::{ActTemplate, TemplateLibrary};
pub use template::{
    build_context, check_template, extract_variables, render, CaseContext, ContextBuilder,
};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
