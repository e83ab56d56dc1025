// ABOUTME: Template module for notarial act rendering
// ABOUTME: Path resolution, case contexts, substitution, discovery and the variable catalogue

pub mod catalog;
pub mod check;
pub mod context;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod path;
pub mod placeholder;

pub use catalog::{available_variables, VariableDoc};
pub use check::{check_template, TemplateCheck, UnresolvedVariable};
pub use context::{build_context, normalize_role, CaseContext, ContextBuilder};
pub use discovery::{extract_variables, lint_template, LintKind, LintWarning};
pub use engine::{render, render_with_report, RenderOutcome, UnresolvedPlaceholder};
pub use error::{Result, TemplateError};
pub use path::{Resolution, Unresolved, VariablePath};
