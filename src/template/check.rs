// ABOUTME: Pre-render template check combining discovery, resolution and linting
// ABOUTME: Produces warnings for editors; nothing here stops an act from rendering

use serde::Serialize;

use super::context::CaseContext;
use super::discovery::{extract_variables, lint_template, LintWarning};
use super::path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedVariable {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateCheck {
    pub variables: Vec<String>,
    pub unresolved: Vec<UnresolvedVariable>,
    pub lint: Vec<LintWarning>,
}

impl TemplateCheck {
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty() && self.lint.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.unresolved.len() + self.lint.len()
    }
}

/// Report which referenced variables the context cannot fill, once per path.
pub fn check_template(template: &str, context: &CaseContext) -> TemplateCheck {
    let variables = extract_variables(template);

    let unresolved = variables
        .iter()
        .filter_map(|variable| {
            path::resolve(variable, context.as_json())
                .into_text()
                .err()
                .map(|reason| UnresolvedVariable {
                    path: variable.clone(),
                    reason: reason.to_string(),
                })
        })
        .collect();

    TemplateCheck {
        variables,
        unresolved,
        lint: lint_template(template),
    }
}
