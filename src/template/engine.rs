// ABOUTME: Template rendering by single-pass placeholder substitution
// ABOUTME: Unresolved placeholders are echoed verbatim so the act shows what is missing

use serde::Serialize;
use tracing::debug;

use super::context::CaseContext;
use super::path::{self, Unresolved};
use super::placeholder;

/// A placeholder left in the output, with where and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedPlaceholder {
    pub path: String,
    /// Surface text echoed into the output
    pub raw: String,
    /// Byte offset in the template body
    pub offset: usize,
    #[serde(serialize_with = "serialize_reason")]
    pub reason: Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOutcome {
    pub text: String,
    pub unresolved: Vec<UnresolvedPlaceholder>,
}

impl RenderOutcome {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Substitute every placeholder in `template` from `context`.
///
/// Never fails: a placeholder whose path is missing, or names a list, a
/// mapping or `null`, is copied to the output unchanged.
pub fn render(template: &str, context: &CaseContext) -> String {
    render_with_report(template, context).text
}

/// Like [`render`], also listing every placeholder that was left in place.
pub fn render_with_report(template: &str, context: &CaseContext) -> RenderOutcome {
    let mut text = String::with_capacity(template.len());
    let mut unresolved = Vec::new();
    let mut cursor = 0;

    for found in placeholder::scan(template) {
        text.push_str(&template[cursor..found.span.start]);

        match path::resolve(found.path, context.as_json()).into_text() {
            Ok(value) => text.push_str(&value),
            Err(reason) => {
                debug!("Leaving placeholder {} unresolved: {}", found.raw, reason);
                text.push_str(found.raw);
                unresolved.push(UnresolvedPlaceholder {
                    path: found.path.to_string(),
                    raw: found.raw.to_string(),
                    offset: found.span.start,
                    reason,
                });
            }
        }

        cursor = found.span.end;
    }
    text.push_str(&template[cursor..]);

    RenderOutcome { text, unresolved }
}

fn serialize_reason<S: serde::Serializer>(
    reason: &Unresolved,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}
