// ABOUTME: Variable discovery and brace linting for template authoring
// ABOUTME: Lists the paths a template references without resolving any of them

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::placeholder;

/// Longest snippet quoted back in a lint warning
const SNIPPET_LIMIT: usize = 60;

/// Sorted, de-duplicated placeholder paths referenced by `template`.
pub fn extract_variables(template: &str) -> Vec<String> {
    placeholder::scan(template)
        .map(|found| found.path.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LintKind {
    /// `{{ ... }}` whose content is not a valid dotted path
    MalformedPlaceholder,
    /// `{{` with no closing `}}` on the same line
    UnclosedBraces,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintWarning {
    pub kind: LintKind,
    pub offset: usize,
    pub line: usize,
    pub snippet: String,
}

/// Flag `{{` sequences that the renderer will not treat as placeholders.
pub fn lint_template(template: &str) -> Vec<LintWarning> {
    let valid: Vec<_> = placeholder::scan(template).map(|found| found.span).collect();
    let mut valid = valid.into_iter().peekable();
    let mut warnings = Vec::new();
    let mut cursor = 0;

    while let Some(relative) = template[cursor..].find("{{") {
        let start = cursor + relative;

        while valid.peek().is_some_and(|span| span.end <= start) {
            valid.next();
        }
        if let Some(span) = valid.peek() {
            if span.start == start {
                cursor = span.end;
                continue;
            }
        }

        let line_end = template[start..]
            .find('\n')
            .map(|i| start + i)
            .unwrap_or(template.len());
        let (kind, end) = match template[start + 2..line_end].find("}}") {
            Some(i) => (LintKind::MalformedPlaceholder, start + 2 + i + 2),
            None => (LintKind::UnclosedBraces, line_end),
        };

        warnings.push(LintWarning {
            kind,
            offset: start,
            line: template[..start].matches('\n').count() + 1,
            snippet: truncate(&template[start..end]),
        });

        cursor = start + 1;
    }

    warnings
}

fn truncate(text: &str) -> String {
    match text.char_indices().nth(SNIPPET_LIMIT) {
        Some((i, _)) => format!("{}…", &text[..i]),
        None => text.to_string(),
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            LintKind::MalformedPlaceholder => "malformed placeholder",
            LintKind::UnclosedBraces => "unclosed '{{'",
        };
        write!(f, "line {}: {} {}", self.line, what, self.snippet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_sorted_unique() {
        let text = "{{dossier.numero}} {{ date_jour }} {{dossier.numero}} {{clients.0.nom}}";
        assert_eq!(
            extract_variables(text),
            vec!["clients.0.nom", "date_jour", "dossier.numero"]
        );
    }

    #[test]
    fn test_extract_is_stable_under_duplication() {
        let text = "Vendeur {{parties.vendeur.0.nom}}, acquéreur {{parties.acquereur.0.nom}}";
        let doubled = format!("{}{}", text, text);
        assert_eq!(extract_variables(text), extract_variables(&doubled));
        assert_eq!(extract_variables(text), extract_variables(text));
    }

    #[test]
    fn test_extract_empty() {
        assert!(extract_variables("").is_empty());
        assert!(extract_variables("{{ pas un chemin }}").is_empty());
    }

    #[test]
    fn test_lint_clean_template() {
        assert!(lint_template("Le {{date_jour}}, à {{ ville_signature }}.").is_empty());
    }

    #[test]
    fn test_lint_malformed_and_unclosed() {
        let text = "Dossier {{ dossier numero }}\nMontant {{dossier.montant_acte\nFin";
        let warnings = lint_template(text);

        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].kind, LintKind::MalformedPlaceholder);
        assert_eq!(warnings[0].line, 1);
        assert_eq!(warnings[0].snippet, "{{ dossier numero }}");
        assert_eq!(warnings[1].kind, LintKind::UnclosedBraces);
        assert_eq!(warnings[1].line, 2);
        assert_eq!(warnings[1].snippet, "{{dossier.montant_acte");
    }

    #[test]
    fn test_lint_skips_valid_placeholders_between_errors() {
        let text = "{{a}} {{b c}} {{d}}";
        let warnings = lint_template(text);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].offset, 6);
        assert_eq!(warnings[0].to_string(), "line 1: malformed placeholder {{b c}}");
    }
}
