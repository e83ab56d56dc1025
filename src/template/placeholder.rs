// ABOUTME: Placeholder grammar shared by rendering, discovery and linting
// ABOUTME: Scans `{{ path }}` expressions left to right without overlap

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)*)\s*\}\}").unwrap()
});

/// One well-formed placeholder occurrence in a template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'t> {
    /// Surface text including braces and inner whitespace
    pub raw: &'t str,
    pub path: &'t str,
    pub span: Range<usize>,
}

/// All well-formed placeholders in `text`, in order of appearance.
pub fn scan(text: &str) -> impl Iterator<Item = Placeholder<'_>> {
    PLACEHOLDER_RE.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let path = caps.get(1)?;
        Some(Placeholder {
            raw: whole.as_str(),
            path: path.as_str(),
            span: whole.range(),
        })
    })
}

pub fn contains_placeholder(text: &str) -> bool {
    PLACEHOLDER_RE.is_match(text)
}
