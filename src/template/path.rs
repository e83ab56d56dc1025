// ABOUTME: Dotted variable paths and their resolution against a nested context
// ABOUTME: Walks mappings by key and sequences by numeric index, reporting failures as values

use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

use super::error::{Result, TemplateError};

/// A validated `segment(.segment)*` path where every segment is `[A-Za-z0-9_]+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariablePath {
    raw: String,
}

/// Outcome of walking a path through a context.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    Found(&'a JsonValue),
    NotFound(Unresolved),
}

/// Why a placeholder could not be substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    InvalidPath { reason: String },
    MissingKey { key: String },
    NotAnIndex { segment: String },
    IndexOutOfRange { index: usize, len: usize },
    ScalarReached { segment: String },
    NotScalar { kind: &'static str },
}

pub fn is_segment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl VariablePath {
    /// Parse and validate a dotted path
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(TemplateError::InvalidPath {
                path: input.to_string(),
                reason: "path is empty".to_string(),
            });
        }

        for segment in input.split('.') {
            if segment.is_empty() {
                return Err(TemplateError::InvalidPath {
                    path: input.to_string(),
                    reason: "empty segment".to_string(),
                });
            }
            if let Some(bad) = segment.chars().find(|c| !is_segment_char(*c)) {
                return Err(TemplateError::InvalidPath {
                    path: input.to_string(),
                    reason: format!("invalid character '{}' in segment '{}'", bad, segment),
                });
            }
        }

        Ok(Self {
            raw: input.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split('.')
    }

    /// First segment, e.g. `dossier` for `dossier.numero`
    pub fn namespace(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }

    /// Walk the path from `root`. Never panics and never performs I/O.
    pub fn resolve<'a>(&self, root: &'a JsonValue) -> Resolution<'a> {
        let mut current = root;

        for segment in self.segments() {
            current = match current {
                JsonValue::Object(map) => match map.get(segment) {
                    Some(next) => next,
                    None => {
                        return Resolution::NotFound(Unresolved::MissingKey {
                            key: segment.to_string(),
                        })
                    }
                },
                JsonValue::Array(items) => {
                    let index = match segment.parse::<usize>() {
                        Ok(index) => index,
                        Err(_) => {
                            return Resolution::NotFound(Unresolved::NotAnIndex {
                                segment: segment.to_string(),
                            })
                        }
                    };
                    match items.get(index) {
                        Some(next) => next,
                        None => {
                            return Resolution::NotFound(Unresolved::IndexOutOfRange {
                                index,
                                len: items.len(),
                            })
                        }
                    }
                }
                _ => {
                    return Resolution::NotFound(Unresolved::ScalarReached {
                        segment: segment.to_string(),
                    })
                }
            };
        }

        Resolution::Found(current)
    }
}

impl FromStr for VariablePath {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VariablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<'a> Resolution<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn value(&self) -> Option<&'a JsonValue> {
        match self {
            Resolution::Found(value) => Some(value),
            Resolution::NotFound(_) => None,
        }
    }

    /// Narrow a successful resolution to the text that would be substituted
    pub fn into_text(self) -> std::result::Result<String, Unresolved> {
        match self {
            Resolution::Found(value) => scalar_text(value),
            Resolution::NotFound(reason) => Err(reason),
        }
    }
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unresolved::InvalidPath { reason } => write!(f, "invalid path: {}", reason),
            Unresolved::MissingKey { key } => write!(f, "no value named '{}'", key),
            Unresolved::NotAnIndex { segment } => {
                write!(f, "'{}' is not a list index", segment)
            }
            Unresolved::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range (list has {} entries)", index, len)
            }
            Unresolved::ScalarReached { segment } => {
                write!(f, "cannot look up '{}' inside a plain value", segment)
            }
            Unresolved::NotScalar { kind } => {
                write!(f, "value is {} and has no single-line text form", kind)
            }
        }
    }
}

/// Resolve a raw path string; an invalid path is reported as not found.
pub fn resolve<'a>(path: &str, root: &'a JsonValue) -> Resolution<'a> {
    match VariablePath::parse(path) {
        Ok(path) => path.resolve(root),
        Err(TemplateError::InvalidPath { reason, .. }) => {
            Resolution::NotFound(Unresolved::InvalidPath { reason })
        }
        Err(other) => Resolution::NotFound(Unresolved::InvalidPath {
            reason: other.to_string(),
        }),
    }
}

/// Text form of a scalar value. `null`, lists and mappings have none.
pub fn scalar_text(value: &JsonValue) -> std::result::Result<String, Unresolved> {
    match value {
        JsonValue::String(s) => Ok(s.clone()),
        JsonValue::Number(n) => Ok(n.to_string()),
        JsonValue::Bool(b) => Ok(b.to_string()),
        JsonValue::Null => Err(Unresolved::NotScalar { kind: "null" }),
        JsonValue::Array(_) => Err(Unresolved::NotScalar { kind: "a list" }),
        JsonValue::Object(_) => Err(Unresolved::NotScalar { kind: "a mapping" }),
    }
}
