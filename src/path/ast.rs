//! Parsed representation of a content path.

use super::error::PathError;
use super::parser::Parser;
use std::fmt;

/// A parsed, non-empty content path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentPath {
    segments: Vec<String>,
}

impl ContentPath {
    /// Parses a dot-separated path string.
    pub fn parse(path: &str) -> Result<Self, PathError> {
        Parser::parse(path)
    }

    /// Builds a path from segments that have already been validated.
    pub(crate) fn from_segments(segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments; always at least one.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a parsed path has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The final segment, the one a mutation acts on.
    pub fn last(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }

    /// Renders the first `depth` segments, for error messages.
    ///
    /// The empty prefix is the document root and renders as `(root)`.
    pub fn prefix(&self, depth: usize) -> String {
        if depth == 0 {
            "(root)".to_string()
        } else {
            self.segments[..depth.min(self.segments.len())].join(".")
        }
    }
}

impl fmt::Display for ContentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl std::str::FromStr for ContentPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentPath::parse(s)
    }
}
