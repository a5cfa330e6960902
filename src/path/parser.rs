//! Content path string parser.

use super::ast::ContentPath;
use super::error::PathError;

/// Splits path strings into segments.
pub struct Parser<'a> {
    input: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Parses the path string into a `ContentPath`.
    pub fn parse(input: &str) -> Result<ContentPath, PathError> {
        Parser::new(input).parse_path()
    }

    fn parse_path(&self) -> Result<ContentPath, PathError> {
        if self.input.is_empty() {
            return Err(self.syntax_error("path is empty".to_string()));
        }

        let mut segments = Vec::new();
        let mut position = 0;
        for segment in self.input.split('.') {
            if segment.is_empty() {
                return Err(self.syntax_error(format!("empty segment at position {}", position)));
            }
            position += segment.len() + 1;
            segments.push(segment.to_string());
        }

        Ok(ContentPath::from_segments(segments))
    }

    fn syntax_error(&self, reason: String) -> PathError {
        PathError::Syntax {
            path: self.input.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        let path = Parser::parse("missions").unwrap();
        assert_eq!(path.segments(), &["missions".to_string()]);
    }

    #[test]
    fn test_nested_segments() {
        let path = Parser::parse("geography.boundaries.north").unwrap();
        assert_eq!(path.segments(), &["geography", "boundaries", "north"]);
    }

    #[test]
    fn test_numeric_segments_stay_tokens() {
        let path = Parser::parse("gallery.3.caption").unwrap();
        assert_eq!(path.segments()[1], "3");
    }

    #[test]
    fn test_empty_path() {
        let err = Parser::parse("").unwrap_err();
        assert!(matches!(err, PathError::Syntax { ref reason, .. } if reason == "path is empty"));
    }

    #[test]
    fn test_empty_segments() {
        for bad in ["a..b", ".a", "a.", "."] {
            let err = Parser::parse(bad).unwrap_err();
            assert!(matches!(err, PathError::Syntax { .. }), "{} should fail", bad);
        }
    }

    #[test]
    fn test_empty_segment_position() {
        let err = Parser::parse("hero..title").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid path 'hero..title': empty segment at position 5"
        );
    }
}
