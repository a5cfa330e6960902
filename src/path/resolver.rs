//! Walks content paths against documents.

use super::ast::ContentPath;
use super::error::PathError;
use crate::document::node::{ContentNode, ContentValue};

/// Interprets a segment as an array position.
///
/// `at` is the rendered path of the segment, used in the error.
pub fn parse_index(segment: &str, at: impl FnOnce() -> String) -> Result<usize, PathError> {
    // usize parsing accepts a leading '+', which is not a valid position
    if segment.starts_with('+') {
        return Err(index_mismatch(segment, at()));
    }
    segment
        .parse::<usize>()
        .map_err(|_| index_mismatch(segment, at()))
}

fn index_mismatch(segment: &str, path: String) -> PathError {
    PathError::TypeMismatch {
        path,
        expected: "non-negative array index",
        found: format!("segment '{}'", segment),
    }
}

/// Resolves segment `depth` of `path` against `node`.
///
/// `node` is the node reached after the first `depth` segments.
pub fn child<'a>(
    node: &'a ContentNode,
    path: &ContentPath,
    depth: usize,
) -> Result<&'a ContentNode, PathError> {
    let segment = &path.segments()[depth];
    match node.value() {
        ContentValue::Object(entries) => {
            entries.get(segment.as_str()).ok_or_else(|| PathError::NotFound {
                path: path.prefix(depth + 1),
            })
        }
        ContentValue::Array(items) => {
            let index = parse_index(segment, || path.prefix(depth + 1))?;
            items.get(index).ok_or_else(|| PathError::NotFound {
                path: path.prefix(depth + 1),
            })
        }
        other => Err(PathError::TypeMismatch {
            path: path.prefix(depth),
            expected: "object or array",
            found: other.type_name().to_string(),
        }),
    }
}

/// Resolves every segment of `path`, returning the addressed node.
pub fn resolve<'a>(root: &'a ContentNode, path: &ContentPath) -> Result<&'a ContentNode, PathError> {
    let mut current = root;
    for depth in 0..path.len() {
        current = child(current, path, depth)?;
    }
    Ok(current)
}

/// Resolves every segment except the last, returning the parent of the
/// addressed node.
pub fn resolve_parent<'a>(
    root: &'a ContentNode,
    path: &ContentPath,
) -> Result<&'a ContentNode, PathError> {
    let mut current = root;
    for depth in 0..path.len() - 1 {
        current = child(current, path, depth)?;
    }
    Ok(current)
}
