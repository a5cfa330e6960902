//! Copy-on-path mutation algorithms.
//!
//! Every operation walks the path from the root and rebuilds only the nodes
//! on it. At each level a new object or array is made whose other entries are
//! the original child handles, so every subtree off the path is shared with
//! the input document. The input is never modified.

use super::options::EditOptions;
use crate::document::node::{ContentNode, ContentValue};
use crate::path::{child, parse_index, ContentPath, PathError};

/// Rebuilds the path down to the addressed slot and lets `edit` produce its
/// new content.
///
/// `edit` receives the node currently stored under the final segment, or
/// `None` when the final segment is a missing object key.
fn update_at<F>(
    node: &ContentNode,
    path: &ContentPath,
    depth: usize,
    options: EditOptions,
    edit: F,
) -> Result<ContentNode, PathError>
where
    F: FnOnce(Option<&ContentNode>) -> Result<ContentNode, PathError>,
{
    let is_last = depth + 1 == path.len();
    let segment = &path.segments()[depth];

    match node.value() {
        ContentValue::Object(entries) => {
            let current = entries.get(segment.as_str());
            let replacement = if is_last {
                edit(current)?
            } else {
                match current {
                    Some(next) => update_at(next, path, depth + 1, options, edit)?,
                    None if options.create_missing_parents => {
                        update_at(&ContentNode::empty_object(), path, depth + 1, options, edit)?
                    }
                    None => {
                        return Err(PathError::NotFound {
                            path: path.prefix(depth + 1),
                        })
                    }
                }
            };

            let mut entries = entries.clone();
            entries.insert(segment.clone(), replacement);
            Ok(ContentNode::new(ContentValue::Object(entries)))
        }
        ContentValue::Array(items) => {
            let index = parse_index(segment, || path.prefix(depth + 1))?;
            let current = child(node, path, depth)?;
            let replacement = if is_last {
                edit(Some(current))?
            } else {
                update_at(current, path, depth + 1, options, edit)?
            };

            let mut items = items.clone();
            items[index] = replacement;
            Ok(ContentNode::new(ContentValue::Array(items)))
        }
        other => Err(PathError::TypeMismatch {
            path: path.prefix(depth),
            expected: "object or array",
            found: other.type_name().to_string(),
        }),
    }
}

/// Replaces the node at `path` with `value`.
///
/// A missing final key on an object is added at the end of the object.
pub fn set(
    root: &ContentNode,
    path: &ContentPath,
    value: ContentNode,
    options: EditOptions,
) -> Result<ContentNode, PathError> {
    update_at(root, path, 0, options, |_| Ok(value))
}

/// Pushes `value` onto the array at `path`.
pub fn append(
    root: &ContentNode,
    path: &ContentPath,
    value: ContentNode,
    options: EditOptions,
) -> Result<ContentNode, PathError> {
    update_at(root, path, 0, options, |current| match current {
        Some(target) => match target.value() {
            ContentValue::Array(items) => {
                let mut items = items.clone();
                items.push(value);
                Ok(ContentNode::array(items))
            }
            other => Err(array_expected(path, other)),
        },
        None if options.create_missing_parents => Ok(ContentNode::array(vec![value])),
        None => Err(PathError::NotFound {
            path: path.to_string(),
        }),
    })
}

/// Removes the element at `index` from the array at `path`.
pub fn remove_at(
    root: &ContentNode,
    path: &ContentPath,
    index: isize,
    options: EditOptions,
) -> Result<ContentNode, PathError> {
    update_at(root, path, 0, options, |current| {
        let target = current.ok_or_else(|| PathError::NotFound {
            path: path.to_string(),
        })?;
        match target.value() {
            ContentValue::Array(items) => {
                if index < 0 || index as usize >= items.len() {
                    return Err(PathError::IndexOutOfRange {
                        path: path.to_string(),
                        index,
                        len: items.len(),
                    });
                }
                let mut items = items.clone();
                items.remove(index as usize);
                Ok(ContentNode::array(items))
            }
            other => Err(array_expected(path, other)),
        }
    })
}

fn array_expected(path: &ContentPath, found: &ContentValue) -> PathError {
    PathError::TypeMismatch {
        path: path.to_string(),
        expected: "array",
        found: found.type_name().to_string(),
    }
}
