//! The single entry point for editing content documents.

use super::mutation::Mutation;
use super::ops;
use super::options::EditOptions;
use crate::document::node::ContentNode;
use crate::path::{ContentPath, PathError};
use tracing::debug;

/// Applies path-addressed edits to content documents.
///
/// Every method is a pure function of its arguments: it borrows the input
/// document, never changes it, and returns a new snapshot that shares every
/// subtree off the edited path with the input. The editor itself only holds
/// its [`EditOptions`].
///
/// # Example
///
/// ```
/// use contentquill::document::node::ContentNode;
/// use contentquill::document::parser::parse_content;
/// use contentquill::editor::PathDocumentEditor;
///
/// let editor = PathDocumentEditor::new();
/// let doc = parse_content(r#"{"hero": {"title": "A"}, "about": {}}"#).unwrap();
/// let next = editor.set(&doc, "hero.title", ContentNode::from("B")).unwrap();
///
/// assert_eq!(next.get("hero").unwrap().get("title").unwrap().as_str(), Some("B"));
/// assert_eq!(doc.get("hero").unwrap().get("title").unwrap().as_str(), Some("A"));
/// assert!(ContentNode::ptr_eq(doc.get("about").unwrap(), next.get("about").unwrap()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PathDocumentEditor {
    options: EditOptions,
}

impl PathDocumentEditor {
    /// Creates an editor that fails on missing parents.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EditOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EditOptions {
        self.options
    }

    /// Replaces the node at `path` with `value`.
    pub fn set(
        &self,
        document: &ContentNode,
        path: &str,
        value: ContentNode,
    ) -> Result<ContentNode, PathError> {
        let path = ContentPath::parse(path)?;
        debug!(path = %path, "set");
        ops::set(document, &path, value, self.options)
    }

    /// Appends `value` to the array at `path`.
    pub fn append(
        &self,
        document: &ContentNode,
        path: &str,
        value: ContentNode,
    ) -> Result<ContentNode, PathError> {
        let path = ContentPath::parse(path)?;
        debug!(path = %path, "append");
        ops::append(document, &path, value, self.options)
    }

    /// Removes element `index` from the array at `path`.
    pub fn remove_at(
        &self,
        document: &ContentNode,
        path: &str,
        index: isize,
    ) -> Result<ContentNode, PathError> {
        let path = ContentPath::parse(path)?;
        debug!(path = %path, index, "remove_at");
        ops::remove_at(document, &path, index, self.options)
    }

    /// Applies one mutation.
    pub fn apply(
        &self,
        document: &ContentNode,
        mutation: &Mutation,
    ) -> Result<ContentNode, PathError> {
        match mutation {
            Mutation::Set { path, value } => self.set(document, path, value.clone()),
            Mutation::Append { path, value } => self.append(document, path, value.clone()),
            Mutation::RemoveAt { path, index } => self.remove_at(document, path, *index),
        }
    }

    /// Applies mutations in order, stopping at the first failure.
    ///
    /// On failure the error is returned together with the position of the
    /// offending mutation, and none of the batch takes effect.
    pub fn apply_all(
        &self,
        document: &ContentNode,
        mutations: &[Mutation],
    ) -> Result<ContentNode, (usize, PathError)> {
        mutations
            .iter()
            .enumerate()
            .try_fold(document.clone(), |current, (position, mutation)| {
                self.apply(&current, mutation).map_err(|e| (position, e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_content;

    #[test]
    fn test_syntax_error_surfaces() {
        let editor = PathDocumentEditor::new();
        let doc = parse_content("{}").unwrap();
        let err = editor.set(&doc, "", ContentNode::from(1)).unwrap_err();
        assert_eq!(err.kind(), "path_syntax");
    }

    #[test]
    fn test_apply_dispatches() {
        let editor = PathDocumentEditor::new();
        let doc = parse_content(r#"{"missions": ["x"]}"#).unwrap();
        let doc = editor.apply(&doc, &Mutation::append("missions", "y")).unwrap();
        let doc = editor.apply(&doc, &Mutation::remove_at("missions", 0)).unwrap();
        let doc = editor.apply(&doc, &Mutation::set("vision", "v")).unwrap();
        assert_eq!(doc, parse_content(r#"{"missions": ["y"], "vision": "v"}"#).unwrap());
    }

    #[test]
    fn test_apply_all_reports_failing_position() {
        let editor = PathDocumentEditor::new();
        let doc = parse_content(r#"{"missions": []}"#).unwrap();
        let batch = vec![
            Mutation::append("missions", "x"),
            Mutation::remove_at("missions", 3),
            Mutation::set("vision", "v"),
        ];
        let (position, err) = editor.apply_all(&doc, &batch).unwrap_err();
        assert_eq!(position, 1);
        assert!(matches!(err, PathError::IndexOutOfRange { len: 1, .. }));
        assert!(doc.get("missions").unwrap().is_empty());
    }

    #[test]
    fn test_apply_all_empty_batch_returns_same_node() {
        let editor = PathDocumentEditor::new();
        let doc = parse_content(r#"{"a": 1}"#).unwrap();
        let out = editor.apply_all(&doc, &[]).unwrap();
        assert!(ContentNode::ptr_eq(&doc, &out));
    }

    #[test]
    fn test_create_missing_mode() {
        let editor = PathDocumentEditor::with_options(EditOptions::create_missing());
        let doc = parse_content("{}").unwrap();
        let doc = editor.set(&doc, "contact.address.village", ContentNode::from("Sukamaju")).unwrap();
        assert_eq!(
            doc,
            parse_content(r#"{"contact": {"address": {"village": "Sukamaju"}}}"#).unwrap()
        );
    }
}
