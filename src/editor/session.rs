//! Caller-side ownership of the current document.
//!
//! An `EditorSession` is what an admin screen holds while a page is being
//! edited: exactly one current snapshot, the history needed to step back and
//! forth between snapshots, and the snapshot that was last saved. Every edit
//! swaps the current snapshot wholesale for the one the editor returns.

use super::mutation::Mutation;
use super::options::EditOptions;
use super::path_editor::PathDocumentEditor;
use super::undo::{Checkpoint, UndoHistory};
use crate::config::Config;
use crate::document::node::ContentNode;
use crate::file::service::ContentService;
use crate::path::{resolve, ContentPath, PathError};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Editing state for one loaded document.
#[derive(Debug)]
pub struct EditorSession {
    current: ContentNode,
    saved: ContentNode,
    editor: PathDocumentEditor,
    history: UndoHistory,
}

impl EditorSession {
    /// Starts a session on `document`, treating it as already saved.
    pub fn new(document: ContentNode, options: EditOptions, undo_limit: usize) -> Self {
        Self {
            saved: document.clone(),
            current: document,
            editor: PathDocumentEditor::with_options(options),
            history: UndoHistory::new(undo_limit),
        }
    }

    /// Starts a session using the editing settings from `config`.
    pub fn with_config(document: ContentNode, config: &Config) -> Self {
        Self::new(document, config.edit_options(), config.undo_limit)
    }

    /// Loads the document from `service` and starts a session on it.
    pub fn load<S: ContentService + ?Sized>(service: &S, config: &Config) -> Result<Self> {
        let document = service.load().context("Failed to load content")?;
        info!("content loaded");
        Ok(Self::with_config(document, config))
    }

    /// The current snapshot.
    pub fn current(&self) -> &ContentNode {
        &self.current
    }

    pub fn editor(&self) -> &PathDocumentEditor {
        &self.editor
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Reads the node at `path` in the current snapshot.
    pub fn get(&self, path: &str) -> Result<&ContentNode, PathError> {
        let path = ContentPath::parse(path)?;
        resolve(&self.current, &path)
    }

    /// Applies one mutation and makes the result current.
    ///
    /// On error the current snapshot and the history are unchanged.
    pub fn apply(&mut self, mutation: &Mutation) -> Result<&ContentNode, PathError> {
        let next = self.editor.apply(&self.current, mutation)?;
        let label = format!("{} {}", mutation.op_name(), mutation.path());
        self.commit(next, label);
        Ok(&self.current)
    }

    /// Applies a batch as a single undo step; all or nothing.
    pub fn apply_all(&mut self, mutations: &[Mutation]) -> Result<&ContentNode, (usize, PathError)> {
        let next = self.editor.apply_all(&self.current, mutations)?;
        if !mutations.is_empty() {
            let label = format!("batch of {} edits", mutations.len());
            self.commit(next, label);
        }
        Ok(&self.current)
    }

    pub fn set(&mut self, path: &str, value: ContentNode) -> Result<&ContentNode, PathError> {
        self.apply(&Mutation::Set {
            path: path.to_string(),
            value,
        })
    }

    pub fn append(&mut self, path: &str, value: ContentNode) -> Result<&ContentNode, PathError> {
        self.apply(&Mutation::Append {
            path: path.to_string(),
            value,
        })
    }

    pub fn remove_at(&mut self, path: &str, index: isize) -> Result<&ContentNode, PathError> {
        self.apply(&Mutation::RemoveAt {
            path: path.to_string(),
            index,
        })
    }

    fn commit(&mut self, next: ContentNode, label: String) {
        debug!(edit = %label, "commit");
        let previous = std::mem::replace(&mut self.current, next);
        self.history.record(Checkpoint::new(previous, label));
    }

    /// Returns to the previous snapshot. Returns false if there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.current.clone()) {
            Some(snapshot) => {
                self.current = snapshot;
                true
            }
            None => false,
        }
    }

    /// Re-applies the last undone edit. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.current.clone()) {
            Some(snapshot) => {
                self.current = snapshot;
                true
            }
            None => false,
        }
    }

    /// True when the current snapshot is not the one last saved.
    ///
    /// Compares identity, not value: undoing back to the saved snapshot makes
    /// the session clean again, while an edit that happens to reproduce the
    /// saved content still counts as a change.
    pub fn is_dirty(&self) -> bool {
        !ContentNode::ptr_eq(&self.current, &self.saved)
    }

    /// Records the current snapshot as saved.
    pub fn mark_saved(&mut self) {
        self.saved = self.current.clone();
    }

    /// Hands the current snapshot to `service` and marks it saved.
    pub fn save<S: ContentService + ?Sized>(&mut self, service: &mut S) -> Result<()> {
        service
            .save(&self.current)
            .context("Failed to save content")?;
        self.mark_saved();
        info!("content saved");
        Ok(())
    }

    /// Ends the session, returning the current snapshot.
    pub fn into_document(self) -> ContentNode {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_content;

    fn session(json: &str) -> EditorSession {
        EditorSession::new(parse_content(json).unwrap(), EditOptions::default(), 50)
    }

    #[test]
    fn test_apply_replaces_current() {
        let mut s = session(r#"{"hero": {"title": "A"}}"#);
        s.set("hero.title", ContentNode::from("B")).unwrap();
        assert_eq!(s.get("hero.title").unwrap().as_str(), Some("B"));
        assert!(s.is_dirty());
    }

    #[test]
    fn test_failed_edit_keeps_snapshot() {
        let mut s = session(r#"{"a": []}"#);
        let before = s.current().clone();
        let err = s.remove_at("a", 5).unwrap_err();
        assert!(matches!(err, PathError::IndexOutOfRange { .. }));
        assert!(ContentNode::ptr_eq(&before, s.current()));
        assert!(!s.history().can_undo());
        assert!(!s.is_dirty());
    }

    #[test]
    fn test_undo_restores_identity_and_cleanliness() {
        let mut s = session(r#"{"missions": ["x"]}"#);
        let original = s.current().clone();
        s.append("missions", ContentNode::from("y")).unwrap();
        assert!(s.undo());
        assert!(ContentNode::ptr_eq(&original, s.current()));
        assert!(!s.is_dirty());
        assert!(s.redo());
        assert_eq!(s.current().get("missions").unwrap().len(), 2);
        assert!(!s.redo());
    }

    #[test]
    fn test_batch_is_one_undo_step() {
        let mut s = session(r#"{"missions": []}"#);
        s.apply_all(&[
            Mutation::append("missions", "x"),
            Mutation::append("missions", "y"),
        ])
        .unwrap();
        assert_eq!(s.history().undo_len(), 1);
        assert_eq!(s.history().peek_undo_label(), Some("batch of 2 edits"));
        assert!(s.undo());
        assert!(s.current().get("missions").unwrap().is_empty());
    }

    #[test]
    fn test_mark_saved() {
        let mut s = session(r#"{"a": 1}"#);
        s.set("a", ContentNode::from(2)).unwrap();
        s.mark_saved();
        assert!(!s.is_dirty());
        assert!(s.undo());
        assert!(s.is_dirty());
    }
}
