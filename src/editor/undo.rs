//! Undo/redo history over document snapshots.
//!
//! Snapshots share structure, so keeping many of them costs only the nodes
//! each edit rebuilt. The history is linear: making a new edit after undoing
//! discards the redo stack.

use crate::document::node::ContentNode;
use std::collections::VecDeque;
use std::time::SystemTime;

/// A document state that can be returned to.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    pub snapshot: ContentNode,
    /// Description of the edit that led away from this state
    pub label: String,
    pub timestamp: SystemTime,
}

impl Checkpoint {
    pub fn new(snapshot: ContentNode, label: impl Into<String>) -> Self {
        Self {
            snapshot,
            label: label.into(),
            timestamp: SystemTime::now(),
        }
    }
}

/// Bounded undo/redo stacks.
#[derive(Debug)]
pub struct UndoHistory {
    past: VecDeque<Checkpoint>,
    future: Vec<Checkpoint>,
    limit: usize,
}

impl UndoHistory {
    /// Creates an empty history keeping at most `limit` undo steps.
    pub fn new(limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn undo_len(&self) -> usize {
        self.past.len()
    }

    pub fn redo_len(&self) -> usize {
        self.future.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Records the state an edit is leaving.
    ///
    /// Clears the redo stack and drops the oldest checkpoint once the limit
    /// is reached.
    pub fn record(&mut self, checkpoint: Checkpoint) {
        self.future.clear();
        if self.limit == 0 {
            return;
        }
        while self.past.len() >= self.limit {
            self.past.pop_front();
        }
        self.past.push_back(checkpoint);
    }

    /// Steps back. `current` is the state being left; it becomes redoable.
    ///
    /// Returns the snapshot to restore, or None if there is nothing to undo.
    pub fn undo(&mut self, current: ContentNode) -> Option<ContentNode> {
        let checkpoint = self.past.pop_back()?;
        self.future.push(Checkpoint::new(current, checkpoint.label.clone()));
        Some(checkpoint.snapshot)
    }

    /// Steps forward again after an undo.
    pub fn redo(&mut self, current: ContentNode) -> Option<ContentNode> {
        let checkpoint = self.future.pop()?;
        self.past.push_back(Checkpoint::new(current, checkpoint.label.clone()));
        Some(checkpoint.snapshot)
    }

    /// Label of the edit that `undo` would revert.
    pub fn peek_undo_label(&self) -> Option<&str> {
        self.past.back().map(|c| c.label.as_str())
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(n: i64) -> ContentNode {
        ContentNode::from(n)
    }

    #[test]
    fn test_undo_then_redo() {
        let mut history = UndoHistory::new(10);
        let first = node(1);
        history.record(Checkpoint::new(first.clone(), "set a"));

        let restored = history.undo(node(2)).unwrap();
        assert!(ContentNode::ptr_eq(&restored, &first));
        assert!(history.can_redo());

        assert_eq!(history.redo_len(), 1);
        let redone = history.redo(restored).unwrap();
        assert_eq!(redone, node(2));
        assert!(!history.can_redo());
        assert_eq!(history.redo_len(), 0);
        assert_eq!(history.undo_len(), 1);
    }

    #[test]
    fn test_clear_forgets_both_directions() {
        let mut history = UndoHistory::new(10);
        history.record(Checkpoint::new(node(1), "a"));
        history.record(Checkpoint::new(node(2), "b"));
        history.undo(node(3));

        history.clear();
        assert_eq!((history.undo_len(), history.redo_len()), (0, 0));
        assert_eq!(history.peek_undo_label(), None);
        assert_eq!(history.limit(), 10);
    }

    #[test]
    fn test_empty_history() {
        let mut history = UndoHistory::new(10);
        assert!(history.undo(node(1)).is_none());
        assert!(history.redo(node(1)).is_none());
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut history = UndoHistory::new(10);
        history.record(Checkpoint::new(node(1), "a"));
        history.undo(node(2));
        assert!(history.can_redo());
        history.record(Checkpoint::new(node(1), "b"));
        assert!(!history.can_redo());
        assert_eq!(history.peek_undo_label(), Some("b"));
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = UndoHistory::new(2);
        for i in 0..5 {
            history.record(Checkpoint::new(node(i), format!("edit {}", i)));
        }
        assert_eq!(history.undo_len(), 2);
        assert_eq!(history.undo(node(5)), Some(node(4)));
        assert_eq!(history.undo(node(4)), Some(node(3)));
        assert_eq!(history.undo(node(3)), None);
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut history = UndoHistory::new(0);
        history.record(Checkpoint::new(node(1), "a"));
        assert!(!history.can_undo());
    }
}
