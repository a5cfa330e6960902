//! A single edit, as data.

use crate::document::node::ContentNode;
use serde::{Deserialize, Serialize};

/// One edit to a content document.
///
/// Mutations serialize with an `op` tag so that batches can be stored and
/// replayed:
///
/// ```
/// use contentquill::editor::mutation::Mutation;
///
/// let batch: Vec<Mutation> = serde_json::from_str(r#"[
///     {"op": "set", "path": "hero.title", "value": "Desa Wisata"},
///     {"op": "append", "path": "about.missions", "value": "Lestarikan budaya"},
///     {"op": "remove_at", "path": "gallery", "index": 0}
/// ]"#).unwrap();
/// assert_eq!(batch[2], Mutation::RemoveAt { path: "gallery".to_string(), index: 0 });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    Set { path: String, value: ContentNode },
    Append { path: String, value: ContentNode },
    RemoveAt { path: String, index: isize },
}

impl Mutation {
    pub fn set(path: impl Into<String>, value: impl Into<ContentNode>) -> Self {
        Mutation::Set {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn append(path: impl Into<String>, value: impl Into<ContentNode>) -> Self {
        Mutation::Append {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn remove_at(path: impl Into<String>, index: isize) -> Self {
        Mutation::RemoveAt {
            path: path.into(),
            index,
        }
    }

    /// The raw path string this mutation targets.
    pub fn path(&self) -> &str {
        match self {
            Mutation::Set { path, .. }
            | Mutation::Append { path, .. }
            | Mutation::RemoveAt { path, .. } => path,
        }
    }

    /// Lowercase operation name, matching the serialized tag.
    pub fn op_name(&self) -> &'static str {
        match self {
            Mutation::Set { .. } => "set",
            Mutation::Append { .. } => "append",
            Mutation::RemoveAt { .. } => "remove_at",
        }
    }
}
