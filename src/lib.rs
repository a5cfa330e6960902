//! ContentQuill - path-addressed editing of nested page content.
//!
//! The admin area of a village tourism site edits page content (hero text,
//! vision and missions, geography, gallery captions) stored as one nested
//! JSON document. Every edit names its target with a dot-separated path such
//! as `geography.boundaries.north` and is one of three operations: set a
//! value, append to an array, or remove an array element.
//!
//! Edits never modify a document. Each returns a new snapshot that shares
//! every untouched subtree with its predecessor, so holders of an old snapshot
//! can keep reading it and change detection can compare node identity.
//!
//! # Example
//!
//! ```
//! use contentquill::document::parser::parse_content;
//! use contentquill::{ContentNode, PathDocumentEditor, PathError};
//!
//! let editor = PathDocumentEditor::new();
//! let page = parse_content(r#"{"hero": {"title": "A"}, "missions": ["x", "y"]}"#).unwrap();
//!
//! let page = editor.set(&page, "hero.title", ContentNode::from("B")).unwrap();
//! let page = editor.append(&page, "missions", ContentNode::from("z")).unwrap();
//! let page = editor.remove_at(&page, "missions", 0).unwrap();
//! assert_eq!(page, parse_content(r#"{"hero": {"title": "B"}, "missions": ["y", "z"]}"#).unwrap());
//!
//! let err = editor.set(&page, "hero.title.text", ContentNode::from("C")).unwrap_err();
//! assert!(matches!(err, PathError::TypeMismatch { .. }));
//! ```

pub mod config;
pub mod document;
pub mod editor;
pub mod file;
pub mod path;
pub mod resources;

pub use document::node::{ContentNode, ContentNumber, ContentValue};
pub use editor::{EditOptions, EditorSession, Mutation, PathDocumentEditor};
pub use path::{ContentPath, PathError};
