//! Path-addressed editing of content documents.
//!
//! # Modules
//!
//! - `ops`: the copy-on-path set, append and remove algorithms
//! - `path_editor`: `PathDocumentEditor`, the façade every caller goes through
//! - `mutation`: edits as serializable data
//! - `options`: fail-closed vs. create-on-demand behavior
//! - `session`: caller-owned current snapshot with undo/redo
//! - `undo`: bounded snapshot history
//!
//! # Example
//!
//! ```
//! use contentquill::document::parser::parse_content;
//! use contentquill::editor::PathDocumentEditor;
//! use contentquill::document::node::ContentNode;
//!
//! let editor = PathDocumentEditor::new();
//! let doc = parse_content(r#"{"missions": ["x", "y", "z"]}"#).unwrap();
//! let doc = editor.remove_at(&doc, "missions", 1).unwrap();
//! assert_eq!(doc, parse_content(r#"{"missions": ["x", "z"]}"#).unwrap());
//! ```

pub mod mutation;
pub mod ops;
pub mod options;
pub mod path_editor;
pub mod session;
pub mod undo;

pub use mutation::Mutation;
pub use options::EditOptions;
pub use path_editor::PathDocumentEditor;
pub use session::EditorSession;
