//! Dot-separated content paths.
//!
//! A content path such as `geography.boundaries.north` or `about.missions.2`
//! addresses one node inside a content document. Segments are plain tokens;
//! whether a segment is a field name or an array position is decided when the
//! path is walked, by looking at the node the segment is applied to.
//!
//! # Example
//!
//! ```
//! use contentquill::document::parser::parse_content;
//! use contentquill::path::{resolve, ContentPath};
//!
//! let root = parse_content(r#"{"about": {"missions": ["x", "y"]}}"#).unwrap();
//! let path = ContentPath::parse("about.missions.1").unwrap();
//! assert_eq!(resolve(&root, &path).unwrap().as_str(), Some("y"));
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod resolver;

pub use ast::ContentPath;
pub use error::PathError;
pub use parser::Parser;
pub use resolver::{child, parse_index, resolve, resolve_parent};
