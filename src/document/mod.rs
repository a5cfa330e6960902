//! Content document model.
//!
//! - `node`: the shared, immutable tree of content values
//! - `parser`: JSON text and `serde` conversion
//! - `template`: the seed document for a new village profile page

pub mod node;
pub mod parser;
pub mod template;

pub use node::{ContentNode, ContentNumber, ContentValue};
