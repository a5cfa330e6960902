//! File I/O for content documents.
//!
//! This module loads content from disk or stdin and saves it back with atomic
//! writes and optional backups. `FileContentService` packages both behind the
//! `ContentService` trait that editing sessions talk to.

pub mod loader;
pub mod saver;
pub mod service;

pub use service::{ContentService, FileContentService};
