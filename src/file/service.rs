//! Where content documents come from and go back to.

use super::loader::load_content_file;
use super::saver::save_content_file;
use crate::config::Config;
use crate::document::node::ContentNode;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Loads and saves whole content documents.
///
/// The editing core never performs I/O; whatever sits behind this trait
/// (a file, an HTTP endpoint) is responsible for transport and retries.
pub trait ContentService {
    fn load(&self) -> Result<ContentNode>;
    fn save(&mut self, document: &ContentNode) -> Result<()>;
}

/// A content service backed by one JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileContentService {
    path: PathBuf,
    config: Config,
}

impl FileContentService {
    pub fn new(path: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentService for FileContentService {
    fn load(&self) -> Result<ContentNode> {
        info!(path = %self.path.display(), "loading content");
        load_content_file(&self.path)
    }

    fn save(&mut self, document: &ContentNode) -> Result<()> {
        info!(path = %self.path.display(), "saving content");
        save_content_file(&self.path, document, &self.config)
    }
}
