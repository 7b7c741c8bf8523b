//! Generated output file entity

use std::path::{Path, PathBuf};

/// A rendered Dart file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    path: PathBuf,
    contents: String,
    group: Option<String>,
}

impl GeneratedFile {
    /// `path` is relative to the project root.
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
            group: None,
        }
    }

    pub fn for_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Group this file was rendered from (`None` for the barrel file).
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}
