//! Glob pattern set used for group `includes` / `excludes`.
//!
//! Patterns use gitignore syntax and are matched against paths relative
//! to the group's source directory.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

/// A compiled list of glob patterns.
///
/// Uses the `ignore` crate's gitignore matcher, so `*.png` matches at any
/// depth, `icons/` matches a directory and everything under it, and a
/// leading `/` anchors a pattern to the group root.
#[derive(Debug, Clone, Default)]
pub struct GlobPatterns {
    matcher: Option<Gitignore>,
    pattern_count: usize,
}

impl GlobPatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile `patterns` rooted at `root`.
    pub fn new(root: &Path, patterns: &[String]) -> Result<Self, GlobError> {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;

        for pattern in patterns {
            let trimmed = pattern.trim();
            if trimmed.is_empty() {
                continue;
            }
            // The gitignore builder treats malformed globs as literals.
            check_glob(trimmed).map_err(|message| GlobError {
                pattern: pattern.clone(),
                message,
            })?;
            builder
                .add_line(None, trimmed)
                .map_err(|e| GlobError {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
            pattern_count += 1;
        }

        if pattern_count == 0 {
            return Ok(Self::empty());
        }

        let matcher = builder.build().map_err(|e| GlobError {
            pattern: patterns.join(", "),
            message: e.to_string(),
        })?;

        Ok(Self {
            matcher: Some(matcher),
            pattern_count,
        })
    }

    /// Check whether `rel_path` (or one of its parent directories) matches.
    pub fn matches(&self, rel_path: &Path, is_dir: bool) -> bool {
        match &self.matcher {
            Some(matcher) => matcher
                .matched_path_or_any_parents(rel_path, is_dir)
                .is_ignore(),
            None => false,
        }
    }

    /// Get the number of patterns compiled.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

/// Compile the glob part of a gitignore line (without `!`, anchoring `/`
/// and the trailing directory `/`).
fn check_glob(line: &str) -> Result<(), String> {
    let glob = line.strip_prefix('!').unwrap_or(line);
    let glob = glob.strip_prefix('/').unwrap_or(glob);
    let glob = glob.strip_suffix('/').unwrap_or(glob);
    globset::Glob::new(glob).map(|_| ()).map_err(|e| e.kind().to_string())
}

/// A pattern that failed to compile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid glob '{pattern}': {message}")]
pub struct GlobError {
    pub pattern: String,
    pub message: String,
}
