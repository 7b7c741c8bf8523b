//! Build Result
//!
//! Result types for build and check operations.

use std::path::PathBuf;

use crate::domain::entities::{GeneratedFile, ResolvedGroup};

/// What one group produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub name: String,
    pub class_name: String,
    /// `(identifier, asset path)` in scan order
    pub identifiers: Vec<(String, String)>,
    /// Entries left out because their names cannot be represented
    pub skipped: Vec<PathBuf>,
}

impl GroupSummary {
    pub fn from_resolved(group: &ResolvedGroup, skipped: Vec<PathBuf>) -> Self {
        Self {
            name: group.name.clone(),
            class_name: group.class_name.clone(),
            identifiers: group
                .entries
                .iter()
                .map(|e| (e.identifier.clone(), e.file.asset_path().to_string()))
                .collect(),
            skipped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

/// Everything rendered in memory, before any write
#[derive(Debug, Clone, Default)]
pub struct BuildPlan {
    pub groups: Vec<GroupSummary>,
    /// Files to write, paths relative to the project root
    pub files: Vec<GeneratedFile>,
}

impl BuildPlan {
    /// Human-readable warnings (empty groups, skipped entries)
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for group in &self.groups {
            if group.is_empty() {
                warnings.push(format!("group '{}' matched no files", group.name));
            }
            for skipped in &group.skipped {
                warnings.push(format!(
                    "group '{}': skipped '{}' (name is not valid UTF-8 or link is broken)",
                    group.name,
                    skipped.to_string_lossy()
                ));
            }
        }
        warnings
    }

    pub fn asset_count(&self) -> usize {
        self.groups.iter().map(|g| g.identifiers.len()).sum()
    }
}

/// Result of a build operation
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub groups: Vec<GroupSummary>,
    /// Files that were written
    pub written: Vec<PathBuf>,
    /// Files already up to date (left untouched)
    pub unchanged: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

impl BuildReport {
    pub fn has_changes(&self) -> bool {
        !self.written.is_empty()
    }

    pub fn asset_count(&self) -> usize {
        self.groups.iter().map(|g| g.identifiers.len()).sum()
    }
}

/// A generated file whose on-disk content differs from the rendered one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleFile {
    /// Relative to the project root
    pub path: PathBuf,
    pub expected: String,
    /// `None` when the file does not exist
    pub actual: Option<String>,
}

/// Result of `build --check`
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub groups: Vec<GroupSummary>,
    pub stale: Vec<StaleFile>,
    pub up_to_date: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn is_up_to_date(&self) -> bool {
        self.stale.is_empty()
    }
}
