//! Asset directory scanner
//!
//! Walks a group's source directory by hand (`fs::read_dir`) so entry
//! order, symlink handling and pruning stay under our control:
//!
//! - entries of each directory are visited in file-name order
//! - hidden entries are skipped unless `include_hidden`
//! - excludes prune files and whole directories, then includes, then `types`
//! - symlinks are followed; each canonical directory is entered once and
//!   a link back to an ancestor is reported as a cycle
//! - a directory link whose target lies inside the group is not entered;
//!   the real directory is listed under its own path

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{normalize_rel, GroupSpec};
use crate::domain::entities::{AssetFile, AssetGroup};
use crate::domain::ports::AssetSource;
use crate::domain::value_objects::GlobPatterns;
use crate::error::ScanError;

/// Scanner backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsScanner;

impl FsScanner {
    pub fn new() -> Self {
        Self
    }
}

impl AssetSource for FsScanner {
    fn scan(
        &self,
        root: &Path,
        group: &GroupSpec,
        include_hidden: bool,
    ) -> Result<AssetGroup, ScanError> {
        scan(root, group, include_hidden)
    }
}

/// Scan one group below the project `root`.
pub fn scan(root: &Path, group: &GroupSpec, include_hidden: bool) -> Result<AssetGroup, ScanError> {
    let source = root.join(&group.path);
    let canonical = source.canonicalize().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ScanError::MissingPath {
                group: group.name.clone(),
                path: source.clone(),
            }
        } else {
            ScanError::Io {
                group: group.name.clone(),
                path: source.clone(),
                source: e,
            }
        }
    })?;
    if !canonical.is_dir() {
        return Err(ScanError::MissingPath {
            group: group.name.clone(),
            path: source,
        });
    }

    let compile = |patterns: &[String]| {
        GlobPatterns::new(&source, patterns).map_err(|e| ScanError::InvalidPattern {
            group: group.name.clone(),
            source: e,
        })
    };

    let mut walker = Walker {
        group,
        include_hidden,
        includes: compile(&group.includes)?,
        excludes: compile(&group.excludes)?,
        asset_prefix: group.path_str(),
        root: canonical.clone(),
        ancestors: vec![canonical.clone()],
        visited: HashSet::from([canonical]),
        files: Vec::new(),
        skipped: Vec::new(),
    };
    walker.walk(&source, Path::new(""))?;

    let mut result = AssetGroup::new(group.name.clone(), source).with_files(walker.files);
    result.skipped = walker.skipped;
    Ok(result)
}

struct Walker<'a> {
    group: &'a GroupSpec,
    include_hidden: bool,
    includes: GlobPatterns,
    excludes: GlobPatterns,
    /// Group path relative to the project root, `/`-separated
    asset_prefix: String,
    /// Canonical group source directory
    root: PathBuf,
    /// Canonical directories on the current descent path
    ancestors: Vec<PathBuf>,
    /// Canonical directories already entered during this scan
    visited: HashSet<PathBuf>,
    files: Vec<AssetFile>,
    skipped: Vec<PathBuf>,
}

impl Walker<'_> {
    fn io_error(&self, path: &Path, source: std::io::Error) -> ScanError {
        ScanError::Io {
            group: self.group.name.clone(),
            path: path.to_path_buf(),
            source,
        }
    }

    /// Visit `dir`, whose path relative to the group source is `rel`.
    fn walk(&mut self, dir: &Path, rel: &Path) -> Result<(), ScanError> {
        let read = fs::read_dir(dir).map_err(|e| self.io_error(dir, e))?;

        let mut entries: Vec<(String, fs::DirEntry)> = Vec::new();
        for entry in read {
            let entry = entry.map_err(|e| self.io_error(dir, e))?;
            match entry.file_name().into_string() {
                Ok(name) => entries.push((name, entry)),
                // Not representable in generated source.
                Err(raw) => self.skipped.push(rel.join(raw)),
            }
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, entry) in entries {
            if name.starts_with('.') && !self.include_hidden {
                continue;
            }

            let path = entry.path();
            let rel_path = rel.join(&name);

            let file_type = entry.file_type().map_err(|e| self.io_error(&path, e))?;
            let is_link = file_type.is_symlink();
            let metadata = match fs::metadata(&path) {
                Ok(m) => m,
                // Dangling symlink
                Err(_) if is_link => {
                    self.skipped.push(rel_path);
                    continue;
                }
                Err(e) => return Err(self.io_error(&path, e)),
            };

            if self.excludes.matches(&rel_path, metadata.is_dir()) {
                continue;
            }

            if metadata.is_dir() {
                if self.group.recursive {
                    self.enter(&path, &rel_path, is_link)?;
                }
            } else if metadata.is_file() {
                self.add_file(path, rel_path, &name);
            }
        }

        Ok(())
    }

    fn enter(&mut self, path: &Path, rel_path: &Path, is_link: bool) -> Result<(), ScanError> {
        let canonical = path.canonicalize().map_err(|e| self.io_error(path, e))?;

        if self.ancestors.contains(&canonical) {
            return Err(ScanError::CyclicPath {
                group: self.group.name.clone(),
                link: path.to_path_buf(),
                target: canonical,
            });
        }
        if is_link && canonical.starts_with(&self.root) {
            return Ok(());
        }
        if !self.visited.insert(canonical.clone()) {
            return Ok(());
        }

        self.ancestors.push(canonical);
        let result = self.walk(path, rel_path);
        self.ancestors.pop();
        result
    }

    fn add_file(&mut self, path: PathBuf, rel_path: PathBuf, name: &str) {
        if !self.includes.is_empty() && !self.includes.matches(&rel_path, false) {
            return;
        }

        let extension = match name.rfind('.') {
            Some(idx) if idx > 0 => &name[idx + 1..],
            _ => "",
        };
        if !self.group.accepts_extension(extension) {
            return;
        }

        let rel_str = normalize_rel(&rel_path);
        let asset_path = if self.asset_prefix.is_empty() {
            rel_str
        } else {
            format!("{}/{}", self.asset_prefix, rel_str)
        };
        self.files.push(AssetFile::new(path, rel_path, asset_path));
    }
}

#[cfg(test)]
mod tests;
