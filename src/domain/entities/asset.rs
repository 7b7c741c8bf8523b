//! Scanned asset files and groups

use std::path::{Path, PathBuf};

/// A single file discovered while scanning a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    absolute_path: PathBuf,
    relative_path: PathBuf,
    asset_path: String,
}

impl AssetFile {
    /// Create an asset file.
    ///
    /// `asset_path` is the project-relative, `/`-separated path that ends
    /// up as the generated constant's value.
    pub fn new(
        absolute_path: impl Into<PathBuf>,
        relative_path: impl Into<PathBuf>,
        asset_path: impl Into<String>,
    ) -> Self {
        Self {
            absolute_path: absolute_path.into(),
            relative_path: relative_path.into(),
            asset_path: asset_path.into(),
        }
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    /// Path relative to the group's source directory.
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn asset_path(&self) -> &str {
        &self.asset_path
    }

    /// File name including extension (`logo.png`).
    pub fn file_name(&self) -> &str {
        self.asset_path
            .rsplit('/')
            .next()
            .unwrap_or(self.asset_path.as_str())
    }

    /// File name without its last extension (`logo` for `logo.png`).
    ///
    /// A leading dot is part of the stem, so `.env` has stem `.env`.
    pub fn stem(&self) -> &str {
        let name = self.file_name();
        match name.rfind('.') {
            Some(idx) if idx > 0 => &name[..idx],
            _ => name,
        }
    }

    /// Last extension without the dot (`png`), empty if none.
    pub fn extension(&self) -> &str {
        let name = self.file_name();
        match name.rfind('.') {
            Some(idx) if idx > 0 => &name[idx + 1..],
            _ => "",
        }
    }
}

/// An ordered collection of files sharing one source directory and rule set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetGroup {
    pub name: String,
    pub source: PathBuf,
    /// Files in lexicographic order of relative path
    pub files: Vec<AssetFile>,
    /// Entries skipped because they cannot be represented (non UTF-8 names)
    pub skipped: Vec<PathBuf>,
}

impl AssetGroup {
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            files: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn with_files(mut self, files: Vec<AssetFile>) -> Self {
        self.files = files;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(asset_path: &str) -> AssetFile {
        AssetFile::new(
            format!("/project/{asset_path}"),
            asset_path.rsplit('/').next().unwrap(),
            asset_path,
        )
    }

    #[test]
    fn stem_and_extension() {
        let f = file("assets/images/logo.dark.png");
        assert_eq!(f.file_name(), "logo.dark.png");
        assert_eq!(f.stem(), "logo.dark");
        assert_eq!(f.extension(), "png");
    }

    #[test]
    fn file_without_extension() {
        let f = file("assets/LICENSE");
        assert_eq!(f.stem(), "LICENSE");
        assert_eq!(f.extension(), "");
    }

    #[test]
    fn dotfile_has_no_extension() {
        let f = file("assets/.env");
        assert_eq!(f.stem(), ".env");
        assert_eq!(f.extension(), "");
    }

    #[test]
    fn trailing_dot_has_empty_extension() {
        let f = file("assets/weird.");
        assert_eq!(f.stem(), "weird");
        assert_eq!(f.extension(), "");
    }
}
