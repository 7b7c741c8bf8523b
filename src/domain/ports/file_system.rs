//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the pipeline compare and write generated files without depending
//! on the local disk implementation.

use std::io;
use std::path::Path;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic replace
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Write content to file atomically, creating parent directories
    fn write_atomic(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;
}

/// In-memory file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: std::sync::Arc<
        std::sync::Mutex<std::collections::BTreeMap<std::path::PathBuf, String>>,
    >,
    /// Writes to this path fail with `PermissionDenied`
    pub read_only: Option<std::path::PathBuf>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> io::Result<String> {
        self.get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "not found"))
    }

    fn write_atomic(&self, path: &Path, content: &str) -> io::Result<()> {
        if self.read_only.as_deref() == Some(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_fs_round_trip() {
        let fs = MockFileSystem::new();
        let path = Path::new("/p/lib/a.dart");
        assert!(!fs.exists(path));
        fs.write_atomic(path, "class A {}").unwrap();
        assert_eq!(fs.read(path).unwrap(), "class A {}");
    }
}
