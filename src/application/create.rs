//! Config scaffolding (`spider create`)

use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::OrchestrationError;

/// Contents written by `spider create`.
pub const DEFAULT_CONFIG: &str = r#"# Configuration for spider: generates Dart constants for asset files.

# Directory for generated files, relative to this file.
output: lib/resources
# Name of the barrel file exporting every group (lib/resources/resources.dart).
package: resources
# camelCase, snake_case or PascalCase
naming_convention: camelCase
# plain: String constants, typed: AssetImage constants (Flutter)
template: plain
export: true
generate_tests: false
no_comments: false
use_references_list: false

groups: []
#  - name: images
#    path: assets/images
#    recursive: false
#    types: [png, jpg, jpeg, webp, svg]
#    excludes: ["*_old.*"]
"#;

/// Write the default config to `path`.
///
/// Fails with `ConfigExists` when anything is already at `path`; the
/// existing file is never modified. The contents are written to a temp
/// file next to `path` and linked into place, so a failed write leaves
/// nothing behind.
pub fn create_config(path: &Path) -> Result<(), OrchestrationError> {
    let failed = |source: std::io::Error| OrchestrationError::CreateFailed {
        path: path.to_path_buf(),
        source,
    };
    if path.symlink_metadata().is_ok() {
        return Err(OrchestrationError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(failed)?;
    temp.write_all(DEFAULT_CONFIG.as_bytes())
        .and_then(|_| temp.as_file().sync_all())
        .map_err(failed)?;

    temp.persist_noclobber(path).map_err(|e| {
        if e.error.kind() == ErrorKind::AlreadyExists {
            OrchestrationError::ConfigExists {
                path: path.to_path_buf(),
            }
        } else {
            failed(e.error)
        }
    })?;
    Ok(())
}
