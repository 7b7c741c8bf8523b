//! `pubspec.yaml` reader

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Pubspec {
    name: Option<String>,
}

/// Dart package name declared in `<root>/pubspec.yaml`.
///
/// Missing or unparsable files yield `None`; the package name only
/// changes how generated tests import the generated classes.
pub fn read_package_name(root: &Path) -> Option<String> {
    let content = std::fs::read_to_string(root.join("pubspec.yaml")).ok()?;
    let pubspec: Pubspec = serde_yaml_ng::from_str(&content).ok()?;
    pubspec.name.filter(|n| !n.trim().is_empty())
}
