//! Configuration loading and validation

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::services::dart;
use crate::domain::value_objects::{ConfigWarning, GlobPatterns};
use crate::error::ConfigError;

use super::types::Config;

/// Default configuration file name
pub const CONFIG_FILE: &str = "spider.yaml";

/// A validated config together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// Path of the config file
    pub path: PathBuf,
    /// Directory containing the config file (canonical)
    pub root: PathBuf,
    /// Non-fatal warnings (unknown keys)
    pub warnings: Vec<ConfigWarning>,
}

/// Load, parse and validate a config file.
///
/// Reads nothing but the config file and the metadata of the directories
/// it names; never writes.
pub fn load(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let (config, warnings) = parse_with_warnings(&content, path)?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let root = parent.canonicalize().map_err(|e| ConfigError::Io {
        path: parent.clone(),
        source: e,
    })?;

    validate(&config, &root)?;

    Ok(LoadedConfig {
        config,
        path: path.to_path_buf(),
        root,
        warnings,
    })
}

/// Parse YAML and collect non-fatal warnings (e.g. unknown keys).
pub fn parse_with_warnings(
    content: &str,
    file: &Path,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    // An empty document deserializes as null; treat it as an empty mapping.
    let content = if content.trim().is_empty() { "{}" } else { content };

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::ParseError {
        file: file.to_path_buf(),
        message: format_yaml_error(&e),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: file.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

fn format_yaml_error(err: &serde_yaml_ng::Error) -> String {
    match err.location() {
        Some(loc) => {
            let message = err.to_string();
            if message.contains("line ") {
                message
            } else {
                format!("line {}: {}", loc.line(), message)
            }
        }
        None => err.to_string(),
    }
}

/// Validate paths, names and values that parsed but may still be unusable.
pub fn validate(config: &Config, root: &Path) -> Result<(), ConfigError> {
    validate_identifier_part("keyword_suffix", &config.keyword_suffix, false)?;
    validate_identifier_part("class_prefix", &config.class_prefix, true)?;
    validate_identifier_part("class_suffix", &config.class_suffix, true)?;
    if !config
        .digit_prefix
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        || !config.digit_prefix.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(ConfigError::InvalidValue {
            key: "digit_prefix".to_string(),
            message: format!(
                "'{}' must start with a letter and contain only letters and digits",
                config.digit_prefix
            ),
        });
    }

    if config.package.is_empty()
        || !config
            .package
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(ConfigError::InvalidValue {
            key: "package".to_string(),
            message: format!(
                "'{}' must be lowercase_with_underscores",
                config.package
            ),
        });
    }

    validate_relative("output", &config.output)?;

    let mut names: HashSet<String> = HashSet::new();
    let mut class_names: HashSet<String> = HashSet::new();
    let mut file_stems: HashSet<String> = HashSet::new();
    if config.export {
        file_stems.insert(config.package.clone());
    }

    for (index, group) in config.groups.iter().enumerate() {
        if !names.insert(group.name.to_lowercase()) {
            return Err(ConfigError::DuplicateGroup {
                name: group.name.clone(),
            });
        }

        let class_name = config.class_name(group).ok_or_else(|| ConfigError::InvalidValue {
            key: format!("groups[{index}].name"),
            message: format!("'{}' does not produce a class name", group.name),
        })?;
        if !dart::is_valid_identifier(&class_name) {
            return Err(ConfigError::InvalidValue {
                key: format!("groups[{index}].class_name"),
                message: format!("'{class_name}' is not a valid Dart class name"),
            });
        }
        if !class_names.insert(class_name) {
            return Err(ConfigError::DuplicateGroup {
                name: group.name.clone(),
            });
        }

        let file_stem = config.file_stem(group).ok_or_else(|| ConfigError::InvalidValue {
            key: format!("groups[{index}].name"),
            message: format!("'{}' does not produce a file name", group.name),
        })?;
        if !file_stems.insert(file_stem) {
            return Err(ConfigError::DuplicateGroup {
                name: group.name.clone(),
            });
        }

        let source = validate_source_dir(root, &group.name, &group.path)?;

        GlobPatterns::new(&source, &group.includes).map_err(|e| ConfigError::InvalidValue {
            key: format!("groups[{index}].includes"),
            message: e.to_string(),
        })?;
        GlobPatterns::new(&source, &group.excludes).map_err(|e| ConfigError::InvalidValue {
            key: format!("groups[{index}].excludes"),
            message: e.to_string(),
        })?;
    }

    Ok(())
}

fn validate_identifier_part(key: &str, value: &str, allow_empty: bool) -> Result<(), ConfigError> {
    if (value.is_empty() && !allow_empty)
        || !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("'{value}' must contain only letters, digits, '_' or '$'"),
        });
    }
    Ok(())
}

/// Reject absolute paths and `..` components that climb out of the root.
fn validate_relative(context: &str, path: &Path) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidPath {
        context: context.to_string(),
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    if path.is_absolute() || path.has_root() {
        return Err(invalid("must be relative to the project root"));
    }

    let mut depth: i32 = 0;
    for component in path.components() {
        match component {
            Component::ParentDir => depth -= 1,
            Component::Normal(_) => depth += 1,
            _ => {}
        }
        if depth < 0 {
            return Err(invalid("escapes the project root"));
        }
    }
    Ok(())
}

/// Check that a group's source directory exists, is readable and lives
/// inside `root`. Returns its canonical path.
fn validate_source_dir(root: &Path, group: &str, rel: &Path) -> Result<PathBuf, ConfigError> {
    let context = format!("group '{group}'");
    let invalid = |reason: String| ConfigError::InvalidPath {
        context: context.clone(),
        path: rel.to_path_buf(),
        reason,
    };

    if rel.is_absolute() || rel.has_root() {
        return Err(invalid("must be relative to the project root".to_string()));
    }

    let joined = root.join(rel);
    let canonical = joined.canonicalize().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            invalid("directory does not exist".to_string())
        } else {
            invalid(e.to_string())
        }
    })?;

    if !canonical.starts_with(root) {
        return Err(invalid("resolves outside the project root".to_string()));
    }
    if !canonical.is_dir() {
        return Err(invalid("not a directory".to_string()));
    }
    fs::read_dir(&canonical).map_err(|e| invalid(format!("not readable: {e}")))?;

    Ok(canonical)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim_start().trim_start_matches("- ");
        if trimmed.starts_with(needle) && trimmed[needle.len()..].trim_start().starts_with(':') {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "package",
        "naming_convention",
        "template",
        "class_prefix",
        "class_suffix",
        "keyword_suffix",
        "digit_prefix",
        "include_hidden",
        "export",
        "generate_tests",
        "no_comments",
        "use_references_list",
        "groups",
        "name",
        "path",
        "class_name",
        "includes",
        "excludes",
        "recursive",
        "types",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn suggest_key_for_test(unknown: &str) -> Option<String> {
    suggest_key(unknown)
}
