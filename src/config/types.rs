//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::emitter::RenderContext;
use crate::domain::services::identifier::{class_name_for, file_stem_for, ResolveOptions};
use crate::error::ConfigError;

use super::loader::{self, LoadedConfig};

pub use crate::domain::value_objects::{NamingConvention, Template};

/// One named asset group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Group name; drives the class name and generated file name
    pub name: String,

    /// Source directory, relative to the project root
    pub path: PathBuf,

    /// Explicit Dart class name (overrides the one derived from `name`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Globs a file must match (empty = every file)
    #[serde(default)]
    pub includes: Vec<String>,

    /// Globs that drop a file or directory; evaluated before `includes`
    #[serde(default)]
    pub excludes: Vec<String>,

    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,

    /// Allowed file extensions (`png`, `.svg`); empty = any
    #[serde(default)]
    pub types: Vec<String>,
}

impl GroupSpec {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            class_name: None,
            includes: Vec::new(),
            excludes: Vec::new(),
            recursive: false,
            types: Vec::new(),
        }
    }

    /// Check a file extension against `types` (case-insensitive).
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.types.is_empty()
            || self
                .types
                .iter()
                .any(|t| t.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }

    /// Source path as written in the config, `/`-separated, without a
    /// trailing slash or leading `./`.
    pub fn path_str(&self) -> String {
        normalize_rel(&self.path)
    }
}

/// Main configuration structure (`spider.yaml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory for generated Dart files, relative to the project root
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Barrel file / library name
    #[serde(default = "default_package")]
    pub package: String,

    #[serde(default)]
    pub naming_convention: NamingConvention,

    #[serde(default)]
    pub template: Template,

    #[serde(default)]
    pub class_prefix: String,

    #[serde(default)]
    pub class_suffix: String,

    /// Appended to identifiers that collide with Dart reserved words
    #[serde(default = "default_keyword_suffix")]
    pub keyword_suffix: String,

    /// Leading word for identifiers that would start with a digit
    #[serde(default = "default_digit_prefix")]
    pub digit_prefix: String,

    /// Scan files and directories whose name starts with `.`
    #[serde(default)]
    pub include_hidden: bool,

    /// Write a barrel file exporting every group
    #[serde(default = "default_true")]
    pub export: bool,

    /// Write a Dart test per group asserting every asset exists
    #[serde(default)]
    pub generate_tests: bool,

    /// Omit doc comments on generated constants
    #[serde(default)]
    pub no_comments: bool,

    /// Add a `values` list with every constant of the group
    #[serde(default)]
    pub use_references_list: bool,

    #[serde(default)]
    pub groups: Vec<GroupSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            package: default_package(),
            naming_convention: NamingConvention::default(),
            template: Template::default(),
            class_prefix: String::new(),
            class_suffix: String::new(),
            keyword_suffix: default_keyword_suffix(),
            digit_prefix: default_digit_prefix(),
            include_hidden: false,
            export: true,
            generate_tests: false,
            no_comments: false,
            use_references_list: false,
            groups: Vec::new(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("lib/resources")
}

fn default_package() -> String {
    "resources".to_string()
}

fn default_keyword_suffix() -> String {
    "_".to_string()
}

fn default_digit_prefix() -> String {
    "asset".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<LoadedConfig, ConfigError> {
        loader::load(path)
    }

    /// Dart class name for `group`
    pub fn class_name(&self, group: &GroupSpec) -> Option<String> {
        match &group.class_name {
            Some(explicit) => Some(explicit.clone()),
            None => class_name_for(
                &group.name,
                &self.class_prefix,
                &self.class_suffix,
                &self.digit_prefix,
            ),
        }
    }

    /// File stem of the generated Dart file for `group`
    pub fn file_stem(&self, group: &GroupSpec) -> Option<String> {
        file_stem_for(&group.name)
    }

    /// Output directory, `/`-separated
    pub fn output_str(&self) -> String {
        normalize_rel(&self.output)
    }

    /// Identifier options for `group`
    pub fn resolve_options(&self, class_name: &str) -> ResolveOptions {
        let mut options = ResolveOptions::new(self.naming_convention)
            .with_keyword_suffix(&self.keyword_suffix)
            .with_digit_prefix(&self.digit_prefix)
            .with_reserved(class_name);
        if self.use_references_list {
            options = options.with_reserved("values");
        }
        options
    }

    /// Rendering options
    pub fn render_context(&self, project_package: Option<String>) -> RenderContext {
        RenderContext {
            output_dir: self.output_str(),
            package: self.package.clone(),
            template: self.template,
            export: self.export,
            generate_tests: self.generate_tests,
            no_comments: self.no_comments,
            use_references_list: self.use_references_list,
            project_package,
        }
    }
}

/// Render a relative path with `/` separators, dropping `.` components and
/// trailing slashes.
pub(crate) fn normalize_rel(path: &Path) -> String {
    use std::path::Component;

    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // Paths are validated to stay inside the root, so `..` always
            // has a parent to cancel.
            Component::ParentDir if parts.last().is_some_and(|p| p != "..") => {
                parts.pop();
            }
            other => parts.push(other.as_os_str().to_string_lossy().into_owned()),
        }
    }
    parts.join("/")
}
