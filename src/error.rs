//! Error types for Spider
//!
//! Every pipeline stage has its own error enum so callers can tell a
//! user-fixable configuration problem from a scan or write failure.
//! `SpiderError` unifies them for the orchestrator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Spider operations
pub type SpiderResult<T> = Result<T, SpiderError>;

/// Main error type for Spider operations
#[derive(Error, Debug)]
pub enum SpiderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Orchestration(#[from] OrchestrationError),
}

impl SpiderError {
    /// Short machine-readable category, used for NDJSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            SpiderError::Config(_) => "config",
            SpiderError::Scan(_) => "scan",
            SpiderError::Resolve(_) => "resolve",
            SpiderError::Emit(_) => "emit",
            SpiderError::Orchestration(_) => "orchestration",
        }
    }
}

/// Errors raised while loading and validating `spider.yaml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file does not exist
    #[error("config file not found: {path} (run `spider create` to scaffold one)")]
    NotFound { path: PathBuf },

    /// Malformed YAML or wrong value types
    #[error("invalid config in {file}: {message}")]
    ParseError { file: PathBuf, message: String },

    /// Group source directory or output directory is unusable
    #[error("invalid {context} path '{path}': {reason}")]
    InvalidPath {
        context: String,
        path: PathBuf,
        reason: String,
    },

    /// Two groups share a name (or would write the same file)
    #[error("duplicate group '{name}'")]
    DuplicateGroup { name: String },

    /// A value that parses but cannot be used
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// IO error while reading the config file
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while walking a group's source directory.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Source directory disappeared after validation
    #[error("group '{group}': source directory not found: {path}")]
    MissingPath { group: String, path: PathBuf },

    /// Symlink pointing back to one of its ancestor directories
    #[error("group '{group}': cyclic symlink {link} -> {target}")]
    CyclicPath {
        group: String,
        link: PathBuf,
        target: PathBuf,
    },

    /// Include or exclude pattern failed to compile
    #[error("group '{group}': {source}")]
    InvalidPattern {
        group: String,
        #[source]
        source: crate::domain::value_objects::GlobError,
    },

    /// Read error on a specific path
    #[error("group '{group}': failed to read {path}: {source}")]
    Io {
        group: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while deriving identifiers.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// No identifier can be derived from the file name
    #[error("cannot derive an identifier for {path}")]
    UnresolvableIdentifier { path: PathBuf },
}

/// Errors raised while writing generated files.
#[derive(Error, Debug)]
pub enum EmitError {
    /// Destination cannot be written
    #[error("failed to write {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the top-level commands.
#[derive(Error, Debug)]
pub enum OrchestrationError {
    /// `create` refuses to overwrite an existing config
    #[error("config file already exists: {path}")]
    ConfigExists { path: PathBuf },

    /// `create` could not write the config
    #[error("failed to create {path}: {source}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `watch` could not register the filesystem watcher
    #[error("failed to watch {path}: {message}")]
    WatchSetup { path: PathBuf, message: String },
}
