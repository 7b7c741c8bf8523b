//! Configuration module for Spider
//!
//! A project is described by a single `spider.yaml` at its root. Loading
//! parses the file, collects warnings for unknown keys, and validates
//! group paths and names against the project directory.

mod loader;
mod types;

pub use crate::domain::value_objects::{ConfigWarning, NamingConvention, Template};

pub(crate) use types::normalize_rel;
pub use loader::{load, parse_with_warnings, validate, LoadedConfig, CONFIG_FILE};
pub use types::{Config, GroupSpec};
