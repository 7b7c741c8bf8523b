//! Spider - generates Dart constants for Flutter asset files
//!
//! A project describes its asset directories in `spider.yaml`. Spider scans
//! each directory, turns every file name into a unique Dart identifier and
//! writes one Dart class per group (plus an optional barrel and tests).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{BuildOptions, BuildReport, BuildUseCase, WatchEvent, WatchUseCase};
pub use config::{Config, GroupSpec, LoadedConfig};
pub use error::{SpiderError, SpiderResult};
pub use infrastructure::{FsScanner, LocalFs};
