//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `scanner` - Directory walker producing asset groups
//! - `pubspec` - Reads the Dart package name from `pubspec.yaml`

pub mod fs;
pub mod pubspec;
pub mod scanner;

pub use fs::LocalFs;
pub use scanner::FsScanner;
