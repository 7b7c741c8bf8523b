//! Watch Use Case
//!
//! Rebuilds whenever a watched asset directory or `spider.yaml` changes.
//! It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (100ms quiet period)
//! - Config reload and re-registration of watched directories
//! - A full pipeline run per batch of changes
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(WatchOptions::new(config_path));
//! use_case.start(running, |event| { ... })?;
//! ```

mod event;
mod use_case;


pub use event::{WatchEvent, WatchOptions, WatcherState, DEBOUNCE_MS};
pub use use_case::WatchUseCase;
