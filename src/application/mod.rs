//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `create_config` - Scaffolds the default `spider.yaml`
//! - `BuildUseCase` - Scan, resolve, render and write (or check) once
//! - `WatchUseCase` - Rebuild on every filesystem change

pub mod build;
pub mod create;
pub mod watch;

pub use build::{
    BuildOptions, BuildPlan, BuildReport, BuildUseCase, CheckReport, GroupSummary, PipelineStage,
    StaleFile,
};
pub use create::{create_config, DEFAULT_CONFIG};
pub use watch::{WatchEvent, WatchOptions, WatchUseCase, WatcherState, DEBOUNCE_MS};
