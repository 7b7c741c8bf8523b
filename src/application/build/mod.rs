//! Build Module
//!
//! Runs the generation pipeline once: scan every group, resolve
//! identifiers, render Dart sources, then write them.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`BuildOptions`)
//! - `result` - Result types (`BuildReport`, `CheckReport`, `GroupSummary`)
//! - `use_case` - Core use case logic (`BuildUseCase`, `PipelineStage`)

mod options;
mod result;
mod use_case;

pub use options::BuildOptions;
pub use result::{BuildPlan, BuildReport, CheckReport, GroupSummary, StaleFile};
pub use use_case::{BuildUseCase, PipelineStage};
