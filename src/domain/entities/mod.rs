//! Domain entities
//!
//! Everything here is rebuilt from scratch on each scan; nothing is
//! cached between runs.

mod asset;
mod generated_file;
mod resolved;

pub use asset::{AssetFile, AssetGroup};
pub use generated_file::GeneratedFile;
pub use resolved::{ResolvedGroup, ResolvedIdentifier};
