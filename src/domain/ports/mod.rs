//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_source;
pub mod file_system;

pub use asset_source::AssetSource;
pub use file_system::FileSystem;
