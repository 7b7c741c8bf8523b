//! Property tests for spider.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/identifiers.rs"]
mod identifiers;
