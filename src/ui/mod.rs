//! Terminal and NDJSON output for the `spider` binary

pub mod blocks;
pub mod components;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
