//! Domain services
//!
//! Pure logic with no filesystem access: identifier derivation and Dart
//! source rendering.

pub mod dart;
pub mod emitter;
pub mod identifier;

pub use emitter::{render, RenderContext};
pub use identifier::{
    class_name_for, file_stem_for, resolve, resolve_names, split_words, ResolveOptions,
    ResolvedName, Unresolvable,
};
