//! Domain Layer
//!
//! Pure types and logic of the generator: scanned assets, identifier
//! derivation and Dart rendering. I/O sits behind the traits in `ports`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
