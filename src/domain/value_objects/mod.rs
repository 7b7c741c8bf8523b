//! Domain value objects
//!
//! Small immutable types shared by the config loader, the scanner and
//! the code emitter.

mod config_warning;
mod glob_patterns;
mod naming_convention;
mod template;

pub use config_warning::ConfigWarning;
pub use glob_patterns::{GlobError, GlobPatterns};
pub use naming_convention::NamingConvention;
pub use template::Template;
