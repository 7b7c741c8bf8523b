//! Output template selection.

use serde::{Deserialize, Serialize};

/// Shape of the generated Dart constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// `static const String logo = 'assets/logo.png';`
    #[default]
    Plain,
    /// `static const AssetImage logo = AssetImage('assets/logo.png');`
    Typed,
}

impl Template {
    /// Dart type of every generated constant.
    pub fn constant_type(&self) -> &'static str {
        match self {
            Template::Plain => "String",
            Template::Typed => "AssetImage",
        }
    }
}
