//! Identifier casing convention.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Casing rule applied when deriving identifiers from file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NamingConvention {
    /// `logoDark`
    #[default]
    #[serde(rename = "camelCase", alias = "camel")]
    Camel,
    /// `logo_dark`
    #[serde(rename = "snake_case", alias = "snake")]
    Snake,
    /// `LogoDark`
    #[serde(rename = "PascalCase", alias = "pascal")]
    Pascal,
}

impl NamingConvention {
    /// Join already-split lowercase words according to this convention.
    pub fn join(&self, words: &[String]) -> String {
        match self {
            NamingConvention::Snake => words
                .iter()
                .map(|w| w.to_ascii_lowercase())
                .collect::<Vec<_>>()
                .join("_"),
            NamingConvention::Camel => words
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    if i == 0 {
                        w.to_ascii_lowercase()
                    } else {
                        capitalize(w)
                    }
                })
                .collect(),
            NamingConvention::Pascal => words.iter().map(|w| capitalize(w)).collect(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NamingConvention::Camel => "camelCase",
            NamingConvention::Snake => "snake_case",
            NamingConvention::Pascal => "PascalCase",
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn capitalize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn join_applies_each_convention() {
        let w = words(&["logo", "dark", "2x"]);
        assert_eq!(NamingConvention::Camel.join(&w), "logoDark2x");
        assert_eq!(NamingConvention::Snake.join(&w), "logo_dark_2x");
        assert_eq!(NamingConvention::Pascal.join(&w), "LogoDark2x");
    }

    #[test]
    fn join_normalizes_uppercase_words() {
        let w = words(&["HTML", "Parser"]);
        assert_eq!(NamingConvention::Camel.join(&w), "htmlParser");
        assert_eq!(NamingConvention::Pascal.join(&w), "HtmlParser");
    }

    #[test]
    fn serde_accepts_long_and_short_spellings() {
        let long: NamingConvention = serde_yaml_ng::from_str("snake_case").unwrap();
        let short: NamingConvention = serde_yaml_ng::from_str("snake").unwrap();
        assert_eq!(long, NamingConvention::Snake);
        assert_eq!(short, NamingConvention::Snake);

        let pascal: NamingConvention = serde_yaml_ng::from_str("PascalCase").unwrap();
        assert_eq!(pascal, NamingConvention::Pascal);
    }
}
