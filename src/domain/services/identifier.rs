//! Identifier derivation and collision resolution
//!
//! Maps an ordered list of file names to Dart identifiers:
//! 1. split the stem into words (separators and case boundaries)
//! 2. join the words with the configured convention
//! 3. prefix identifiers that would start with a digit
//! 4. suffix reserved words
//! 5. resolve collisions: extension-qualify first, then `_N` in scan order
//!
//! `resolve_names` is pure and deterministic; the same input always
//! produces the same names.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{AssetGroup, ResolvedIdentifier};
use crate::domain::value_objects::NamingConvention;
use crate::error::ResolveError;

use super::dart;

/// Options controlling identifier generation for one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    pub convention: NamingConvention,
    /// Appended to identifiers that collide with a reserved word
    pub keyword_suffix: String,
    /// Leading word for identifiers that would start with a digit
    pub digit_prefix: String,
    /// Names reserved in addition to Dart keywords (e.g. the class name)
    pub reserved: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::new(NamingConvention::default())
    }
}

impl ResolveOptions {
    pub fn new(convention: NamingConvention) -> Self {
        Self {
            convention,
            keyword_suffix: "_".to_string(),
            digit_prefix: "asset".to_string(),
            reserved: Vec::new(),
        }
    }

    pub fn with_keyword_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.keyword_suffix = suffix.into();
        self
    }

    pub fn with_digit_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.digit_prefix = prefix.into();
        self
    }

    pub fn with_reserved(mut self, name: impl Into<String>) -> Self {
        self.reserved.push(name.into());
        self
    }

    fn is_reserved(&self, ident: &str) -> bool {
        dart::is_reserved(ident) || self.reserved.iter().any(|r| r == ident)
    }
}

/// Identifier chosen for one input name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub identifier: String,
    /// 1 unless a numeric suffix was appended, then the suffix value
    pub sequence: u32,
}

/// Input at `index` has no usable characters in its stem or extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unresolvable {
    pub index: usize,
}

/// Split a raw name into words.
///
/// Any character outside `[A-Za-z0-9]` separates words. Inside a run of
/// alphanumerics a new word starts at a lowercase→uppercase or
/// digit→uppercase transition, and before the last capital of an
/// uppercase run followed by lowercase (`HTMLParser` → `HTML`, `Parser`).
pub fn split_words(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars
                .get(i + 1)
                .is_some_and(|n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Join `words` into an identifier, prefixing it when it would start with
/// a digit and suffixing it when it is reserved.
fn build_identifier(words: &[String], options: &ResolveOptions) -> String {
    let starts_with_digit = words
        .first()
        .and_then(|w| w.chars().next())
        .is_some_and(|c| c.is_ascii_digit());

    let ident = if starts_with_digit {
        let mut prefixed = Vec::with_capacity(words.len() + 1);
        prefixed.push(options.digit_prefix.clone());
        prefixed.extend(words.iter().cloned());
        options.convention.join(&prefixed)
    } else {
        options.convention.join(words)
    };

    if options.is_reserved(&ident) {
        format!("{}{}", ident, options.keyword_suffix)
    } else {
        ident
    }
}

/// Resolve an ordered list of `(stem, extension)` pairs to unique identifiers.
///
/// Files sharing a base identifier (compared case-insensitively) are
/// qualified with their extension (`logo.png` → `logoPng`). Any names
/// still colliding keep scan order: the first occurrence keeps the name,
/// later ones get the smallest free `_N` suffix with N ≥ 2.
pub fn resolve_names(
    names: &[(&str, &str)],
    options: &ResolveOptions,
) -> Result<Vec<ResolvedName>, Unresolvable> {
    struct Candidate {
        base_words: Vec<String>,
        ext_words: Vec<String>,
        from_stem: bool,
        base: String,
    }

    let mut candidates = Vec::with_capacity(names.len());
    for (index, (stem, extension)) in names.iter().enumerate() {
        let stem_words = split_words(stem);
        let ext_words = split_words(extension);
        let from_stem = !stem_words.is_empty();
        let base_words = if from_stem {
            stem_words
        } else if !ext_words.is_empty() {
            ext_words.clone()
        } else {
            return Err(Unresolvable { index });
        };
        let base = build_identifier(&base_words, options);
        candidates.push(Candidate {
            base_words,
            ext_words,
            from_stem,
            base,
        });
    }

    let mut base_counts: HashMap<String, usize> = HashMap::new();
    for c in &candidates {
        *base_counts.entry(c.base.to_ascii_lowercase()).or_default() += 1;
    }

    // Pass 1: extension-qualify every file whose base name is shared.
    let qualified: Vec<String> = candidates
        .iter()
        .map(|c| {
            let shared = base_counts[&c.base.to_ascii_lowercase()] > 1;
            if shared && c.from_stem && !c.ext_words.is_empty() {
                let mut words = c.base_words.clone();
                words.extend(c.ext_words.iter().cloned());
                build_identifier(&words, options)
            } else {
                c.base.clone()
            }
        })
        .collect();

    // Pass 2: numeric suffixes, in scan order.
    let all_candidates: HashSet<String> =
        qualified.iter().map(|q| q.to_ascii_lowercase()).collect();
    let mut used: HashSet<String> = HashSet::with_capacity(qualified.len());
    let mut resolved = Vec::with_capacity(qualified.len());

    for ident in qualified {
        if used.insert(ident.to_ascii_lowercase()) {
            resolved.push(ResolvedName {
                identifier: ident,
                sequence: 1,
            });
            continue;
        }

        let mut n: u32 = 2;
        loop {
            let suffixed = format!("{ident}_{n}");
            let key = suffixed.to_ascii_lowercase();
            if !all_candidates.contains(&key) && !used.contains(&key) {
                used.insert(key);
                resolved.push(ResolvedName {
                    identifier: suffixed,
                    sequence: n,
                });
                break;
            }
            n += 1;
        }
    }

    Ok(resolved)
}

/// Resolve every file of `group` to an identifier.
pub fn resolve(
    group: &AssetGroup,
    options: &ResolveOptions,
) -> Result<Vec<ResolvedIdentifier>, ResolveError> {
    let names: Vec<(&str, &str)> = group
        .files
        .iter()
        .map(|f| (f.stem(), f.extension()))
        .collect();

    let resolved = resolve_names(&names, options).map_err(|u| {
        ResolveError::UnresolvableIdentifier {
            path: group.files[u.index].absolute_path().to_path_buf(),
        }
    })?;

    Ok(group
        .files
        .iter()
        .zip(resolved)
        .map(|(file, name)| ResolvedIdentifier {
            file: file.clone(),
            identifier: name.identifier,
            sequence: name.sequence,
        })
        .collect())
}

/// Derive a Dart class name from a group name (`app icons` → `AppIcons`).
pub fn class_name_for(group_name: &str, prefix: &str, suffix: &str, digit_prefix: &str) -> Option<String> {
    let words = split_words(group_name);
    if words.is_empty() {
        return None;
    }
    let options = ResolveOptions::new(NamingConvention::Pascal).with_digit_prefix(digit_prefix);
    let core = build_identifier(&words, &options);
    Some(format!("{prefix}{core}{suffix}"))
}

/// Derive the generated file stem from a group name (`App Icons` → `app_icons`).
pub fn file_stem_for(group_name: &str) -> Option<String> {
    let words = split_words(group_name);
    if words.is_empty() {
        return None;
    }
    Some(NamingConvention::Snake.join(&words))
}

#[cfg(test)]
mod tests;
