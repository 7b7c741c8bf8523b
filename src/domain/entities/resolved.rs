//! Identifier resolution results

use super::AssetFile;

/// An asset file paired with the identifier generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentifier {
    pub file: AssetFile,
    pub identifier: String,
    /// 1 unless a numeric `_N` suffix was needed, then N
    pub sequence: u32,
}

/// A group after identifier resolution, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGroup {
    pub name: String,
    /// Dart class name for this group
    pub class_name: String,
    /// File name stem of the generated Dart file (`images` → `images.dart`)
    pub file_stem: String,
    pub entries: Vec<ResolvedIdentifier>,
}

impl ResolvedGroup {
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.identifier.as_str())
    }
}
