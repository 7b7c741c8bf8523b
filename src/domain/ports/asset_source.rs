//! AssetSource port - abstraction over directory scanning

use std::path::Path;

use crate::config::GroupSpec;
use crate::domain::entities::AssetGroup;
use crate::error::ScanError;

/// Produces the ordered file list of one asset group.
///
/// Implemented by `infrastructure::scanner::FsScanner`; tests can supply
/// fixed groups without touching the disk.
pub trait AssetSource {
    /// Scan `group` relative to the project `root`.
    fn scan(
        &self,
        root: &Path,
        group: &GroupSpec,
        include_hidden: bool,
    ) -> Result<AssetGroup, ScanError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_source_trait_is_object_safe() {
        fn _assert_object_safe(_: &dyn AssetSource) {}
    }
}
