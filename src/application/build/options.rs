//! Build Options

/// Options for one pipeline run
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// `name` from `pubspec.yaml`; used for imports in generated tests
    pub project_package: Option<String>,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project_package(mut self, package: Option<String>) -> Self {
        self.project_package = package;
        self
    }
}
