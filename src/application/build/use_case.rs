//! Build Use Case
//!
//! Orchestrates one generation run:
//! 1. Scan every group (`AssetSource`)
//! 2. Resolve identifiers per group
//! 3. Render all Dart files in memory
//! 4. Write them (`FileSystem`), skipping files that are already current
//!
//! Nothing is written unless steps 1-3 succeed for every group.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::LoadedConfig;
use crate::domain::entities::{AssetGroup, GeneratedFile, ResolvedGroup};
use crate::domain::ports::{AssetSource, FileSystem};
use crate::domain::services::{emitter, identifier};
use crate::error::{ConfigError, EmitError, SpiderResult};

use super::options::BuildOptions;
use super::result::{BuildPlan, BuildReport, CheckReport, GroupSummary, StaleFile};

/// Where the pipeline currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Idle,
    Scanning,
    Resolving,
    Emitting,
    Done,
    Failed,
}

/// Build use case - runs the generation pipeline
///
/// Parameterized by its ports so tests can run it against in-memory
/// groups and files.
pub struct BuildUseCase<AS, FS>
where
    AS: AssetSource,
    FS: FileSystem,
{
    source: AS,
    file_system: FS,
    stage: PipelineStage,
}

impl<AS, FS> BuildUseCase<AS, FS>
where
    AS: AssetSource,
    FS: FileSystem,
{
    pub fn new(source: AS, file_system: FS) -> Self {
        Self {
            source,
            file_system,
            stage: PipelineStage::Idle,
        }
    }

    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Scan, resolve and render without touching the output.
    pub fn plan(&mut self, loaded: &LoadedConfig, options: &BuildOptions) -> SpiderResult<BuildPlan> {
        let result = self.build_plan(loaded, options);
        self.finish(&result);
        result
    }

    /// Run the full pipeline and write every generated file.
    pub fn execute(
        &mut self,
        loaded: &LoadedConfig,
        options: &BuildOptions,
    ) -> SpiderResult<BuildReport> {
        let result = self
            .build_plan(loaded, options)
            .and_then(|plan| self.write_plan(&loaded.root, plan));
        self.finish(&result);
        result
    }

    /// Render and compare against what is on disk, writing nothing.
    pub fn check(
        &mut self,
        loaded: &LoadedConfig,
        options: &BuildOptions,
    ) -> SpiderResult<CheckReport> {
        let result = self.build_plan(loaded, options).map(|plan| {
            let mut report = CheckReport {
                warnings: plan.warnings(),
                groups: plan.groups,
                ..CheckReport::default()
            };
            for file in plan.files {
                let absolute = loaded.root.join(file.path());
                let actual = self.file_system.read(&absolute).ok();
                if actual.as_deref() == Some(file.contents()) {
                    report.up_to_date.push(file.path().to_path_buf());
                } else {
                    report.stale.push(StaleFile {
                        path: file.path().to_path_buf(),
                        expected: file.contents().to_string(),
                        actual,
                    });
                }
            }
            report
        });
        self.finish(&result);
        result
    }

    fn finish<T>(&mut self, result: &SpiderResult<T>) {
        self.stage = match result {
            Ok(_) => PipelineStage::Done,
            Err(_) => PipelineStage::Failed,
        };
    }

    fn build_plan(&mut self, loaded: &LoadedConfig, options: &BuildOptions) -> SpiderResult<BuildPlan> {
        let config = &loaded.config;

        self.stage = PipelineStage::Scanning;
        let scanned: Vec<AssetGroup> = config
            .groups
            .iter()
            .map(|spec| self.source.scan(&loaded.root, spec, config.include_hidden))
            .collect::<Result<_, _>>()?;

        self.stage = PipelineStage::Resolving;
        let mut resolved = Vec::with_capacity(scanned.len());
        let mut groups = Vec::with_capacity(scanned.len());
        for (spec, group) in config.groups.iter().zip(scanned) {
            let class_name = config
                .class_name(spec)
                .ok_or_else(|| unusable_name(&spec.name, "class name"))?;
            let file_stem = config
                .file_stem(spec)
                .ok_or_else(|| unusable_name(&spec.name, "file name"))?;

            let options = config.resolve_options(&class_name);
            let entries = identifier::resolve(&group, &options)?;

            let group_resolved = ResolvedGroup {
                name: spec.name.clone(),
                class_name,
                file_stem,
                entries,
            };
            groups.push(GroupSummary::from_resolved(&group_resolved, group.skipped));
            resolved.push(group_resolved);
        }

        self.stage = PipelineStage::Emitting;
        let ctx = config.render_context(options.project_package.clone());
        let files = emitter::render(&resolved, &ctx);

        Ok(BuildPlan { groups, files })
    }

    fn write_plan(&self, root: &Path, plan: BuildPlan) -> SpiderResult<BuildReport> {
        let mut report = BuildReport {
            warnings: plan.warnings(),
            groups: plan.groups,
            ..BuildReport::default()
        };
        for file in &plan.files {
            if self.write_file(root, file)? {
                report.written.push(file.path().to_path_buf());
            } else {
                report.unchanged.push(file.path().to_path_buf());
            }
        }
        Ok(report)
    }

    /// Returns `false` when the file already holds `file`'s contents.
    fn write_file(&self, root: &Path, file: &GeneratedFile) -> Result<bool, EmitError> {
        let absolute: PathBuf = root.join(file.path());
        if let Ok(current) = self.file_system.read(&absolute) {
            if current == file.contents() {
                return Ok(false);
            }
        }
        self.file_system
            .write_atomic(&absolute, file.contents())
            .map_err(|source| EmitError::WriteFailure {
                path: absolute.clone(),
                source,
            })?;
        Ok(true)
    }
}

fn unusable_name(group: &str, what: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: "groups.name".to_string(),
        message: format!("'{group}' does not produce a {what}"),
    }
}
