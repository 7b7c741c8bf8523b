//! Watch Use Case implementation

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::build::{BuildOptions, BuildUseCase};
use crate::config::{Config, LoadedConfig};
use crate::error::{OrchestrationError, SpiderError, SpiderResult};
use crate::infrastructure::{pubspec, FsScanner, LocalFs};

use super::event::{WatchEvent, WatchOptions, WatcherState};

/// A directory registered with the watcher and whether it is watched
/// recursively.
pub(super) type WatchTarget = (PathBuf, bool);

/// How an incoming event path is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PathKind {
    Config,
    Asset,
    Ignored,
}

/// Watch Use Case
///
/// Orchestrates continuous file watching with automatic rebuilds.
/// This is the main entry point for the `spider watch` command.
pub struct WatchUseCase {
    options: WatchOptions,
}

impl WatchUseCase {
    pub fn new(options: WatchOptions) -> Self {
        Self { options }
    }

    /// Start watching (blocking)
    ///
    /// Returns an error only when setup fails (config cannot be loaded,
    /// watcher cannot be created). Later failures are reported through
    /// `on_event` and watching continues until `running` is cleared.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> SpiderResult<()>
    where
        F: Fn(WatchEvent),
    {
        let mut loaded = Config::load(&self.options.config_path)?;

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            notify::Config::default(),
        )
        .map_err(|e| OrchestrationError::WatchSetup {
            path: loaded.root.clone(),
            message: e.to_string(),
        })?;

        let mut watched = register(&mut watcher, &watch_targets(&loaded), &BTreeSet::new())?;

        on_event(WatchEvent::WatchStarted {
            config: self.options.config_path.display().to_string(),
            watching: display_targets(&loaded.root, &watched),
        });
        emit_config_warnings(&loaded, &on_event);

        rebuild(&loaded, &on_event);

        // notify sometimes reports pre-existing files right after
        // registration; drop that burst.
        let cooldown_end = Instant::now() + Duration::from_millis(300);
        while Instant::now() < cooldown_end && running.load(Ordering::SeqCst) {
            let _ = rx.recv_timeout(Duration::from_millis(50));
        }

        let mut state = WatcherState::new(self.options.debounce);

        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
                let path = normalize_event_path(&path);
                match classify(&loaded, &path) {
                    PathKind::Config => state.add_config_change(path),
                    PathKind::Asset => state.add_change(path),
                    PathKind::Ignored => {}
                }
            }

            if !state.should_sync() {
                continue;
            }

            let (changes, config_changed) = state.take_changes();
            for path in &changes {
                on_event(WatchEvent::FileChanged {
                    path: display_path(&loaded.root, path),
                });
            }

            if config_changed {
                let reloaded = Config::load(&self.options.config_path)
                    .map_err(SpiderError::from)
                    .and_then(|new| {
                        let targets = watch_targets(&new);
                        let now_watched = register(&mut watcher, &targets, &watched)?;
                        Ok((new, now_watched))
                    });
                match reloaded {
                    Ok((new, now_watched)) => {
                        loaded = new;
                        watched = now_watched;
                        on_event(WatchEvent::ConfigReloaded {
                            watching: display_targets(&loaded.root, &watched),
                        });
                        emit_config_warnings(&loaded, &on_event);
                    }
                    Err(e) => {
                        // Keep building with the last good config.
                        on_event(error_event(&e));
                        continue;
                    }
                }
            }

            rebuild(&loaded, &on_event);
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }
}

/// Run the pipeline once, reporting through `on_event`.
fn rebuild(loaded: &LoadedConfig, on_event: &impl Fn(WatchEvent)) {
    on_event(WatchEvent::BuildStarted);

    let options =
        BuildOptions::new().with_project_package(pubspec::read_package_name(&loaded.root));
    let mut use_case = BuildUseCase::new(FsScanner::new(), LocalFs::new());

    match use_case.execute(loaded, &options) {
        Ok(report) => {
            for message in &report.warnings {
                on_event(WatchEvent::Warning {
                    message: message.clone(),
                });
            }
            on_event(WatchEvent::BuildComplete {
                written: report.written.len(),
                unchanged: report.unchanged.len(),
                assets: report.asset_count(),
            });
        }
        Err(e) => on_event(error_event(&e)),
    }
}

fn emit_config_warnings(loaded: &LoadedConfig, on_event: &impl Fn(WatchEvent)) {
    for warning in &loaded.warnings {
        on_event(WatchEvent::Warning {
            message: warning.to_string(),
        });
    }
}

fn error_event(err: &SpiderError) -> WatchEvent {
    WatchEvent::Error {
        kind: err.kind().to_string(),
        message: err.to_string(),
    }
}

/// Directories to watch: the project root (for `spider.yaml`) and every
/// group source directory.
pub(super) fn watch_targets(loaded: &LoadedConfig) -> BTreeSet<WatchTarget> {
    let mut targets: Vec<WatchTarget> = vec![(loaded.root.clone(), false)];
    for group in &loaded.config.groups {
        let dir = loaded.root.join(&group.path);
        let dir = dir.canonicalize().unwrap_or(dir);
        targets.push((dir, group.recursive));
    }

    // One registration per directory, recursive if any group needs it.
    let mut merged: BTreeSet<WatchTarget> = BTreeSet::new();
    for (dir, recursive) in targets {
        let recursive = recursive || merged.contains(&(dir.clone(), true));
        merged.remove(&(dir.clone(), false));
        merged.insert((dir, recursive));
    }
    merged
}

/// Bring the watcher from `current` to `targets`.
fn register(
    watcher: &mut RecommendedWatcher,
    targets: &BTreeSet<WatchTarget>,
    current: &BTreeSet<WatchTarget>,
) -> Result<BTreeSet<WatchTarget>, OrchestrationError> {
    for (dir, _) in current.difference(targets) {
        let _ = watcher.unwatch(dir);
    }
    for (dir, recursive) in targets.difference(current) {
        let mode = if *recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher
            .watch(dir, mode)
            .map_err(|e| OrchestrationError::WatchSetup {
                path: dir.clone(),
                message: e.to_string(),
            })?;
    }
    Ok(targets.clone())
}

/// Decide whether an event path triggers a rebuild.
pub(super) fn classify(loaded: &LoadedConfig, path: &Path) -> PathKind {
    let root = &loaded.root;
    let config_name = loaded.path.file_name();

    if path.parent() == Some(root.as_path()) && path.file_name() == config_name {
        return PathKind::Config;
    }

    let output = root.join(&loaded.config.output);
    if path.starts_with(&output) {
        return PathKind::Ignored;
    }
    if loaded.config.generate_tests && path.starts_with(root.join("test")) {
        return PathKind::Ignored;
    }

    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.') || n.ends_with('~'));
    if hidden && !loaded.config.include_hidden {
        return PathKind::Ignored;
    }

    let in_group = loaded.config.groups.iter().any(|g| {
        let dir = root.join(&g.path);
        path.starts_with(dir.canonicalize().unwrap_or(dir))
    });
    if in_group {
        PathKind::Asset
    } else {
        PathKind::Ignored
    }
}

/// Canonicalize an event path; deleted files fall back to their
/// canonical parent.
fn normalize_event_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    match (path.parent().map(Path::canonicalize), path.file_name()) {
        (Some(Ok(parent)), Some(name)) => parent.join(name),
        _ => path.to_path_buf(),
    }
}

fn display_path(root: &Path, path: &Path) -> String {
    let shown = path.strip_prefix(root).unwrap_or(path);
    let text = shown.to_string_lossy().replace('\\', "/");
    if text.is_empty() {
        ".".to_string()
    } else {
        text
    }
}

fn display_targets(root: &Path, targets: &BTreeSet<WatchTarget>) -> Vec<String> {
    targets
        .iter()
        .map(|(dir, _)| display_path(root, dir))
        .collect()
}
