//! Watch event types and options

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Path to `spider.yaml`
    pub config_path: PathBuf,
    /// Quiet period after the last change before rebuilding
    pub debounce: Duration,
}

impl WatchOptions {
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            config_path,
            debounce: Duration::from_millis(DEBOUNCE_MS),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted {
        config: String,
        watching: Vec<String>,
    },
    /// File changed
    FileChanged { path: String },
    /// `spider.yaml` was reloaded
    ConfigReloaded { watching: Vec<String> },
    /// Build started
    BuildStarted,
    /// Build completed
    BuildComplete {
        written: usize,
        unchanged: usize,
        assets: usize,
    },
    /// Non-fatal problem (unknown config key, empty group)
    Warning { message: String },
    /// Error occurred; watching continues
    Error { kind: String, message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Watcher state for debouncing
#[derive(Debug)]
pub struct WatcherState {
    pending_changes: BTreeSet<PathBuf>,
    config_changed: bool,
    last_change: Option<Instant>,
    debounce: Duration,
}

impl Default for WatcherState {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_MS))
    }
}

impl WatcherState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            pending_changes: BTreeSet::new(),
            config_changed: false,
            last_change: None,
            debounce,
        }
    }

    /// Add a file change to pending changes
    pub fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    /// Record a change to the config file
    pub fn add_config_change(&mut self, path: PathBuf) {
        self.config_changed = true;
        self.add_change(path);
    }

    /// Check if debounce period has passed and we have pending changes
    pub fn should_sync(&self) -> bool {
        match self.last_change {
            Some(last) => !self.pending_changes.is_empty() && last.elapsed() >= self.debounce,
            None => false,
        }
    }

    /// Take all pending changes (sorted) and whether the config changed,
    /// resetting state
    pub fn take_changes(&mut self) -> (Vec<PathBuf>, bool) {
        let changes: Vec<_> = std::mem::take(&mut self.pending_changes)
            .into_iter()
            .collect();
        let config_changed = std::mem::replace(&mut self.config_changed, false);
        self.last_change = None;
        (changes, config_changed)
    }

    /// Check if there are pending changes
    pub fn has_pending(&self) -> bool {
        !self.pending_changes.is_empty()
    }
}
