//! Create command - scaffold a default `spider.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use spider::application::create_config;
use spider::error::SpiderError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_create(config_path: &Path, ui: &UiContext) -> Result<()> {
    create_config(config_path)
        .map_err(SpiderError::from)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "created",
            "command": "create",
            "path": config_path.display().to_string(),
        }))?;
    } else {
        println!(
            "{} Created {}",
            Icon::Success.colored(ui.color, ui.unicode),
            config_path.display()
        );
    }
    Ok(())
}
