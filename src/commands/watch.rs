//! Watch command - rebuild on every change until Ctrl+C

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use spider::application::{WatchEvent, WatchOptions, WatchUseCase};

use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header, timestamp};

pub fn cmd_watch(config_path: &Path, ui: &UiContext) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("Error setting Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(&config_path.display().to_string(), ui.color, ui.unicode)
        );
    }

    let ui = *ui;
    let use_case = WatchUseCase::new(WatchOptions::new(config_path.to_path_buf()));
    use_case
        .start(running, move |event| {
            if ui.json {
                println!("{}", event.to_json());
                return;
            }

            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            let rendered = render_watch_event(&timestamp(now), &event, ui.color, ui.unicode);
            match event {
                WatchEvent::Error { .. } | WatchEvent::Warning { .. } => eprint!("{rendered}"),
                _ => print!("{rendered}"),
            }
        })
        .with_context(|| format!("Failed to watch {}", config_path.display()))?;

    Ok(())
}
