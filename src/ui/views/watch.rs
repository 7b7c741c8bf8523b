use spider::application::WatchEvent;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_watch_header(
    config: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Spider Watch");
    header.add("Config", config);
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{timestamp}]");
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        WatchEvent::WatchStarted { watching, .. } => format!(
            "{prefix} {} Watching: {}\n",
            icon(Icon::Watch),
            watching.join(", ")
        ),
        WatchEvent::FileChanged { path } => {
            format!("{prefix} {} Changed: {path}\n", icon(Icon::Arrow))
        }
        WatchEvent::ConfigReloaded { watching } => format!(
            "{prefix} {} Config reloaded, watching: {}\n",
            icon(Icon::Watch),
            watching.join(", ")
        ),
        WatchEvent::BuildStarted => format!("{prefix} {} Building...\n", icon(Icon::Progress)),
        WatchEvent::BuildComplete {
            written,
            unchanged,
            assets,
        } => format!(
            "{prefix} {} Build: {assets} assets, {written} written, {unchanged} unchanged\n",
            icon(Icon::Success)
        ),
        WatchEvent::Warning { message } => {
            format!("{prefix} {} {message}\n", icon(Icon::Warning))
        }
        WatchEvent::Error { message, .. } => {
            format!("{prefix} {} Error: {message}\n", icon(Icon::Error))
        }
        WatchEvent::Shutdown => format!("\n{prefix} {} Watch stopped.\n", icon(Icon::Watch)),
    }
}

/// `HH:MM:SS` (UTC) for watch log lines.
pub fn timestamp(since_epoch: std::time::Duration) -> String {
    let secs = since_epoch.as_secs() % 86_400;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn renders_build_complete() {
        let event = WatchEvent::BuildComplete {
            written: 1,
            unchanged: 1,
            assets: 3,
        };
        assert_eq!(
            render_watch_event("12:00:00", &event, false, false),
            "[12:00:00] [OK] Build: 3 assets, 1 written, 1 unchanged\n"
        );
    }

    #[test]
    fn renders_error_message() {
        let event = WatchEvent::Error {
            kind: "scan".to_string(),
            message: "source directory not found".to_string(),
        };
        let rendered = render_watch_event("00:00:01", &event, false, true);
        assert_eq!(rendered, "[00:00:01] ✗ Error: source directory not found\n");
    }

    #[test]
    fn header_mentions_config() {
        let rendered = render_watch_header("spider.yaml", false, false);
        assert!(rendered.contains("[~] Spider Watch"));
        assert!(rendered.contains("Config: spider.yaml"));
    }

    #[test]
    fn timestamp_wraps_days() {
        assert_eq!(timestamp(Duration::from_secs(86_400 + 3_661)), "01:01:01");
    }
}
