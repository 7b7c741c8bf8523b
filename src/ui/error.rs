use spider::error::SpiderError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Report a fatal error: an NDJSON `error` event on stdout in JSON mode,
/// otherwise a line on stderr.
pub fn print_error(err: &anyhow::Error, json: bool, color: bool, unicode: bool) {
    if json {
        let _ = crate::ui::json::emit(error_json(err));
        return;
    }
    eprintln!("{}", render_error(err, color, unicode));
}

fn error_kind(err: &anyhow::Error) -> &'static str {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<SpiderError>())
        .map(SpiderError::kind)
        .unwrap_or("internal")
}

fn error_json(err: &anyhow::Error) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "kind": error_kind(err),
        "message": format!("{err:#}"),
    })
}

fn render_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    format!(
        "{} {}",
        Icon::Error.colored(color, unicode),
        ColoredText::error(format!("{err:#}")).render(color)
    )
}
