use spider::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Print unknown-key warnings to stderr.
pub fn print_config_warnings(warnings: &[ConfigWarning], color: bool, unicode: bool) {
    for warning in warnings {
        eprintln!("{}", render_warning(&warning.to_string(), color, unicode));
    }
}

pub fn render_warning(message: &str, color: bool, unicode: bool) -> String {
    format!(
        "{} {}",
        Icon::Warning.colored(color, unicode),
        ColoredText::warning(message).render(color)
    )
}
