use std::path::{Path, PathBuf};

use spider::application::{BuildReport, CheckReport, GroupSummary};

use crate::ui::components::diff::render_unified_diff_with_line_numbers;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn display(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn display_all(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| display(p)).collect()
}

/// Per-group identifier listing shown with `-v`.
pub fn render_identifiers(groups: &[GroupSummary], color: bool, unicode: bool) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!(
            "{} {} ({})\n",
            Icon::Arrow.colored(color, unicode),
            ColoredText::info(group.class_name.as_str()).bold().render(color),
            group.name
        ));
        for (identifier, asset) in &group.identifiers {
            out.push_str(&format!(
                "    {identifier} {}\n",
                ColoredText::dim(format!("= {asset}")).render(color)
            ));
        }
    }
    out
}

pub fn render_build_report(report: &BuildReport, verbose: u8, color: bool, unicode: bool) -> String {
    let mut out = String::new();
    if verbose > 0 {
        out.push_str(&render_identifiers(&report.groups, color, unicode));
    }
    for path in &report.written {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Success.colored(color, unicode),
            display(path)
        ));
    }

    let summary = format!(
        "{} assets in {} groups: {} written, {} unchanged",
        report.asset_count(),
        report.groups.len(),
        report.written.len(),
        report.unchanged.len()
    );
    let summary = if report.has_changes() {
        ColoredText::success(summary)
    } else {
        ColoredText::dim(summary)
    };
    out.push_str(&format!(
        "{} {}\n",
        Icon::Build.colored(color, unicode),
        summary.render(color)
    ));
    out
}

pub fn build_report_json(report: &BuildReport) -> serde_json::Value {
    serde_json::json!({
        "event": "build_complete",
        "command": "build",
        "written": display_all(&report.written),
        "unchanged": display_all(&report.unchanged),
        "assets": report.asset_count(),
        "groups": groups_json(&report.groups),
    })
}

pub fn render_check_report(report: &CheckReport, color: bool, unicode: bool) -> String {
    let mut out = String::new();
    for stale in &report.stale {
        let path = display(&stale.path);
        let old = stale.actual.as_deref().unwrap_or("");
        out.push_str(&format!(
            "{} {}{}\n",
            Icon::Diff.colored(color, unicode),
            path,
            if stale.actual.is_none() { " (missing)" } else { "" }
        ));
        out.push_str(&render_unified_diff_with_line_numbers(
            &path,
            old,
            &stale.expected,
            color,
        ));
    }

    if report.is_up_to_date() {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Success.colored(color, unicode),
            ColoredText::success(format!(
                "{} generated files up to date",
                report.up_to_date.len()
            ))
            .render(color)
        ));
    } else {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Error.colored(color, unicode),
            ColoredText::error(format!(
                "{} generated files out of date; run `spider build`",
                report.stale.len()
            ))
            .render(color)
        ));
    }
    out
}

pub fn check_report_json(report: &CheckReport) -> serde_json::Value {
    let stale: Vec<String> = report.stale.iter().map(|s| display(&s.path)).collect();
    serde_json::json!({
        "event": "check_complete",
        "command": "build",
        "up_to_date": report.is_up_to_date(),
        "stale": stale,
        "current": display_all(&report.up_to_date),
    })
}

pub fn warning_json(message: &str) -> serde_json::Value {
    serde_json::json!({ "event": "warning", "message": message })
}

fn groups_json(groups: &[GroupSummary]) -> serde_json::Value {
    groups
        .iter()
        .map(|g| {
            let identifiers: serde_json::Map<String, serde_json::Value> = g
                .identifiers
                .iter()
                .map(|(id, asset)| (id.clone(), serde_json::json!(asset)))
                .collect();
            serde_json::json!({
                "name": g.name,
                "class": g.class_name,
                "identifiers": identifiers,
            })
        })
        .collect()
}
