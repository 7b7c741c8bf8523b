//! Build command - run the generation pipeline once

use std::path::Path;

use anyhow::{Context, Result};
use spider::application::{BuildOptions, BuildUseCase};
use spider::config::{Config, LoadedConfig};
use spider::error::SpiderError;
use spider::infrastructure::{pubspec, FsScanner, LocalFs};

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::output::{print_config_warnings, render_warning};
use crate::ui::views::build as view;

pub fn cmd_build(config_path: &Path, check: bool, ui: &UiContext) -> Result<()> {
    let loaded = Config::load(config_path)
        .map_err(SpiderError::from)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    if ui.json {
        for warning in &loaded.warnings {
            json::emit(view::warning_json(&warning.to_string()))?;
        }
    } else {
        print_config_warnings(&loaded.warnings, ui.color, ui.unicode);
    }

    let options =
        BuildOptions::new().with_project_package(pubspec::read_package_name(&loaded.root));
    let mut use_case = BuildUseCase::new(FsScanner::new(), LocalFs::new());

    if check {
        run_check(&mut use_case, &loaded, &options, ui)
    } else {
        run_build(&mut use_case, &loaded, &options, ui)
    }
}

fn run_build(
    use_case: &mut BuildUseCase<FsScanner, LocalFs>,
    loaded: &LoadedConfig,
    options: &BuildOptions,
    ui: &UiContext,
) -> Result<()> {
    let report = use_case
        .execute(loaded, options)
        .context("Build failed; no files were written")?;

    print_warnings(&report.warnings, ui)?;
    if ui.json {
        json::emit(view::build_report_json(&report))?;
    } else {
        print!(
            "{}",
            view::render_build_report(&report, ui.verbose, ui.color, ui.unicode)
        );
    }
    Ok(())
}

fn run_check(
    use_case: &mut BuildUseCase<FsScanner, LocalFs>,
    loaded: &LoadedConfig,
    options: &BuildOptions,
    ui: &UiContext,
) -> Result<()> {
    let report = use_case.check(loaded, options).context("Check failed")?;

    print_warnings(&report.warnings, ui)?;
    if ui.json {
        json::emit(view::check_report_json(&report))?;
    } else {
        if ui.verbose > 0 {
            print!(
                "{}",
                view::render_identifiers(&report.groups, ui.color, ui.unicode)
            );
        }
        print!("{}", view::render_check_report(&report, ui.color, ui.unicode));
    }

    if !report.is_up_to_date() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_warnings(warnings: &[String], ui: &UiContext) -> Result<()> {
    for message in warnings {
        if ui.json {
            json::emit(view::warning_json(message))?;
        } else {
            eprintln!("{}", render_warning(message, ui.color, ui.unicode));
        }
    }
    Ok(())
}
