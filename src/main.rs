//! Spider CLI - generates Dart constants for Flutter asset files
//!
//! Usage: spider <COMMAND>
//!
//! Commands:
//!   create  Write a default spider.yaml
//!   build   Generate Dart files once (--check to verify without writing)
//!   watch   Rebuild whenever assets or the config change

mod cli;
mod commands;
mod ui;

use clap::Parser;

use cli::{Cli, Commands};
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose);
    let config_path = cli.config_path();

    let result = match cli.command {
        Commands::Create => commands::create::cmd_create(&config_path, &ui),
        Commands::Build { check } => commands::build::cmd_build(&config_path, check, &ui),
        Commands::Watch => commands::watch::cmd_watch(&config_path, &ui),
    };

    if let Err(err) = result {
        ui::error::print_error(&err, ui.json, ui.color, ui.unicode);
        std::process::exit(1);
    }
}
