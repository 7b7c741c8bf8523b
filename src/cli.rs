use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Spider - generates Dart constants for Flutter asset files
#[derive(Parser, Debug)]
#[command(name = "spider")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v lists every generated identifier)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long = "project", global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Config file, relative to the project directory
    #[arg(long, global = true, default_value = spider::config::CONFIG_FILE, value_name = "FILE")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default spider.yaml
    Create,

    /// Generate Dart files once
    Build {
        /// Compare generated files with what is on disk; write nothing
        #[arg(long)]
        check: bool,
    },

    /// Rebuild whenever assets or the config change
    Watch,
}

impl Cli {
    /// Where the config file lives, after applying `--project`.
    pub fn config_path(&self) -> PathBuf {
        match &self.project {
            Some(dir) if self.config.is_relative() => dir.join(&self.config),
            _ => self.config.clone(),
        }
    }
}
