use clap::Parser;
use std::path::PathBuf;

use crate::launch_config::LaunchConfig;
use crate::presets::DEFAULT_PRESET;

#[derive(Parser, Debug)]
#[command(name = "ssl4eo-launch")]
#[command(about = "Launch download_ssl4eo.py with a satellite download configuration")]
#[command(version)]
pub struct Args {
    /// Built-in configuration to start from
    #[arg(short, long, default_value = DEFAULT_PRESET, value_name = "ID")]
    pub preset: String,

    /// TOML configuration file (replaces the preset)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory the downloader path is resolved against (default: executable's directory)
    #[arg(long, value_name = "DIR")]
    pub install_dir: Option<PathBuf>,

    /// Override the output directory
    #[arg(long, value_name = "DIR")]
    pub save_path: Option<String>,

    /// Override the sampled locations file
    #[arg(long, value_name = "FILE")]
    pub match_file: Option<String>,

    /// Override the first location index
    #[arg(long, value_name = "N")]
    pub start_index: Option<u64>,

    /// Override the last location index
    #[arg(long, value_name = "N")]
    pub end_index: Option<u64>,

    /// Override the downloader's worker count
    #[arg(long, value_name = "N")]
    pub num_workers: Option<u32>,

    /// Override the interpreter used to run the downloader
    #[arg(long, value_name = "PROGRAM")]
    pub interpreter: Option<String>,

    /// Override the downloader script path
    #[arg(long, value_name = "FILE")]
    pub downloader: Option<String>,

    /// Do not pass --debug to the downloader
    #[arg(long)]
    pub no_debug: bool,

    /// Print the resolved command line as JSON instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Record the resolved invocation as JSON before running
    #[arg(long, value_name = "FILE")]
    pub write_plan: Option<PathBuf>,

    /// Run a plan recorded with --write-plan instead of building one
    #[arg(long, value_name = "FILE", conflicts_with_all = ["config", "write_plan", "write_config"])]
    pub plan: Option<PathBuf>,

    /// Write the effective configuration as TOML and exit
    #[arg(long, value_name = "FILE")]
    pub write_config: Option<PathBuf>,

    /// List built-in presets and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply_overrides(self: &Self, config: &mut LaunchConfig) {
        if let Some(save_path) = &self.save_path {
            config.paths.save_path = save_path.clone();
        }
        if let Some(match_file) = &self.match_file {
            config.paths.match_file = match_file.clone();
        }
        if let Some(interpreter) = &self.interpreter {
            config.paths.interpreter = interpreter.clone();
        }
        if let Some(downloader) = &self.downloader {
            config.paths.downloader = downloader.clone();
        }
        if let Some(start_index) = self.start_index {
            config.execution.start_index = start_index;
        }
        if let Some(end_index) = self.end_index {
            config.execution.end_index = end_index;
        }
        if let Some(num_workers) = self.num_workers {
            config.execution.num_workers = num_workers;
        }
        if self.no_debug {
            config.execution.debug = false;
        }
    }
}
