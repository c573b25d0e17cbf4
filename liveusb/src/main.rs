// liveusb/src/main.rs

mod app;
mod utils;

use anyhow::Result;
use clap::Parser;
use liveusb_host::{Config, SystemRunner, flash};
use std::io;
use std::path::PathBuf;

use crate::app::RunOptions;
use crate::utils::{LogLevel, set_log_level};

/// Suggest and optionally run a raw dd copy of an ISO image onto a USB
/// block device.
#[derive(Parser, Debug)]
#[command(name = "liveusb", version, about, long_about = None)]
struct Cli {
    /// Path to the ISO image to write
    iso: PathBuf,

    /// Target device name, e.g. sdb. Auto-detected by size when omitted.
    device: Option<String>,

    /// Config TOML overriding block size and detection size labels
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show the dd command without prompting or executing
    #[arg(long)]
    dry_run: bool,

    /// Skip the confirmation prompt and execute immediately
    #[arg(short = 'y', long)]
    yes: bool,

    /// Only print the suggested command and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print extra detail, including the effective config
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    set_log_level(if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    });

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if cli.verbose {
        config.print_summary();
    }

    flash::validate_host_tools()?;

    let options = RunOptions {
        iso: cli.iso,
        device: cli.device,
        dry_run: cli.dry_run,
        assume_yes: cli.yes,
    };

    let stdin = io::stdin();
    app::run(&options, &config, &SystemRunner, &mut stdin.lock())
}
