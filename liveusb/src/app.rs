// SPDX-License-Identifier: MIT

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use liveusb_host::errors::HostError;
use liveusb_host::{Config, DdCommand, HostRunner, TargetDevice, listing};

pub struct RunOptions {
    pub iso: PathBuf,
    pub device: Option<String>,
    pub dry_run: bool,
    pub assume_yes: bool,
}

/// Single-shot pipeline: check the ISO, list disks, resolve the target,
/// show the command, then execute or abort. No backward transitions.
pub fn run(
    options: &RunOptions,
    config: &Config,
    runner: &dyn HostRunner,
    input: &mut dyn BufRead,
) -> Result<()> {
    check_iso(&options.iso)?;

    crate::log_info!("Available disks:");
    listing::show_disks(runner)?;

    let device = resolve_device(options.device.as_deref(), config, runner)?;
    if device.is_partition() {
        crate::log_normal!(
            "'{}' is a partition, using whole device '{}'",
            device.given(),
            device.name()
        );
    }

    let command = DdCommand::new(&options.iso, device, &config.block_size);
    crate::log_normal!("Suggested dd command (not executed yet):");
    println!("{}", command.shell_line());

    if options.dry_run {
        crate::log_info!("Dry run, nothing was written.");
        return Ok(());
    }

    if options.assume_yes || confirm(input)? {
        crate::log_normal!("Running dd, this may take several minutes...");
        command.run(runner)?;
        crate::log_normal!("Done.");
    } else {
        crate::log_normal!("Aborted, no changes made.");
    }
    Ok(())
}

fn check_iso(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(HostError::IsoNotFound(path.to_path_buf()).into());
    }
    crate::log_verbose!("ISO file found: {}", path.display());
    Ok(())
}

fn resolve_device(
    explicit: Option<&str>,
    config: &Config,
    runner: &dyn HostRunner,
) -> Result<TargetDevice> {
    let token = match explicit {
        Some(token) => token.to_string(),
        None => {
            crate::log_info!("Auto-detecting a USB stick by typical removable sizes...");
            let disks = listing::capture_disks(runner)?;
            disks
                .detect_usb(&config.size_labels)
                .ok_or(HostError::NoDeviceResolved)?
                .to_string()
        }
    };
    Ok(TargetDevice::parse(&token)?)
}

fn confirm(input: &mut dyn BufRead) -> Result<bool> {
    print!("Proceed and run this command? [y/N]: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
