// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use crate::device::TargetDevice;
use crate::errors::{HostError, HostResult};
use crate::listing::LSBLK_BIN;
use crate::runner::HostRunner;

pub const DD_BIN: &str = "dd";
pub const SUDO_BIN: &str = "sudo";

/// Tools the pipeline shells out to.
pub const REQUIRED_TOOLS: &[&str] = &[LSBLK_BIN, DD_BIN, SUDO_BIN];

/// Bail early when a required host tool is not installed.
pub fn validate_host_tools() -> HostResult<()> {
    let missing: Vec<_> = REQUIRED_TOOLS
        .iter()
        .copied()
        .filter(|tool| which::which(tool).is_err())
        .collect();

    if !missing.is_empty() {
        return Err(HostError::ToolsMissing(missing.join(", ")));
    }
    Ok(())
}

/// The destructive raw-copy command, held as data until confirmed.
#[derive(Debug, Clone)]
pub struct DdCommand {
    iso: PathBuf,
    device: TargetDevice,
    block_size: String,
}

impl DdCommand {
    pub fn new(iso: &Path, device: TargetDevice, block_size: &str) -> Self {
        Self {
            iso: iso.to_path_buf(),
            device,
            block_size: block_size.to_string(),
        }
    }

    /// The exact line handed to the shell once confirmed. The trailing
    /// `sync` flushes the device before the line finishes.
    pub fn shell_line(&self) -> String {
        format!(
            "{} {} if='{}' of='{}' bs={} status=progress && sync",
            SUDO_BIN,
            DD_BIN,
            self.iso.display(),
            self.device.path(),
            self.block_size
        )
    }

    /// Execute the copy. No cancellation path once started; the copy runs
    /// to completion or fails on dd's own terms.
    pub fn run(&self, runner: &dyn HostRunner) -> HostResult<()> {
        runner.shell(&self.shell_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(device: &str) -> DdCommand {
        DdCommand::new(
            Path::new("/tmp/x.iso"),
            TargetDevice::parse(device).unwrap(),
            "4M",
        )
    }

    #[test]
    fn shell_line_shape() {
        let line = command("sdc").shell_line();
        assert!(line.contains("if='/tmp/x.iso'"));
        assert!(line.contains("of='/dev/sdc'"));
        assert!(line.contains("bs=4M"));
        assert!(line.ends_with("&& sync"));
    }

    #[test]
    fn shell_line_exact() {
        assert_eq!(
            command("sdc").shell_line(),
            "sudo dd if='/tmp/x.iso' of='/dev/sdc' bs=4M status=progress && sync"
        );
    }

    #[test]
    fn partition_target_never_reaches_the_line() {
        let line = command("sdb1").shell_line();
        assert!(line.contains("of='/dev/sdb'"));
        assert!(!line.contains("sdb1"));
    }
}
