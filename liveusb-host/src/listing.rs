// SPDX-License-Identifier: MIT

use crate::errors::HostResult;
use crate::runner::HostRunner;

pub const LSBLK_BIN: &str = "lsblk";

const LSBLK_COLUMNS: &str = "NAME,SIZE,TYPE,MOUNTPOINT";

fn lsblk_args() -> Vec<String> {
    vec!["-o".to_string(), LSBLK_COLUMNS.to_string()]
}

/// Stream the disk listing straight to the terminal for human inspection.
pub fn show_disks(runner: &dyn HostRunner) -> HostResult<()> {
    runner.stream(LSBLK_BIN, &lsblk_args())
}

/// Capture the disk listing for scanning.
pub fn capture_disks(runner: &dyn HostRunner) -> HostResult<DiskListing> {
    let output = runner.capture(LSBLK_BIN, &lsblk_args())?;
    Ok(DiskListing::new(output.stdout))
}

/// Raw columnar lsblk output (NAME SIZE TYPE MOUNTPOINT).
#[derive(Debug, Clone)]
pub struct DiskListing {
    raw: String,
}

impl DiskListing {
    pub fn new(raw: String) -> Self {
        Self { raw }
    }

    /// Scan for the first line that looks like a removable stick: the
    /// literal `disk` type plus one of the human-readable size labels.
    /// The first whitespace token of the winning line is the candidate
    /// device name.
    ///
    /// Substring matching against formatted sizes cannot tell a system
    /// disk whose size rounds to one of the labels from a genuine stick;
    /// enumeration order breaks ties. A known, accepted imprecision.
    pub fn detect_usb(&self, size_labels: &[String]) -> Option<&str> {
        self.raw
            .lines()
            .filter(|line| line.contains("disk"))
            .find(|line| size_labels.iter().any(|label| line.contains(label.as_str())))
            .and_then(|line| line.split_whitespace().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
NAME   SIZE TYPE MOUNTPOINT
sda    512G disk
sda1   512G part /
sde     59G disk
sde1    59G part /media/stick
";

    fn labels(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn detects_disk_line_with_known_size() {
        let listing = DiskListing::new(SAMPLE.to_string());
        assert_eq!(
            listing.detect_usb(&labels(&["8G", "16G", "32G", "59G", "64G"])),
            Some("sde")
        );
    }

    #[test]
    fn minimal_disk_line_matches() {
        let listing = DiskListing::new("sde 59G disk \n".to_string());
        assert_eq!(listing.detect_usb(&labels(&["59G"])), Some("sde"));
    }

    #[test]
    fn partition_lines_do_not_match() {
        // `sde1 59G part` carries a known label but not the `disk` type.
        let listing = DiskListing::new("sde1 59G part /media/stick\n".to_string());
        assert_eq!(listing.detect_usb(&labels(&["59G"])), None);
    }

    #[test]
    fn no_label_match_yields_none() {
        let listing = DiskListing::new(SAMPLE.to_string());
        assert_eq!(listing.detect_usb(&labels(&["128G"])), None);
    }

    #[test]
    fn first_match_wins() {
        let listing = DiskListing::new(
            "sdc 16G disk\nsde 59G disk\n".to_string(),
        );
        assert_eq!(listing.detect_usb(&labels(&["16G", "59G"])), Some("sdc"));
    }

    #[test]
    fn header_line_never_matches() {
        let listing = DiskListing::new("NAME SIZE TYPE MOUNTPOINT\n".to_string());
        assert_eq!(listing.detect_usb(&labels(&["8G"])), None);
    }
}
