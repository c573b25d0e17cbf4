// SPDX-License-Identifier: MIT

use crate::errors::{HostError, HostResult};

/// A validated block-device token, split into the whole-disk name and an
/// optional partition suffix.
///
/// Writing an image to a partition node (`sdb1`) is usually invalid, so the
/// synthesized command only ever sees the whole-disk path. The suffix is
/// kept so callers can surface a notice before falling back to the parent
/// device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDevice {
    base: String,
    partition: Option<String>,
}

impl TargetDevice {
    /// Parse a raw token like `sdb` or `sdb1`.
    ///
    /// Accepted shape: one or more ASCII lowercase letters, then zero or
    /// more ASCII digits. Anything else is rejected, including
    /// `nvme0n1p1`-style names with mixed letter/digit groups — stripping
    /// those correctly needs scheme-specific rules, and rejecting is safer
    /// than guessing a wrong parent device.
    pub fn parse(token: &str) -> HostResult<Self> {
        let letters = token
            .chars()
            .take_while(|c| c.is_ascii_lowercase())
            .count();
        let digits = &token[letters..];
        if letters == 0 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(HostError::InvalidDeviceName(token.to_string()));
        }
        Ok(Self {
            base: token[..letters].to_string(),
            partition: (!digits.is_empty()).then(|| digits.to_string()),
        })
    }

    /// Whole-disk name, partition suffix stripped.
    pub fn name(&self) -> &str {
        &self.base
    }

    pub fn is_partition(&self) -> bool {
        self.partition.is_some()
    }

    /// The token as originally given.
    pub fn given(&self) -> String {
        match &self.partition {
            Some(digits) => format!("{}{}", self.base, digits),
            None => self.base.clone(),
        }
    }

    /// Device node path for the whole disk.
    pub fn path(&self) -> String {
        format!("/dev/{}", self.base)
    }
}
