// SPDX-License-Identifier: MIT

use core::fmt;
use std::path::PathBuf;

/// Unified error type for the pipeline steps. User abort is not an error
/// and never appears here.
#[derive(Debug)]
pub enum HostError {
    IsoNotFound(PathBuf),
    InvalidDeviceName(String),
    NoDeviceResolved,
    ToolsMissing(String),
    CommandFailed { program: String, code: Option<i32> },
    Io(std::io::Error),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::IsoNotFound(path) => {
                write!(f, "ISO file not found: {}", path.display())
            }
            HostError::InvalidDeviceName(name) => {
                write!(f, "Invalid device name format: '{name}'")
            }
            HostError::NoDeviceResolved => {
                write!(
                    f,
                    "Could not determine target USB device. Rerun with an explicit device name."
                )
            }
            HostError::ToolsMissing(tools) => {
                write!(f, "Missing required tool(s): {tools}")
            }
            HostError::CommandFailed { program, code } => {
                write!(f, "`{program}` failed with exit code: {code:?}")
            }
            HostError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HostError {
    fn from(e: std::io::Error) -> Self {
        HostError::Io(e)
    }
}

pub type HostResult<T = ()> = Result<T, HostError>;
