// SPDX-License-Identifier: MIT

use std::process::{Command, Stdio};

use crate::errors::{HostError, HostResult};

/// Captured result of a host command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Subprocess seam for the pipeline. The system implementation shells out,
/// tests substitute canned output.
pub trait HostRunner {
    /// Run a command with stdio inherited. Non-zero exit is an error.
    fn stream(&self, program: &str, args: &[String]) -> HostResult<()>;

    /// Run a command with stdout captured. The exit code is returned, not
    /// checked; callers that tolerate failure decide for themselves.
    fn capture(&self, program: &str, args: &[String]) -> HostResult<CommandOutput>;

    /// Hand a full command line to `bash -c`. Non-zero exit is an error.
    fn shell(&self, line: &str) -> HostResult<()>;
}

/// Runs commands on the real host.
pub struct SystemRunner;

impl HostRunner for SystemRunner {
    fn stream(&self, program: &str, args: &[String]) -> HostResult<()> {
        let status = Command::new(program).args(args).status()?;
        if !status.success() {
            return Err(HostError::CommandFailed {
                program: program.to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }

    fn capture(&self, program: &str, args: &[String]) -> HostResult<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            code: output.status.code(),
        })
    }

    fn shell(&self, line: &str) -> HostResult<()> {
        let status = Command::new("bash").arg("-c").arg(line).status()?;
        if !status.success() {
            return Err(HostError::CommandFailed {
                program: "bash".to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }
}
