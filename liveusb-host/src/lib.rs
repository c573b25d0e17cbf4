// SPDX-License-Identifier: MIT

pub mod config;
pub mod device;
pub mod errors;
pub mod flash;
pub mod listing;
pub mod runner;

pub use config::Config;
pub use device::TargetDevice;
pub use errors::{HostError, HostResult};
pub use flash::DdCommand;
pub use listing::DiskListing;
pub use runner::{CommandOutput, HostRunner, SystemRunner};
