// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_BLOCK_SIZE: &str = "4M";

/// Size labels lsblk typically prints for common USB stick capacities.
pub const DEFAULT_SIZE_LABELS: &[&str] = &["8G", "16G", "32G", "59G", "64G"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// dd block size, e.g. "4M".
    #[serde(default = "default_block_size")]
    pub block_size: String,

    /// Size labels the auto-detector accepts in the lsblk SIZE column.
    #[serde(default = "default_size_labels")]
    pub size_labels: Vec<String>,
}

fn default_block_size() -> String {
    DEFAULT_BLOCK_SIZE.to_string()
}

fn default_size_labels() -> Vec<String> {
    DEFAULT_SIZE_LABELS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            block_size: default_block_size(),
            size_labels: default_size_labels(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let lower = self.block_size.trim().to_lowercase();
        let num = lower
            .strip_suffix('k')
            .or_else(|| lower.strip_suffix('m'))
            .or_else(|| lower.strip_suffix('g'))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid block size '{}'. Use K, M or G suffix.",
                    self.block_size
                )
            })?;
        match num.parse::<u64>() {
            Ok(0) | Err(_) => anyhow::bail!(
                "Invalid block size '{}'. Use K, M or G suffix.",
                self.block_size
            ),
            Ok(_) => {}
        }

        if self.size_labels.is_empty() {
            anyhow::bail!("size_labels must not be empty");
        }
        Ok(())
    }

    pub fn print_summary(&self) {
        println!("[liveusb] Block size: {}", self.block_size);
        println!(
            "[liveusb] Detection size labels: {}",
            self.size_labels.join(", ")
        );
    }
}
