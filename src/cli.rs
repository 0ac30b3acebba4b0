//! Command-line argument parsing for the demo window
//!
//! Supports:
//! - Choosing how many placeholder panels to start with
//! - Initial window size
//! - An explicit config file instead of the default location

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::config::SplitConfig;

/// Largest panel count accepted on the command line
pub const MAX_STARTUP_PANELS: usize = 32;

/// Resizable split panels demo
#[derive(Parser, Debug)]
#[command(name = "splitview", version, about = "Resizable side-by-side panels")]
pub struct CliArgs {
    /// Number of panels to start with
    #[arg(short = 'p', long, default_value_t = 3, value_name = "N")]
    pub panels: usize,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1000, value_name = "PX")]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 500, value_name = "PX")]
    pub height: u32,

    /// Config file (defaults to ~/.config/splitview/config.yaml)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub panels: usize,
    /// Window size (width, height) in logical pixels
    pub window_size: (u32, u32),
    pub split: SplitConfig,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig> {
        if self.panels > MAX_STARTUP_PANELS {
            bail!(
                "--panels must be at most {}, got {}",
                MAX_STARTUP_PANELS,
                self.panels
            );
        }
        if self.width == 0 || self.height == 0 {
            bail!("window size must be non-zero, got {}x{}", self.width, self.height);
        }

        let split = match &self.config {
            Some(path) => SplitConfig::load_from(path)?,
            None => SplitConfig::load(),
        };

        Ok(StartupConfig {
            panels: self.panels,
            window_size: (self.width, self.height),
            split,
        })
    }
}
