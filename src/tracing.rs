//! Tracing setup for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=splitview::model=trace` - every accepted/rejected divider drag
//! - `RUST_LOG=splitview::update=debug` - message dispatch
//!
//! # Log Files
//!
//! Logs are written to `~/.config/splitview/logs/splitview.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{LayoutState, SplitContainer};
use crate::view::Surface;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/splitview/logs/splitview.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "splitview.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of container geometry for diffing around an update
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub state: LayoutState,
    pub proportions: Vec<f64>,
    /// (x, width) of each panel
    pub panels: Vec<(i32, i32)>,
    /// x of each divider
    pub dividers: Vec<i32>,
}

impl LayoutSnapshot {
    pub fn from_container<P: Surface>(container: &SplitContainer<P>) -> Self {
        Self {
            state: container.layout_state(),
            proportions: container.proportions(),
            panels: container
                .entries()
                .map(|entry| (entry.rect.x, entry.rect.width))
                .collect(),
            dividers: container
                .dividers()
                .iter()
                .map(|divider| divider.bounds().x)
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        if self.panels.len() != other.panels.len() {
            return Some(format!(
                "panel count: {} → {}",
                self.panels.len(),
                other.panels.len()
            ));
        }

        let mut changes = Vec::new();
        if self.state != other.state {
            changes.push(format!("state: {:?} → {:?}", self.state, other.state));
        }
        for (i, (before, after)) in self.panels.iter().zip(&other.panels).enumerate() {
            if before != after {
                changes.push(format!(
                    "panel #{}: x={} w={} → x={} w={}",
                    i, before.0, before.1, after.0, after.1
                ));
            }
        }
        for (i, (before, after)) in self.dividers.iter().zip(&other.dividers).enumerate() {
            if before != after {
                changes.push(format!("divider #{}: x={} → x={}", i, before, after));
            }
        }
        if self.proportions != other.proportions {
            changes.push(format!(
                "proportions: {:?} → {:?}",
                self.proportions, other.proportions
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
