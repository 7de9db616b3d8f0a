//! Shared CLI argument structs for consistent flag definitions across commands.
//!
//! Use `#[command(flatten)]` to include them in command-specific Args structs.

use std::path::PathBuf;

use clap::Args;

use crate::config::{self, Config};
use crate::discover::ScanOptions;
use crate::error::Result;
use crate::output::OutputFormat;

// ============================================================================
// FormatArgs - Output format flags
// ============================================================================

/// Common output format flags.
///
/// Provides consistent --format/-f and --json flags across commands.
/// Use `resolve()` to get the effective format with TTY auto-detection.
#[derive(Args, Clone, Debug, Default)]
pub struct FormatArgs {
    /// Output format (auto-detects TTY for pretty vs plain)
    #[arg(short = 'f', long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    /// Output as JSON (shorthand for --format=json)
    #[arg(long, conflicts_with = "format")]
    pub json: bool,
}

impl FormatArgs {
    /// Resolve the effective output format.
    ///
    /// Handles --json shorthand and applies TTY auto-detection for pretty mode.
    pub fn resolve(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format.resolve()
        }
    }
}

// ============================================================================
// ScanArgs - Candidate source flags
// ============================================================================

/// Where candidates come from and how deep to look.
#[derive(Args, Clone, Debug, Default)]
pub struct ScanArgs {
    /// Workspace root to scan (default: $HOP_ROOT, git work tree, or cwd)
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Levels below the root to scan
    #[arg(short = 'd', long, value_name = "N")]
    pub depth: Option<usize>,

    /// Include dot-directories
    #[arg(long)]
    pub hidden: bool,

    /// Read candidates from stdin (one per line) instead of scanning
    #[arg(long)]
    pub stdin: bool,
}

impl ScanArgs {
    /// Scan options: config, then env, then flags.
    pub fn to_scan_options(&self, config: &Config) -> Result<ScanOptions> {
        let depth = self.depth.unwrap_or_else(|| config::scan_depth(config));
        let hidden = self.hidden || config::scan_hidden(config);
        Ok(ScanOptions::from_config(&config.scan)?
            .with_depth(depth)
            .with_hidden(hidden))
    }
}
