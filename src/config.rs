//! Run configuration for the command-line estimator
//!
//! Sources, highest priority first:
//! - command-line arguments (`[INPUT] [--format markdown|json] [--quick]`)
//! - environment (`FOOTPRINT_INPUT`, `FOOTPRINT_FORMAT`)
//! - defaults (built-in default record, markdown)

use clap::Parser;
use std::path::PathBuf;

pub const INPUT_ENV: &str = "FOOTPRINT_INPUT";
pub const FORMAT_ENV: &str = "FOOTPRINT_FORMAT";

/// Output format for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Markdown report
    #[default]
    #[value(alias = "md")]
    Markdown,
    /// Pretty-printed JSON
    Json,
}

/// Estimate an annual carbon footprint from a lifestyle form
#[derive(Parser, Debug, Clone, PartialEq, Eq, Default)]
#[command(name = "estimate_footprint")]
#[command(version)]
pub struct RunConfig {
    /// JSON input file; the built-in default record when absent
    #[arg(env = "FOOTPRINT_INPUT")]
    pub input: Option<PathBuf>,

    /// Report format
    #[arg(
        short,
        long,
        env = "FOOTPRINT_FORMAT",
        value_enum,
        ignore_case = true,
        default_value_t
    )]
    pub format: ReportFormat,

    /// Use the quick profile estimate instead of the detailed one
    #[arg(short, long)]
    pub quick: bool,
}
