//! Command-line argument definitions for the Paytrail CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the schedule and output paths,
//! configuration file selection, overrides of the loaded configuration, tap
//! replay and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Paytrail timeline renderer
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML schedule; the built-in sample schedule is used if omitted
    #[arg(help = "Path to the input schedule (TOML)")]
    pub input: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Language tag of the captions, e.g. "th" or "en"
    #[arg(long)]
    pub lang: Option<String>,

    /// Canvas width, overriding the configuration
    #[arg(long)]
    pub width: Option<f32>,

    /// Canvas height, overriding the configuration
    #[arg(long)]
    pub height: Option<f32>,

    /// Point id to tap, replayed in order (repeatable)
    #[arg(long = "tap", value_name = "ID")]
    pub taps: Vec<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
