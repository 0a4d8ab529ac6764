//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "availability")]
#[command(about = "Availability statistics for monitored resources", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .availability/config.yaml)
    #[arg(short, long, global = true, env = "AVAILABILITY_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a resource's availability history
    Summary {
        /// Interval history file (JSON, or YAML with a .yaml/.yml extension)
        file: PathBuf,

        /// Evaluate open intervals at this instant (epoch milliseconds)
        #[arg(long, allow_negative_numbers = true)]
        now: Option<i64>,
    },

    /// Check that a history file forms a well-formed interval series
    Validate {
        /// Interval history file
        file: PathBuf,
    },
}
