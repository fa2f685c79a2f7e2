//! CLI argument definitions using clap
//!
//! Commands:
//! - hyperlocal query  [--config <path>] [--base-dir <dir>]
//! - hyperlocal serve  [--config <path>] [--base-dir <dir>]
//! - hyperlocal export [--config <path>] [--base-dir <dir>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hyperlocal - filtering, ranking and recommendations over locality economics
#[derive(Parser, Debug)]
#[command(name = "hyperlocal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Answer a single JSON request from stdin and exit
    Query {
        /// Path to configuration file; defaults apply when absent
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory the dataset candidates are resolved against
        #[arg(long, default_value = ".")]
        base_dir: PathBuf,
    },

    /// Answer line-delimited JSON requests until EOF
    Serve {
        /// Path to configuration file; defaults apply when absent
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory the dataset candidates are resolved against
        #[arg(long, default_value = ".")]
        base_dir: PathBuf,
    },

    /// Read one export request from stdin and write raw CSV to stdout
    Export {
        /// Path to configuration file; defaults apply when absent
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory the dataset candidates are resolved against
        #[arg(long, default_value = ".")]
        base_dir: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
