//! CLI argument definitions using clap
//!
//! Commands:
//! - sfhb serve [--config <path>] [--port <n>] [--data <path>]
//! - sfhb check [--config <path>] [--data <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sfhb - a minimal article-publishing API
#[derive(Parser, Debug)]
#[command(name = "sfhb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API
    Serve {
        /// Path to an optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Article data file (overrides config and DATA_PATH)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Load the data file, report the article count and exit
    Check {
        /// Path to an optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Article data file (overrides config and DATA_PATH)
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
