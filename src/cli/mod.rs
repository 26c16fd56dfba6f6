//! CLI module for sfhb
//!
//! Provides command-line interface for:
//! - serve: resolve configuration and run the HTTP API
//! - check: load the data file and report the article count

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, open_api, run, run_command, serve};
pub use config::ServiceConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
