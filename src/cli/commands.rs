//! CLI command implementations
//!
//! `serve` resolves configuration, opens the article store and runs the
//! HTTP server on a tokio runtime. `check` opens the store and reports.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::json;

use crate::api::ApiHandler;
use crate::article::ArticleStore;
use crate::http_server::HttpServer;
use crate::observability::{Event, Logger};

use super::args::Command;
use super::config::ServiceConfig;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port, data } => serve(config.as_deref(), port, data),
        Command::Check { config, data } => check(config.as_deref(), data),
    }
}

/// Start the HTTP API
///
/// 1. Resolve configuration
/// 2. Warn once if writes are unauthenticated
/// 3. Load the data file (a corrupt file stops boot)
/// 4. Serve until Ctrl-C
pub fn serve(config_path: Option<&Path>, port: Option<u16>, data: Option<PathBuf>) -> CliResult<()> {
    Logger::emit(Event::BootStart, &[]);

    let config = ServiceConfig::resolve(config_path, port, data)?;
    Logger::set_min_severity(config.log_level);
    log_config(&config);

    let api = open_api(&config)?;
    let server = HttpServer::with_config(config.http_config(), Arc::new(api));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Load the data file and print the article count
pub fn check(config_path: Option<&Path>, data: Option<PathBuf>) -> CliResult<()> {
    let config = ServiceConfig::resolve(config_path, None, data)?;
    Logger::set_min_severity(config.log_level);
    let api = open_api(&config)?;
    let count = article_count(&api)?;

    write_response(json!({
        "path": config.data_path.display().to_string(),
        "articles": count,
    }))
}

/// Build the API handler and load the collection once
pub fn open_api(config: &ServiceConfig) -> CliResult<ApiHandler> {
    let store = ArticleStore::new(&config.data_path).with_policy(config.refresh_policy);
    let api = ApiHandler::new(store, config.writer_auth());
    article_count(&api)?;
    Ok(api)
}

fn article_count(api: &ApiHandler) -> CliResult<usize> {
    api.store().len().map_err(|e| {
        CliError::boot_failed(format!(
            "Failed to load {}: {}",
            api.store().path().display(),
            e
        ))
    })
}

fn log_config(config: &ServiceConfig) {
    let auth = config.writer_auth();
    Logger::emit(
        Event::ConfigLoaded,
        &[
            ("addr", config.http_config().socket_addr().as_str()),
            ("auth", if auth.is_enabled() { "enabled" } else { "disabled" }),
            ("data_path", config.data_path.display().to_string().as_str()),
        ],
    );

    if !auth.is_enabled() {
        Logger::emit(
            Event::AuthDisabled,
            &[("hint", "set TOKEN to require X-Session-Token on writes")],
        );
    }
}
