//! mailbox-quote - pricing and quote API server
//!
//! Serves the tier table, quote calculator and order intake over HTTP.

#![allow(missing_docs)]

use mailbox_quote::config::{Config, DEFAULT_CONFIG_PATH, loader::CONFIG_PATH_ENV};
use mailbox_quote::server;
use mailbox_quote::utils::logging::init_logging;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let config = match Config::load(&config_path).await {
        Ok(config) => config,
        Err(e) => {
            // Display keeps multi-line messages readable
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match server::run_with_config(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
