//! Plaquette CLI
//!
//! Inspects and checks the login information used to query the
//! education-data service.
//!
//! ```bash
//! plaquette sources
//! plaquette -D API_username=alice -D API_password=secret check
//! plaquette --credentials-file WSDL_login.txt probe https://example.org/ws
//! ```
//!
//! Set RUST_LOG=debug for verbose logging.

mod args;
mod commands;
mod console;
mod router;

use args::Cli;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Errors are already reported by the router
    match router::route(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
