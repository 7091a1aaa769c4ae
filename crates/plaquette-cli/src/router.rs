//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands::credentials;
use crate::console::CliConsole;
use anyhow::Result;

/// Route CLI commands to their respective handlers, reporting any failure
pub async fn route(cli: Cli) -> Result<()> {
    let console = CliConsole::new(cli.verbose);

    let result = dispatch(&cli, &console).await;
    if let Err(e) = &result {
        console.error(&format!("{:#}", e));
    }
    result
}

async fn dispatch(cli: &Cli, console: &CliConsole) -> Result<()> {
    let config = cli.resolver_config()?;

    match &cli.command {
        Commands::Sources => credentials::sources(config, console),
        Commands::Check => credentials::check(config, console),
        Commands::Probe { url } => credentials::probe(config, url, console).await,
    }
}
