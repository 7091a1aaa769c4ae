//! Login resolution commands

use crate::console::CliConsole;
use anyhow::{Context, Result, bail};
use plaquette_core::credential::{
    ConstantAuthenticator, CredentialResolver, ResolvedCredential, ResolverConfig, SourceReport,
};
use tracing::info;

/// Show what each source supplies and which one wins
pub fn sources(config: ResolverConfig, console: &CliConsole) -> Result<()> {
    let resolver = CredentialResolver::new(config);
    let resolution = resolver.read_all()?;

    console.print_header("Login information sources");
    for report in &resolution.reports {
        console.line(&describe(report, report.source == resolution.winner));
    }
    console.info(&format!(
        "Credentials file: {}",
        resolver.config().credentials_file.display()
    ));
    Ok(())
}

/// Resolve a complete credential
pub fn check(config: ResolverConfig, console: &CliConsole) -> Result<()> {
    let resolution = CredentialResolver::new(config).read_all()?;
    let credential = ResolvedCredential::try_from(resolution.credential())?;

    console.success(&format!(
        "Credentials OK for user '{}' (from {})",
        credential.username(),
        resolution.winner
    ));
    if credential.password().is_empty() {
        console.warn("Password is empty");
    }
    Ok(())
}

/// Send one GET request with the resolved credentials
pub async fn probe(config: ResolverConfig, url: &str, console: &CliConsole) -> Result<()> {
    let credential = CredentialResolver::new(config).credentials()?;
    let username = credential.username().to_string();
    let client = ConstantAuthenticator::new(credential)
        .client_builder()?
        .build()
        .context("Failed to build HTTP client")?;

    info!(url, username = %username, "Probing service");
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        bail!("Service rejected credentials for user '{}': {}", username, status);
    }

    console.success(&format!("{} answered {}", url, status));
    Ok(())
}

/// One line per source; passwords are never shown
fn describe(report: &SourceReport, winner: bool) -> String {
    let pieces = report.information_value();
    let username = match report.credential.username() {
        Some(u) => format!("'{}'", u),
        None => "(not set)".to_string(),
    };
    let password = match report.credential.password() {
        Some("") => "(empty)",
        Some(_) => "(set)",
        None => "(not set)",
    };
    format!(
        "{} {:<22} {} piece{}  username: {}  password: {}",
        if winner { "*" } else { " " },
        report.source.name(),
        pieces,
        if pieces >= 2 { "s" } else { "" },
        username,
        password
    )
}
