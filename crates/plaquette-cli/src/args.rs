//! CLI argument definitions using clap
//!
//! - plaquette sources                       # What each source supplies
//! - plaquette check                         # Resolve a complete login
//! - plaquette probe <url>                   # Authenticated GET against the service
//! - plaquette -D API_username=alice check   # Property override

use clap::{Parser, Subcommand};
use plaquette_core::credential::{PropertyStore, ResolverConfig};
use plaquette_core::settings::{DEFAULT_SETTINGS_FILE, Settings, SettingsError};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plaquette")]
#[command(about = "Plaquette - course-catalog exporter, login resolution tools")]
#[command(version)]
pub struct Cli {
    /// Set a property, may be repeated; goes before the subcommand
    /// (e.g. -D API_username=alice check)
    #[arg(
        short = 'D',
        value_name = "KEY=VALUE",
        value_parser = PropertyStore::parse_definition
    )]
    pub properties: Vec<(String, String)>,

    /// Path to the settings file
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE, global = true)]
    pub config_file: PathBuf,

    /// Credentials file, overrides the settings file
    #[arg(long, global = true)]
    pub credentials_file: Option<PathBuf>,

    /// Username property and environment variable, overrides the settings file
    #[arg(long, global = true)]
    pub username_key: Option<String>,

    /// Password property and environment variable, overrides the settings file
    #[arg(long, global = true)]
    pub password_key: Option<String>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show how much login information each source supplies
    Sources,
    /// Resolve a complete username and password
    Check,
    /// Send one authenticated GET request and report the status
    Probe {
        /// URL of the service endpoint
        url: String,
    },
}

impl Cli {
    /// Resolver configuration: settings file, then command-line overrides
    pub fn resolver_config(&self) -> Result<ResolverConfig, SettingsError> {
        let settings = Settings::load(&self.config_file)?;
        let mut config = settings
            .into_resolver_config()
            .with_properties(self.properties.iter().cloned().collect());

        if let Some(path) = &self.credentials_file {
            config = config.with_credentials_file(path);
        }
        if let Some(key) = &self.username_key {
            config = config.with_username_key(key);
        }
        if let Some(key) = &self.password_key {
            config = config.with_password_key(key);
        }

        Ok(config)
    }
}
