//! Credential resolver for layered login information
//!
//! Reads every source, then keeps the one with the highest information value.
//! Ties go to the source with the higher priority (properties, then
//! environment, then file). Completeness therefore beats priority: a file
//! holding both pieces wins over a property holding only the username.

use super::credentials_file::CredentialsFile;
use super::error::{CredentialResult, ReadError};
use super::partial::PartialCredential;
use super::resolved::ResolvedCredential;
use super::resolver_config::ResolverConfig;
use super::source::CredentialSource;
use tracing::{debug, info};

/// What one source supplied during a resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub source: CredentialSource,
    pub credential: PartialCredential,
}

impl SourceReport {
    pub fn information_value(&self) -> u8 {
        self.credential.information_value()
    }

    /// Ranking key: information value first, source priority second
    fn score(&self) -> (u8, u8) {
        (self.information_value(), self.source.rank())
    }
}

/// Outcome of reading all sources
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Source whose credential was kept
    pub winner: CredentialSource,
    /// Every source in priority order
    pub reports: Vec<SourceReport>,
}

impl Resolution {
    fn select(reports: Vec<SourceReport>) -> Self {
        let winner = reports
            .iter()
            .max_by_key(|report| report.score())
            .map(|report| report.source)
            .unwrap_or(CredentialSource::Property);
        Self { winner, reports }
    }

    /// The report of a given source
    pub fn report(&self, source: CredentialSource) -> Option<&SourceReport> {
        self.reports.iter().find(|r| r.source == source)
    }

    /// The winning credential
    pub fn credential(&self) -> PartialCredential {
        self.report(self.winner)
            .map(|r| r.credential.clone())
            .unwrap_or_default()
    }
}

/// Credential resolver that picks the best-informed source
pub struct CredentialResolver {
    config: ResolverConfig,
}

impl CredentialResolver {
    /// Create a new credential resolver
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Create a resolver with default keys, default file and the live environment
    pub fn with_defaults() -> Self {
        Self::new(ResolverConfig::default())
    }

    /// Read the username and password properties
    pub fn read_properties(&self) -> PartialCredential {
        let props = &self.config.properties;
        PartialCredential::new(
            props.get(&self.config.username_key).map(String::from),
            props.get(&self.config.password_key).map(String::from),
        )
    }

    /// Read the username and password environment variables
    pub fn read_environment(&self) -> PartialCredential {
        let env = &self.config.env;
        PartialCredential::new(
            env.get(&self.config.username_key).cloned(),
            env.get(&self.config.password_key).cloned(),
        )
    }

    /// Read the credentials file
    ///
    /// A missing file supplies nothing; an existing file always supplies both pieces.
    pub fn read_file(&self) -> Result<PartialCredential, ReadError> {
        Ok(CredentialsFile::load(&self.config.credentials_file)?
            .map(CredentialsFile::into_partial)
            .unwrap_or_default())
    }

    /// Read every source and rank them
    pub fn read_all(&self) -> Result<Resolution, ReadError> {
        let mut reports = Vec::with_capacity(CredentialSource::all().len());
        for &source in CredentialSource::all() {
            let credential = match source {
                CredentialSource::Property => self.read_properties(),
                CredentialSource::Environment => self.read_environment(),
                CredentialSource::File => self.read_file()?,
            };
            let pieces = credential.information_value();
            info!(
                source = %source,
                pieces,
                "Found {} piece{} of login information in {}.",
                pieces,
                if pieces >= 2 { "s" } else { "" },
                source
            );
            reports.push(SourceReport { source, credential });
        }

        let resolution = Resolution::select(reports);
        debug!(winner = %resolution.winner, "Selected login information source");
        Ok(resolution)
    }

    /// Returns the best login information found, possibly incomplete
    ///
    /// Fails only if the credentials file is malformed or unreadable.
    pub fn resolve(&self) -> Result<PartialCredential, ReadError> {
        Ok(self.read_all()?.credential())
    }

    /// Returns the best login information found, or an error naming what is missing
    pub fn credentials(&self) -> CredentialResult<ResolvedCredential> {
        let partial = self.resolve()?;
        ResolvedCredential::try_from(partial)
    }

    /// Get the resolver configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::with_defaults()
    }
}
