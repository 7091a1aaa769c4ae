//! Plaquette Core Library
//!
//! Login handling for the plaquette course-catalog exporter: finds the best
//! available username/password pair for the education-data service and hands
//! it to the HTTP layer.

pub mod credential;
pub mod settings;

pub use credential::{
    ConstantAuthenticator, CredentialError, CredentialResolver, CredentialSource,
    PartialCredential, ReadError, ResolvedCredential, ResolverConfig,
};
pub use settings::{Settings, SettingsError};
