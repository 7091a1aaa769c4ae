//! Best-available credentials
//!
//! Login information for the education-data service may be declared in three
//! places, each of which may supply the username, the password, both or neither:
//! - Properties (`-D API_username=...`)
//! - Environment variables (`API_username`, `API_password`)
//! - A two-line file (`API_login.txt`)
//!
//! The resolver keeps the source supplying the most pieces, breaking ties in
//! the order above, and turns it into a complete pair or a precise error.
//!
//! # Example
//!
//! ```no_run
//! use plaquette_core::credential::{ConstantAuthenticator, CredentialResolver};
//!
//! let resolver = CredentialResolver::with_defaults();
//! match resolver.credentials() {
//!     Ok(credential) => {
//!         let auth = ConstantAuthenticator::new(credential);
//!         let _client = auth.client_builder().unwrap().build().unwrap();
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

mod authenticator;
mod credentials_file;
mod error;
mod partial;
mod property_store;
mod resolved;
mod resolver;
mod resolver_config;
mod source;

pub use authenticator::ConstantAuthenticator;
pub use credentials_file::{CredentialsFile, DEFAULT_CREDENTIALS_FILE};
pub use error::{CredentialError, CredentialResult, ReadError};
pub use partial::PartialCredential;
pub use property_store::{PropertyParseError, PropertyStore};
pub use resolved::ResolvedCredential;
pub use resolver::{CredentialResolver, Resolution, SourceReport};
pub use resolver_config::{DEFAULT_PASSWORD_KEY, DEFAULT_USERNAME_KEY, ResolverConfig};
pub use source::CredentialSource;
