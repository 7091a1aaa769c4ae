//! CLI commands

pub mod credentials;
