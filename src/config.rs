//! Environment-sourced configuration for the maintenance binaries

use crate::error::{DbToolsError, Result};
use std::env;

/// Environment variable holding the MongoDB connection string. The string
/// selects both the server endpoint and the default database.
pub const MONGODB_URI_VAR: &str = "MONGODB_URI";

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
}

impl Config {
    /// Read configuration from the environment. Absence of the connection
    /// string is a configuration error, not a panic; binaries report it and
    /// exit with code 1.
    pub fn from_env() -> Result<Self> {
        let mongodb_uri = env::var(MONGODB_URI_VAR).map_err(|_| {
            DbToolsError::Config(format!(
                "{} not found in environment (set it in your .env file)",
                MONGODB_URI_VAR
            ))
        })?;
        Ok(Self { mongodb_uri })
    }
}
