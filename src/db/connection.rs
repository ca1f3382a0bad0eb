//! MongoDB connection management

use crate::config::Config;
use crate::error::{DbToolsError, Result};
use mongodb::{Client, Database};

/// Connect and return the default database named by the connection string.
pub async fn connect(config: &Config) -> Result<Database> {
    let client = Client::with_uri_str(&config.mongodb_uri).await?;
    client.default_database().ok_or_else(|| {
        DbToolsError::Config(
            "connection string does not name a default database".to_string(),
        )
    })
}
