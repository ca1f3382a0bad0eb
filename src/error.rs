use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbToolsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

pub type Result<T> = std::result::Result<T, DbToolsError>;
