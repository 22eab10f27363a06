use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E6bError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid atmosphere configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, E6bError>;

impl E6bError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        E6bError::InvalidInput(msg.into())
    }
}
