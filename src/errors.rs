use rentbook_config::ConfigError;
use rentbook_core::CoreError;
use thiserror::Error;

/// Error type that captures failures surfaced by the rentbook tools.
#[derive(Debug, Error)]
pub enum RentbookError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
