use thiserror::Error;

/// Errors that can occur while importing technical cards
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to reach the sheet export endpoint
    #[error("Failed to fetch sheet export: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The export endpoint answered with a non-success status
    #[error("Sheet export returned status {0}")]
    Status(reqwest::StatusCode),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
