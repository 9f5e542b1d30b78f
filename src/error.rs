use thiserror::Error;

/// Errors that can occur while searching and presenting recipes
#[derive(Error, Debug)]
pub enum FinderError {
    /// Failed to reach the recipe service, or it answered with an error status
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The recipe service returned a body that is not the expected JSON
    #[error("Failed to parse provider response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// A user supplied filter value or command could not be understood
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Terminal or file I/O failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FinderError {
    /// True for failures that come from talking to the recipe service
    pub fn is_provider_unavailable(&self) -> bool {
        matches!(self, FinderError::FetchError(_) | FinderError::ParseError(_))
    }
}
