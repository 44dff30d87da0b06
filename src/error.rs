use thiserror::Error;

/// Errors that can occur while generating a recipe
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Network failure talking to the search or generation service
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote service answered with a non-success status
    #[error("{service} request failed with status: {status}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
    },

    /// The response body did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Required user input was missing
    #[error("{0}")]
    InvalidInput(String),

    /// No API key was found in config or environment
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// Generation provider name is not known
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Failed to write the recipe to disk
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
