use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Network failure: {0}")]
    Network(String),

    #[error("Timeout after {seconds}s during {operation}")]
    Timeout { operation: String, seconds: u64 },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Validation failure: {0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
