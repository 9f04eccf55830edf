use thiserror::Error;

/// Errors raised by configuration and filesystem plumbing.
#[derive(Error, Debug)]
pub enum BankError {
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        BankError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        BankError::ConfigError(err.to_string())
    }
}

/// User-facing CLI error wrapper. Fatal for the shell loop.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BankError),
    #[error("Command failed: {0}")]
    Command(String),
}
