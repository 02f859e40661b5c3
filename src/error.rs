use thiserror::Error;

/// Failures reported by a [`FrameVerifier`](crate::domain::ports::FrameVerifier).
///
/// The handler currently collapses every variant into the same outcome, but
/// callers can tell an unreachable verifier apart from a garbled answer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerifyError {
    #[error("verifier unreachable: {0}")]
    Transport(String),
    #[error("verifier returned an unreadable response: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum DropError {
    #[error("MINTER_PRIVATE_KEY is not set")]
    MissingSigningKey,
    #[error("Verification error: {0}")]
    Verification(#[from] VerifyError),
    #[error("Invalid frame request")]
    InvalidFrame,
    #[error("User {0} not found")]
    UserNotFound(u64),
    #[error("Could not simulate transfer: {0}")]
    Simulation(String),
    #[error("Could not submit transfer: {0}")]
    Submission(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for DropError {
    fn from(err: rocksdb::Error) -> Self {
        DropError::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DropError>;
