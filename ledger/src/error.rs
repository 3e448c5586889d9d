//! Fee ledger error types

use thiserror::Error;

/// Errors raised at the edges of the ledger: parsing amounts and
/// encoding/decoding records. Building a record never fails.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
