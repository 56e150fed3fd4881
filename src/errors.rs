//! Error taxonomy for the transaction lifecycle
//!
//! Every failure that can cross a component boundary is one of these kinds.
//! The command boundary in `main.rs` renders a single human-readable line
//! from them; nothing below it panics or leaks transport internals.

use thiserror::Error;

use crate::types::{TransactionStatus, TxHash};

/// Malformed payload or transaction arguments. Fatal to the current
/// command, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("function name must not be empty")]
    EmptyFunctionName,

    #[error("function name contains invalid character {0:?}")]
    InvalidFunctionName(char),

    #[error("gas limit must be positive")]
    ZeroGasLimit,

    #[error("invalid address {value:?}: {reason}")]
    InvalidAddress { value: String, reason: String },
}

/// Failures of the Signer capability (credential file or signing itself).
#[derive(Debug, Error)]
pub enum SignerError {
    #[error("wallet file not found: {0}")]
    FileNotFound(String),

    #[error("malformed credential in {path}: {reason}")]
    MalformedCredential { path: String, reason: String },

    #[error("signing rejected: {0}")]
    Rejected(String),
}

/// Top-level error for every orchestrator operation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Credential or signer failure. The local nonce is guaranteed
    /// untouched when this is returned.
    #[error("signing failed: {0}")]
    Signing(#[from] SignerError),

    /// Transport failure while handing the signed transaction to the
    /// network. The same signed transaction may be resubmitted as-is.
    #[error("submission failed: {0}")]
    Submission(String),

    /// The network settled the transaction in a non-success state.
    #[error("transaction {hash} finished as {status}")]
    TransactionFailed {
        hash: TxHash,
        status: TransactionStatus,
    },

    /// The finalized transaction carried a result field, but it did not
    /// decode to the expected value.
    #[error("transaction produced no decodable result")]
    ResultAbsent,

    /// No persisted token identifier yet.
    #[error("token identifier not found; run the issue-token command first")]
    ConfigNotFound,

    #[error("saved config is not readable: {0}")]
    ConfigFormat(String),

    /// Transport failure on a read path (account or status query).
    #[error("network error: {0}")]
    Network(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether re-running the failed step (not the whole command) is safe
    /// and potentially useful.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Submission(_) | Error::Network(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(Error::Submission("connection reset".into()).is_retryable());
        assert!(Error::Network("503".into()).is_retryable());
        assert!(!Error::Encoding(EncodingError::EmptyFunctionName).is_retryable());
        assert!(!Error::ConfigNotFound.is_retryable());
        assert!(!Error::Signing(SignerError::Rejected("nope".into())).is_retryable());
    }
}
