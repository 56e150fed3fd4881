//! sft-cli: transaction lifecycle orchestration for token issuance
//!
//! The core pipeline assembles a typed ledger transaction, signs it,
//! submits it, watches it to settlement, extracts the resulting token
//! identifier and persists it for later commands. Signing and network
//! access are capability traits injected at the boundary.

pub mod errors;
pub mod extractor;
pub mod network;
pub mod payload;
pub mod prompt;
pub mod settings;
pub mod signing;
pub mod store;
pub mod transaction;
pub mod types;
pub mod watcher;
pub mod workflows;

pub use errors::{Error, Result};
pub use types::{Account, Address, TransactionStatus, TxHash};

#[cfg(test)]
mod tests;
