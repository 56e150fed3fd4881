//! Common types shared across the transaction lifecycle

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::EncodingError;

/// Raw account address: the 32 public-key bytes, rendered as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 32]);

impl Address {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(s: &str) -> Result<Self, EncodingError> {
        let bytes = hex::decode(s).map_err(|e| EncodingError::InvalidAddress {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| EncodingError::InvalidAddress {
                value: s.to_string(),
                reason: format!("expected 32 bytes, got {}", v.len()),
            })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Identity on the network plus the locally tracked nonce.
///
/// The nonce is read from the network once per command and advanced locally
/// by exactly 1 per successful signing. It never moves backwards.
#[derive(Debug, Clone)]
pub struct Account {
    pub address: Address,
    nonce: u64,
}

impl Account {
    pub fn new(address: Address, nonce: u64) -> Self {
        Self { address, nonce }
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Advance after a successful signing. Called by the signing gateway
    /// only.
    pub(crate) fn increment_nonce(&mut self) {
        self.nonce += 1;
    }
}

/// Content-addressed transaction identifier assigned by the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxHash(pub String);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Settlement status of a submitted transaction.
///
/// Transitions are forward-only: `Pending` may become any terminal state;
/// `Unknown` is the terminal fallback when the watch loop gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Pending,
    Executed,
    Failed,
    Invalid,
    Unknown,
}

impl TransactionStatus {
    /// Parse the status string the gateway reports. Unrecognized values map
    /// to `Pending` so the watch loop keeps polling instead of settling on
    /// a bogus terminal state.
    pub fn parse(s: &str) -> Self {
        match s {
            "pending" | "received" | "partially-executed" => Self::Pending,
            "success" | "successful" | "executed" => Self::Executed,
            "fail" | "failed" | "unsuccessful" => Self::Failed,
            "invalid" => Self::Invalid,
            _ => Self::Pending,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Executed => "executed",
            Self::Failed => "failed",
            Self::Invalid => "invalid",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}
