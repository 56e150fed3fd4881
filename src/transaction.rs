//! Unsigned and signed transaction value types
//!
//! A transaction is built once by the factory and never mutated afterwards:
//! signing consumes the unsigned value, so nothing can rewrite a field
//! between signing and submission. The wire shape follows the gateway's
//! JSON conventions (value as a decimal string, payload base64, signature
//! hex), and the bytes that get signed are exactly the canonical JSON
//! serialization of the unsigned transaction.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Serialize, Serializer};

use crate::errors::EncodingError;
use crate::payload::TransactionPayload;
use crate::types::Address;

/// A fully assembled transaction awaiting a signature.
///
/// Field order matters: it defines the canonical signing bytes.
#[derive(Debug, Clone, Serialize)]
pub struct UnsignedTransaction {
    pub nonce: u64,
    #[serde(serialize_with = "as_decimal_string")]
    pub value: u128,
    pub receiver: Address,
    pub sender: Address,
    #[serde(rename = "gasLimit")]
    pub gas_limit: u64,
    #[serde(serialize_with = "as_base64")]
    pub data: TransactionPayload,
    #[serde(rename = "chainID")]
    pub chain_id: String,
}

impl UnsignedTransaction {
    /// Combine a payload with its envelope. The nonce is the caller's
    /// responsibility and must equal the account's last-known value.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        data: TransactionPayload,
        receiver: Address,
        sender: Address,
        value: u128,
        gas_limit: u64,
        chain_id: &str,
        nonce: u64,
    ) -> Result<Self, EncodingError> {
        if gas_limit == 0 {
            return Err(EncodingError::ZeroGasLimit);
        }
        Ok(Self {
            nonce,
            value,
            receiver,
            sender,
            gas_limit,
            data,
            chain_id: chain_id.to_string(),
        })
    }

    /// The canonical byte sequence the signer operates on.
    pub fn signing_bytes(&self) -> Vec<u8> {
        // Serialization of this struct cannot fail: no maps, no non-string
        // keys, no non-finite floats.
        serde_json::to_vec(self).expect("transaction serializes")
    }
}

/// An unsigned transaction plus its signature. Immutable.
#[derive(Debug, Clone, Serialize)]
pub struct SignedTransaction {
    #[serde(flatten)]
    pub tx: UnsignedTransaction,
    #[serde(serialize_with = "as_hex")]
    pub signature: Vec<u8>,
}

fn as_decimal_string<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

fn as_base64<S: Serializer>(data: &TransactionPayload, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&BASE64.encode(data.as_bytes()))
}

fn as_hex<S: Serializer>(bytes: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}
