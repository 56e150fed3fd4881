//! Transaction payload encoding
//!
//! A payload is the contract-call encoding carried in a transaction's data
//! field: the function name followed by `@`-separated, hex-encoded
//! arguments. Building is pure; the only failure mode is malformed input.

use serde::{Deserialize, Serialize};

use crate::errors::EncodingError;
use crate::types::Address;

const ARG_SEPARATOR: char = '@';

/// One typed argument of a contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadArg {
    /// Raw bytes, hex-encoded on the wire.
    Bytes(Vec<u8>),
    /// Unsigned 32-bit number, minimal big-endian bytes (0 encodes empty).
    U32(u32),
    /// Account address, its 32 raw bytes hex-encoded.
    Addr(Address),
}

impl PayloadArg {
    pub fn utf8(s: &str) -> Self {
        Self::Bytes(s.as_bytes().to_vec())
    }

    fn to_hex(&self) -> String {
        match self {
            Self::Bytes(b) => hex::encode(b),
            Self::U32(v) => hex::encode(encode_u32_minimal(*v)),
            Self::Addr(a) => a.to_hex(),
        }
    }
}

/// Minimal big-endian representation with no leading zero byte; the value
/// 0 encodes as an empty byte string.
fn encode_u32_minimal(value: u32) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes[first..].to_vec()
}

/// Immutable, fully encoded transaction payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionPayload(String);

impl TransactionPayload {
    /// Encode a function call. Zero arguments yields just the function
    /// name; each argument becomes one lowercase-hex segment.
    pub fn build(function: &str, args: &[PayloadArg]) -> Result<Self, EncodingError> {
        if function.is_empty() {
            return Err(EncodingError::EmptyFunctionName);
        }
        if let Some(c) = function
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_')
        {
            return Err(EncodingError::InvalidFunctionName(c));
        }

        let mut out = String::from(function);
        for arg in args {
            out.push(ARG_SEPARATOR);
            out.push_str(&arg.to_hex());
        }
        Ok(Self(out))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_args_yields_function_name_only() {
        let p = TransactionPayload::build("issueSemiFungible", &[]).unwrap();
        assert_eq!(p.as_str(), "issueSemiFungible");
    }

    #[test]
    fn one_segment_per_argument_all_valid_hex() {
        let args = vec![
            PayloadArg::utf8("MyToken"),
            PayloadArg::utf8("MTK"),
            PayloadArg::Bytes(vec![]),
            PayloadArg::U32(7),
        ];
        let p = TransactionPayload::build("f", &args).unwrap();
        let segments: Vec<&str> = p.as_str().split('@').collect();
        assert_eq!(segments[0], "f");
        assert_eq!(segments.len(), args.len() + 1);
        for seg in &segments[1..] {
            // zero-length hex is permitted
            assert!(seg.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
        assert_eq!(segments[3], "");
    }

    #[test]
    fn u32_zero_encodes_empty() {
        let p = TransactionPayload::build("f", &[PayloadArg::U32(0)]).unwrap();
        assert_eq!(p.as_str(), "f@");
    }

    #[test]
    fn u32_300_encodes_two_bytes() {
        let p = TransactionPayload::build("f", &[PayloadArg::U32(300)]).unwrap();
        assert_eq!(p.as_str(), "f@012c");
    }

    #[test]
    fn u32_minimal_no_leading_zero_byte() {
        assert_eq!(encode_u32_minimal(0), Vec::<u8>::new());
        assert_eq!(encode_u32_minimal(1), vec![0x01]);
        assert_eq!(encode_u32_minimal(255), vec![0xff]);
        assert_eq!(encode_u32_minimal(256), vec![0x01, 0x00]);
        assert_eq!(encode_u32_minimal(u32::MAX), vec![0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn address_arg_hex_encodes_raw_bytes() {
        let addr = Address::new([0x01; 32]);
        let p = TransactionPayload::build("setSpecialRole", &[PayloadArg::Addr(addr)]).unwrap();
        assert_eq!(p.as_str(), format!("setSpecialRole@{}", "01".repeat(32)));
    }

    #[test]
    fn empty_function_name_rejected() {
        assert_eq!(
            TransactionPayload::build("", &[]),
            Err(EncodingError::EmptyFunctionName)
        );
    }

    #[test]
    fn function_name_with_separator_rejected() {
        assert_eq!(
            TransactionPayload::build("do@thing", &[]),
            Err(EncodingError::InvalidFunctionName('@'))
        );
    }
}
