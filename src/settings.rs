//! Process settings: named environments and tunables
//!
//! Settings come from an optional TOML file plus CLI/env overrides; every
//! field has a sensible default so the tool runs with no file at all.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::types::Address;

/// System contract that handles token issuance and role assignment.
const TOKEN_CONTRACT_HEX: &str =
    "000000000000000000010000000000000000000000000000000000000002ffff";

/// Issuance deposit: 0.05 native units in the smallest denomination.
const ISSUE_VALUE: u128 = 50_000_000_000_000_000;

/// Named network environment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    #[default]
    Devnet,
    Testnet,
    Mainnet,
}

impl Chain {
    pub fn gateway_url(&self) -> &'static str {
        match self {
            Chain::Devnet => "https://devnet-api.elrond.com",
            Chain::Testnet => "https://testnet-api.elrond.com",
            Chain::Mainnet => "https://api.elrond.com",
        }
    }

    pub fn explorer_url(&self) -> &'static str {
        match self {
            Chain::Devnet => "https://devnet-explorer.elrond.com",
            Chain::Testnet => "https://testnet-explorer.elrond.com",
            Chain::Mainnet => "https://explorer.elrond.com",
        }
    }

    /// One-character chain tag carried in every transaction.
    pub fn chain_id(&self) -> &'static str {
        match self {
            Chain::Devnet => "D",
            Chain::Testnet => "T",
            Chain::Mainnet => "1",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Chain::Devnet => "devnet",
            Chain::Testnet => "testnet",
            Chain::Mainnet => "mainnet",
        }
    }
}

/// Tool configuration, loadable from `settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Selected environment (CLI `--chain` wins over this).
    #[serde(default)]
    pub chain: Chain,

    /// Path to the PEM wallet file.
    #[serde(default = "default_pem_path")]
    pub pem_path: String,

    /// Gas limit for every workflow transaction.
    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,

    /// HTTP timeout for single gateway calls, seconds.
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// Watch loop poll cadence, milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Watch loop total budget, seconds.
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,

    /// Hex address of the token-issuance system contract.
    #[serde(default = "default_token_contract")]
    pub token_contract: String,
}

fn default_pem_path() -> String {
    "wallet.pem".to_string()
}
fn default_gas_limit() -> u64 {
    60_000_000
}
fn default_http_timeout_secs() -> u64 {
    10
}
fn default_poll_interval_ms() -> u64 {
    6_000
}
fn default_max_wait_secs() -> u64 {
    180
}
fn default_token_contract() -> String {
    TOKEN_CONTRACT_HEX.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            chain: Chain::default(),
            pem_path: default_pem_path(),
            gas_limit: default_gas_limit(),
            http_timeout_secs: default_http_timeout_secs(),
            poll_interval_ms: default_poll_interval_ms(),
            max_wait_secs: default_max_wait_secs(),
            token_contract: default_token_contract(),
        }
    }
}

impl Settings {
    /// Load from a TOML file; a missing file yields the defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn token_contract_address(&self) -> Result<Address> {
        Ok(Address::from_hex(&self.token_contract)?)
    }

    pub fn issue_value(&self) -> u128 {
        ISSUE_VALUE
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn max_wait(&self) -> Duration {
        Duration::from_secs(self.max_wait_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_tags() {
        assert_eq!(Chain::Devnet.chain_id(), "D");
        assert_eq!(Chain::Testnet.chain_id(), "T");
        assert_eq!(Chain::Mainnet.chain_id(), "1");
    }

    #[test]
    fn defaults_parse_from_empty_toml() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.chain, Chain::Devnet);
        assert_eq!(settings.pem_path, "wallet.pem");
        assert_eq!(settings.gas_limit, 60_000_000);
        settings.token_contract_address().unwrap();
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let settings: Settings =
            toml::from_str("chain = \"mainnet\"\npoll_interval_ms = 1000\n").unwrap();
        assert_eq!(settings.chain, Chain::Mainnet);
        assert_eq!(settings.poll_interval(), Duration::from_millis(1000));
        assert_eq!(settings.max_wait(), Duration::from_secs(180));
    }
}
