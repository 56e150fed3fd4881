//! NetworkClient capability: the gateway HTTP API
//!
//! Three calls cover everything the orchestrator needs: read an account's
//! nonce, hand over a signed transaction, and query a transaction's
//! settlement state. Submission transport failures are their own error
//! kind because resubmitting the same signed bytes is safe; read-path
//! failures are plain network errors.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::{Error, Result};
use crate::transaction::SignedTransaction;
use crate::types::{Address, TransactionStatus, TxHash};

/// Account state as reported by the network.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountOnNetwork {
    pub nonce: u64,
}

/// A transaction as reported by the network, including side-channel
/// outputs (emitted logs and embedded contract results).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionOnNetwork {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub logs: Option<TransactionLogs>,
    #[serde(default, rename = "smartContractResults")]
    pub results: Vec<ContractResult>,
}

impl TransactionOnNetwork {
    pub fn status(&self) -> TransactionStatus {
        TransactionStatus::parse(&self.status)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionLogs {
    #[serde(default)]
    pub events: Vec<LogEvent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogEvent {
    #[serde(default)]
    pub identifier: String,
    /// Base64-encoded topic values.
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractResult {
    /// `@`-separated call data of the embedded result.
    #[serde(default)]
    pub data: String,
}

/// Opaque network capability.
#[async_trait]
pub trait NetworkClient: Send + Sync {
    async fn get_account(&self, address: &Address) -> Result<AccountOnNetwork>;

    /// Hand a signed transaction to the network; returns the hash the
    /// network assigned. Transport failure here is retryable with the
    /// same signed transaction.
    async fn submit(&self, tx: &SignedTransaction) -> Result<TxHash>;

    async fn get_transaction(&self, hash: &TxHash) -> Result<TransactionOnNetwork>;
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(rename = "txHash")]
    tx_hash: String,
}

/// HTTP implementation of [`NetworkClient`] against a gateway base URL.
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl NetworkClient for GatewayClient {
    async fn get_account(&self, address: &Address) -> Result<AccountOnNetwork> {
        let url = format!("{}/accounts/{}", self.base_url, address);
        let account = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::Network(e.to_string()))?
            .json::<AccountOnNetwork>()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(account)
    }

    async fn submit(&self, tx: &SignedTransaction) -> Result<TxHash> {
        let url = format!("{}/transactions", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(tx)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::Submission(e.to_string()))?
            .json::<SubmitResponse>()
            .await
            .map_err(|e| Error::Submission(e.to_string()))?;
        Ok(TxHash(response.tx_hash))
    }

    async fn get_transaction(&self, hash: &TxHash) -> Result<TransactionOnNetwork> {
        let url = format!("{}/transactions/{}", self.base_url, hash);
        let tx = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::Network(e.to_string()))?
            .json::<TransactionOnNetwork>()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(tx)
    }
}
