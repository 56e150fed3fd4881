//! Command workflows: issue-token, set-roles, mint-sft
//!
//! Every workflow runs the same pipeline over injected capabilities:
//! build payload -> build unsigned transaction (nonce from the network,
//! token identifier from the store when needed) -> sign -> submit ->
//! watch to settlement -> extract/persist the outcome.

pub mod args;
pub mod issue;
pub mod mint;
pub mod roles;

use tracing::{info, warn};

use crate::errors::{Error, Result};
use crate::extractor::ExtractionRule;
use crate::network::NetworkClient;
use crate::payload::TransactionPayload;
use crate::settings::Settings;
use crate::signing::{Signer, SigningGateway};
use crate::store::ConfigStore;
use crate::transaction::UnsignedTransaction;
use crate::types::{Account, Address, TransactionStatus, TxHash};
use crate::watcher::{Clock, SubmissionWatcher};

/// Everything a workflow needs, constructor-injected. The workflow owns
/// the in-memory nonce counter for the duration of one command.
pub struct WorkflowContext<'a> {
    pub network: &'a dyn NetworkClient,
    pub signer: &'a dyn Signer,
    pub clock: &'a dyn Clock,
    pub store: &'a ConfigStore,
    pub settings: &'a Settings,
    pub rule: ExtractionRule,
}

/// What a finished workflow reports back to the command boundary.
#[derive(Debug, Clone)]
pub struct WorkflowReport {
    pub tx_hash: TxHash,
    pub status: TransactionStatus,
    pub token_identifier: Option<String>,
}

impl WorkflowReport {
    pub fn explorer_link(&self, settings: &Settings) -> String {
        format!(
            "{}/transactions/{}",
            settings.chain.explorer_url(),
            self.tx_hash
        )
    }
}

impl WorkflowContext<'_> {
    /// Run one transaction through the full lifecycle and return its hash
    /// and terminal (or `Unknown`) status.
    async fn execute(
        &self,
        payload: TransactionPayload,
        receiver: Address,
        value: u128,
    ) -> Result<(TxHash, TransactionStatus)> {
        let sender = self.signer.address();
        let on_network = self.network.get_account(&sender).await?;
        let mut account = Account::new(sender, on_network.nonce);

        let unsigned = UnsignedTransaction::create(
            payload,
            receiver,
            sender,
            value,
            self.settings.gas_limit,
            self.settings.chain.chain_id(),
            account.nonce(),
        )?;
        let signed = SigningGateway::sign(unsigned, self.signer, &mut account)?;

        let watcher = SubmissionWatcher::new(
            self.network,
            self.clock,
            self.settings.poll_interval(),
            self.settings.max_wait(),
        );
        let hash = watcher.submit(&signed).await?;
        info!(hash = %hash, "transaction submitted, awaiting settlement");

        let status = watcher.await_completion(&hash).await?;
        Ok((hash, status))
    }

    /// Fold a settled status into the workflow outcome. `Unknown` is
    /// reported, not failed: the transaction may still settle either way
    /// and the operator decides what to do next.
    fn settle(&self, hash: TxHash, status: TransactionStatus) -> Result<WorkflowReport> {
        match status {
            TransactionStatus::Executed => Ok(WorkflowReport {
                tx_hash: hash,
                status,
                token_identifier: None,
            }),
            TransactionStatus::Unknown => {
                warn!(
                    hash = %hash,
                    max_wait_secs = self.settings.max_wait_secs,
                    "settlement not observed in time; outcome unknown"
                );
                Ok(WorkflowReport {
                    tx_hash: hash,
                    status,
                    token_identifier: None,
                })
            }
            TransactionStatus::Failed | TransactionStatus::Invalid => {
                Err(Error::TransactionFailed { hash, status })
            }
            // await_completion never returns a non-terminal status
            TransactionStatus::Pending => Err(Error::Network(
                "watcher returned a non-terminal status".to_string(),
            )),
        }
    }
}
