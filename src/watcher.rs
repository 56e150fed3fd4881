//! SubmissionWatcher: submit, then poll until terminal or out of time
//!
//! This is the state-machine heart of the lifecycle:
//! `Built -> Submitted -> {Executed, Failed, Invalid, TimedOut}`. The poll
//! loop runs at a fixed, configurable cadence against an injected clock,
//! checks its elapsed-time budget on every iteration, and reports `Unknown`
//! on exhaustion instead of failing. Cancellation is the caller's concern:
//! dropping the future mid-wait leaves the network state untouched.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::network::NetworkClient;
use crate::transaction::SignedTransaction;
use crate::types::{TransactionStatus, TxHash};

/// Injected time source so tests can run the loop without real delays.
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
    async fn sleep(&self, duration: Duration);
}

/// Clock backed by the tokio timer (auto-advances under paused test time).
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Submits a signed transaction and watches it to settlement.
pub struct SubmissionWatcher<'a> {
    network: &'a dyn NetworkClient,
    clock: &'a dyn Clock,
    poll_interval: Duration,
    max_wait: Duration,
}

impl<'a> SubmissionWatcher<'a> {
    pub fn new(
        network: &'a dyn NetworkClient,
        clock: &'a dyn Clock,
        poll_interval: Duration,
        max_wait: Duration,
    ) -> Self {
        Self {
            network,
            clock,
            poll_interval,
            max_wait,
        }
    }

    /// Hand the signed transaction to the network. No automatic retry:
    /// the caller may resubmit the same signed transaction, which the
    /// network treats idempotently.
    pub async fn submit(&self, tx: &SignedTransaction) -> Result<TxHash> {
        let hash = self.network.submit(tx).await?;
        debug!(hash = %hash, nonce = tx.tx.nonce, "transaction submitted");
        Ok(hash)
    }

    /// Poll the network for `hash` until a terminal status is observed or
    /// the time budget runs out, in which case `Unknown` is returned. A
    /// failed status query counts as a non-terminal observation; the
    /// elapsed-time bound still ends the loop.
    pub async fn await_completion(&self, hash: &TxHash) -> Result<TransactionStatus> {
        let started = self.clock.now();
        loop {
            match self.network.get_transaction(hash).await {
                Ok(tx) => {
                    let status = tx.status();
                    debug!(hash = %hash, status = %status, "poll");
                    if status.is_terminal() {
                        return Ok(status);
                    }
                }
                Err(e) => {
                    warn!(hash = %hash, error = %e, "status query failed; will poll again");
                }
            }

            let elapsed = self.clock.now().saturating_duration_since(started);
            if elapsed >= self.max_wait {
                warn!(hash = %hash, elapsed_secs = elapsed.as_secs(), "watch budget exhausted");
                return Ok(TransactionStatus::Unknown);
            }
            self.clock.sleep(self.poll_interval).await;
        }
    }
}
