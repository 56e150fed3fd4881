//! Watch-loop timing and termination, under paused tokio time

use std::time::Duration;

use tokio::time::Instant;

use crate::tests::stubs::{executed_tx_plain, StubNetwork, STUB_HASH};
use crate::types::{TransactionStatus, TxHash};
use crate::watcher::{SubmissionWatcher, TokioClock};

const INTERVAL: Duration = Duration::from_secs(1);
const MAX_WAIT: Duration = Duration::from_secs(10);

fn hash() -> TxHash {
    TxHash(STUB_HASH.to_string())
}

#[tokio::test(start_paused = true)]
async fn pending_then_executed_terminates_with_executed() {
    const K: usize = 3;
    let network = StubNetwork::new(0, K, executed_tx_plain());
    let clock = TokioClock;
    let watcher = SubmissionWatcher::new(&network, &clock, INTERVAL, MAX_WAIT);

    let status = watcher.await_completion(&hash()).await.unwrap();
    assert_eq!(status, TransactionStatus::Executed);

    // K pending observations plus the terminal one, and never more than
    // the budget allows.
    let max_polls = (MAX_WAIT.as_secs() / INTERVAL.as_secs()) as usize + 1;
    assert!(network.polls() >= K + 1);
    assert!(network.polls() <= max_polls);
}

#[tokio::test(start_paused = true)]
async fn never_terminal_times_out_at_budget_not_earlier() {
    let network = StubNetwork::new(0, usize::MAX, executed_tx_plain());
    let clock = TokioClock;
    let watcher = SubmissionWatcher::new(&network, &clock, INTERVAL, MAX_WAIT);

    let started = Instant::now();
    let status = watcher.await_completion(&hash()).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(status, TransactionStatus::Unknown);
    assert!(elapsed >= MAX_WAIT, "gave up early at {elapsed:?}");
    assert!(elapsed < MAX_WAIT + 2 * INTERVAL, "overran budget: {elapsed:?}");
    // one poll per interval plus the initial one
    let max_polls = (MAX_WAIT.as_secs() / INTERVAL.as_secs()) as usize + 1;
    assert_eq!(network.polls(), max_polls);
}

#[tokio::test(start_paused = true)]
async fn immediate_terminal_status_needs_one_poll() {
    let network = StubNetwork::new(0, 0, executed_tx_plain());
    let clock = TokioClock;
    let watcher = SubmissionWatcher::new(&network, &clock, INTERVAL, MAX_WAIT);

    let status = watcher.await_completion(&hash()).await.unwrap();
    assert_eq!(status, TransactionStatus::Executed);
    assert_eq!(network.polls(), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_status_is_reported_as_terminal() {
    let final_tx = crate::network::TransactionOnNetwork {
        status: "fail".to_string(),
        ..Default::default()
    };
    let network = StubNetwork::new(0, 1, final_tx);
    let clock = TokioClock;
    let watcher = SubmissionWatcher::new(&network, &clock, INTERVAL, MAX_WAIT);

    let status = watcher.await_completion(&hash()).await.unwrap();
    assert_eq!(status, TransactionStatus::Failed);
}

/// Network that errors on the first poll, then reports success. A blip
/// must not abort the watch.
struct BlippyNetwork {
    inner: StubNetwork,
}

#[async_trait::async_trait]
impl crate::network::NetworkClient for BlippyNetwork {
    async fn get_account(
        &self,
        address: &crate::types::Address,
    ) -> crate::errors::Result<crate::network::AccountOnNetwork> {
        self.inner.get_account(address).await
    }

    async fn submit(
        &self,
        tx: &crate::transaction::SignedTransaction,
    ) -> crate::errors::Result<TxHash> {
        self.inner.submit(tx).await
    }

    async fn get_transaction(
        &self,
        hash: &TxHash,
    ) -> crate::errors::Result<crate::network::TransactionOnNetwork> {
        let polls = self
            .inner
            .poll_calls
            .load(std::sync::atomic::Ordering::SeqCst);
        if polls == 0 {
            self.inner
                .poll_calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            return Err(crate::errors::Error::Network("blip".into()));
        }
        self.inner.get_transaction(hash).await
    }
}

#[tokio::test(start_paused = true)]
async fn transport_blip_during_poll_does_not_abort() {
    let network = BlippyNetwork {
        inner: StubNetwork::new(0, 1, executed_tx_plain()),
    };
    let clock = TokioClock;
    let watcher = SubmissionWatcher::new(&network, &clock, INTERVAL, MAX_WAIT);

    let status = watcher.await_completion(&hash()).await.unwrap();
    assert_eq!(status, TransactionStatus::Executed);
}
