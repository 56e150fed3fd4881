//! Issue-token workflow
//!
//! Calls `issueSemiFungible` on the system token contract with the
//! issuance deposit, then reads the assigned token identifier out of the
//! finalized transaction and persists it for the other workflows.

use tracing::info;

use crate::errors::{Error, Result};
use crate::extractor::extract_token_identifier;
use crate::payload::{PayloadArg, TransactionPayload};
use crate::store::PersistedConfig;
use crate::types::TransactionStatus;

use super::args::IssueTokenArgs;
use super::{WorkflowContext, WorkflowReport};

pub async fn run(ctx: &WorkflowContext<'_>, args: &IssueTokenArgs) -> Result<WorkflowReport> {
    let payload = TransactionPayload::build(
        "issueSemiFungible",
        &[
            PayloadArg::utf8(&args.token_name),
            PayloadArg::utf8(&args.token_ticker),
        ],
    )?;

    let receiver = ctx.settings.token_contract_address()?;
    let (hash, status) = ctx
        .execute(payload, receiver, ctx.settings.issue_value())
        .await?;
    let mut report = ctx.settle(hash, status)?;
    if report.status != TransactionStatus::Executed {
        return Ok(report);
    }

    // The identifier travels in the finalized transaction's side channel;
    // fetch the full record once more to read it.
    let finalized = ctx.network.get_transaction(&report.tx_hash).await?;
    let identifier =
        extract_token_identifier(&finalized, ctx.rule)?.ok_or(Error::ResultAbsent)?;

    ctx.store.save(&PersistedConfig {
        token_identifier: Some(identifier.clone()),
    })?;
    info!(token_identifier = %identifier, "token issued and identifier persisted");

    report.token_identifier = Some(identifier);
    Ok(report)
}
