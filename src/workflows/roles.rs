//! Set-roles workflow
//!
//! Grants the creator/burn/add-quantity roles on the issued token to the
//! signer's own address. Requires a previously persisted token identifier.

use tracing::info;

use crate::errors::Result;
use crate::payload::{PayloadArg, TransactionPayload};

use super::{WorkflowContext, WorkflowReport};

const ROLES: [&str; 3] = [
    "ESDTRoleNFTCreate",
    "ESDTRoleNFTBurn",
    "ESDTRoleNFTAddQuantity",
];

pub async fn run(ctx: &WorkflowContext<'_>) -> Result<WorkflowReport> {
    // Stop before any network interaction when there is nothing to grant
    // roles on.
    let token_identifier = ctx.store.require_token_identifier()?;
    info!(token_identifier = %token_identifier, "granting special roles");

    let mut args = vec![
        PayloadArg::utf8(&token_identifier),
        PayloadArg::Addr(ctx.signer.address()),
    ];
    args.extend(ROLES.iter().map(|role| PayloadArg::utf8(role)));
    let payload = TransactionPayload::build("setSpecialRole", &args)?;

    let receiver = ctx.settings.token_contract_address()?;
    let (hash, status) = ctx.execute(payload, receiver, 0).await?;
    ctx.settle(hash, status)
}
