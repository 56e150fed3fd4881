//! Mint workflow
//!
//! Creates units of the issued token via `ESDTNFTCreate`, sent to the
//! signer's own address (minting happens on the creator's account).
//! Requires a previously persisted token identifier; stops before building
//! any transaction when it is missing.

use tracing::info;

use crate::errors::Result;
use crate::payload::{PayloadArg, TransactionPayload};

use super::args::MintArgs;
use super::{WorkflowContext, WorkflowReport};

const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs";

pub async fn run(ctx: &WorkflowContext<'_>, args: &MintArgs) -> Result<WorkflowReport> {
    let token_identifier = ctx.store.require_token_identifier()?;
    info!(token_identifier = %token_identifier, quantity = args.quantity, "minting");

    let attributes = format!("metadata:{};tags:{}", args.metadata_cid, args.tags);
    let image_uri = format!("{IPFS_GATEWAY}/{}", args.image_cid);
    let metadata_uri = format!("{IPFS_GATEWAY}/{}", args.metadata_cid);

    let payload = TransactionPayload::build(
        "ESDTNFTCreate",
        &[
            PayloadArg::utf8(&token_identifier),
            PayloadArg::U32(args.quantity),
            PayloadArg::utf8(&args.name),
            // royalties travel in basis points
            PayloadArg::U32(args.royalties * 100),
            // hash argument, unused by this workflow
            PayloadArg::U32(0),
            PayloadArg::utf8(&attributes),
            PayloadArg::utf8(&image_uri),
            PayloadArg::utf8(&metadata_uri),
        ],
    )?;

    let receiver = ctx.signer.address();
    let (hash, status) = ctx.execute(payload, receiver, 0).await?;
    ctx.settle(hash, status)
}
