//! Result extraction from a finalized transaction
//!
//! The token issuance contract reports the assigned identifier through a
//! side channel. Two rules exist historically and the selection is always
//! explicit: `FirstLogTopic` (the gateway API path, canonical for every
//! named environment) reads the first emitted log's first topic as base64;
//! `LastResultSegment` (legacy proxy path) reads the last `@`-separated
//! segment of the first embedded contract result as hex. Nothing selects a
//! rule implicitly.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::errors::{Error, Result};
use crate::network::TransactionOnNetwork;

/// Which side channel carries the result, and its encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionRule {
    /// First emitted log's first topic, base64 -> UTF-8. Canonical.
    #[default]
    FirstLogTopic,
    /// Last `@`-segment of the first contract result's data, hex -> UTF-8.
    LastResultSegment,
}

/// Pull the token identifier out of a finalized transaction.
///
/// `Ok(None)` means the expected field was simply absent (nothing to
/// persist). A field that is present but does not decode is a reportable
/// inconsistency and comes back as [`Error::ResultAbsent`].
pub fn extract_token_identifier(
    tx: &TransactionOnNetwork,
    rule: ExtractionRule,
) -> Result<Option<String>> {
    let raw = match rule {
        ExtractionRule::FirstLogTopic => tx
            .logs
            .as_ref()
            .and_then(|logs| logs.events.first())
            .and_then(|event| event.topics.first())
            .cloned(),
        ExtractionRule::LastResultSegment => tx
            .results
            .first()
            .and_then(|result| result.data.rsplit('@').next())
            .map(str::to_string),
    };

    let Some(raw) = raw else {
        return Ok(None);
    };

    let bytes = match rule {
        ExtractionRule::FirstLogTopic => {
            BASE64.decode(raw.as_bytes()).map_err(|_| Error::ResultAbsent)?
        }
        ExtractionRule::LastResultSegment => hex::decode(&raw).map_err(|_| Error::ResultAbsent)?,
    };
    let value = String::from_utf8(bytes).map_err(|_| Error::ResultAbsent)?;
    Ok(Some(value))
}
