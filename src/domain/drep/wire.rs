//! Provider wire types for DRep statistics.
//!
//! Koios and Blockfrost disagree on field names and numeric encodings, so
//! each gets its own row types; both convert into the domain types in
//! [`super`].

use crate::shared::serde_util::opt_timestamp_secs;
use crate::shared::VoteKind;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Delegator, DrepVote};

/// Lovelace amounts arrive as strings on some endpoints and bare numbers on
/// others.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Lovelace {
    Text(String),
    Number(u64),
}

impl Lovelace {
    pub fn into_string(self) -> String {
        match self {
            Lovelace::Text(s) => s,
            Lovelace::Number(n) => n.to_string(),
        }
    }
}

// ─── Koios (bulk) ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct KoiosDelegatorRow {
    pub stake_address: String,
    #[serde(default)]
    pub amount: Option<Lovelace>,
}

impl From<KoiosDelegatorRow> for Delegator {
    fn from(row: KoiosDelegatorRow) -> Self {
        Delegator {
            address: row.stake_address,
            amount: row.amount.map(Lovelace::into_string).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct KoiosVoteRow {
    #[serde(default)]
    pub proposal_id: Option<String>,
    #[serde(default)]
    pub vote: Option<String>,
    #[serde(default, deserialize_with = "opt_timestamp_secs::deserialize")]
    pub block_time: Option<DateTime<Utc>>,
}

impl From<KoiosVoteRow> for DrepVote {
    fn from(row: KoiosVoteRow) -> Self {
        DrepVote {
            proposal_id: row.proposal_id,
            kind: row.vote.as_deref().and_then(VoteKind::parse),
            cast_at: row.block_time,
            epoch: None,
        }
    }
}

// ─── Blockfrost (per-entity detail) ─────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct BlockfrostDelegatorRow {
    pub address: String,
    #[serde(default)]
    pub amount: Option<Lovelace>,
}

impl From<BlockfrostDelegatorRow> for Delegator {
    fn from(row: BlockfrostDelegatorRow) -> Self {
        Delegator {
            address: row.address,
            amount: row.amount.map(Lovelace::into_string).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockfrostVoteRow {
    #[serde(default)]
    pub proposal_id: Option<String>,
    #[serde(default)]
    pub vote: Option<String>,
    #[serde(default)]
    pub epoch: Option<u32>,
}

impl From<BlockfrostVoteRow> for DrepVote {
    fn from(row: BlockfrostVoteRow) -> Self {
        DrepVote {
            proposal_id: row.proposal_id,
            kind: row.vote.as_deref().and_then(VoteKind::parse),
            cast_at: None,
            epoch: row.epoch,
        }
    }
}

/// Blockfrost metadata envelope — the anchored document sits under
/// `json_metadata`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockfrostMetadataResponse {
    #[serde(default)]
    pub json_metadata: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn koios_vote_row_maps_kind_and_time() {
        let row: KoiosVoteRow = serde_json::from_str(
            r#"{"proposal_id":"gov_action1xyz","vote":"Yes","block_time":1700000000}"#,
        )
        .unwrap();
        let vote: DrepVote = row.into();
        assert_eq!(vote.kind, Some(VoteKind::Yes));
        assert_eq!(vote.cast_at.unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn amount_accepts_string_or_number() {
        let s: KoiosDelegatorRow =
            serde_json::from_str(r#"{"stake_address":"stake1u9x","amount":"42000000"}"#).unwrap();
        let n: BlockfrostDelegatorRow =
            serde_json::from_str(r#"{"address":"stake1u9x","amount":42000000}"#).unwrap();
        assert_eq!(Delegator::from(s).amount, "42000000");
        assert_eq!(Delegator::from(n).amount, "42000000");
    }

    #[test]
    fn unknown_vote_kind_becomes_none() {
        let row: BlockfrostVoteRow =
            serde_json::from_str(r#"{"vote":"present","epoch":512}"#).unwrap();
        let vote: DrepVote = row.into();
        assert_eq!(vote.kind, None);
        assert_eq!(vote.epoch, Some(512));
    }
}
