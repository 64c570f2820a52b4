//! DRep domain — identifiers, base records, enrichment.

pub mod client;
pub mod id;
pub mod wire;

use crate::shared::VoteTally;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A base DRep record as produced by a registry listing, before enrichment.
///
/// `metadata` is the raw anchored document from a prior metadata fetch, if
/// any; it is sanitized lazily when profile fields are derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drep {
    pub drep_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voting_power: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Drep {
    pub fn new(drep_id: impl Into<String>) -> Self {
        Self {
            drep_id: drep_id.into(),
            voting_power: None,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// A delegation to a DRep: counterparty stake address and lovelace amount.
///
/// Amounts stay stringly typed — they exceed `u64` on whale accounts and this
/// layer never does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegator {
    pub address: String,
    pub amount: String,
}

/// A single governance vote cast by a DRep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrepVote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal_id: Option<String>,
    /// `None` when the provider reported a vote kind we do not recognize;
    /// such votes count toward `vote_count` but not the tally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<crate::shared::VoteKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch: Option<u32>,
}

/// Canonical display fields extracted from sanitized metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrepProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl DrepProfile {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.website.is_none()
    }
}

/// A base record with per-entity statistics attached.
///
/// Built fresh per `enrich` call and never persisted here. Counts default to
/// zero when neither source could supply data — enrichment unavailability
/// must never block display of the base record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedDrep {
    /// Normalized (CIP-129 or sentinel) identifier.
    pub drep_id: String,
    pub delegator_count: u64,
    pub vote_count: u64,
    pub votes: VoteTally,
    pub has_profile: bool,
}
