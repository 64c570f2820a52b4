//! Provider adapters.
//!
//! Two upstream sources with different granularity and reliability:
//! Koios answers bulk statistics queries quickly but keys everything by
//! CIP-129 ids and rate-limits aggressively; Blockfrost is slower,
//! per-entity, keyed by CIP-105 ids, but independently reliable. The
//! enrichment pipeline talks to both through these traits so the fallback
//! policy stays testable without a network.

pub mod blockfrost;
pub mod koios;

use crate::domain::drep::{Delegator, DrepVote};
use crate::domain::proposal::wire::ProposalSummary;
use crate::error::SdkError;
use async_trait::async_trait;

pub use blockfrost::BlockfrostProvider;
pub use koios::KoiosProvider;

/// The bulk-query source (Koios-shaped).
///
/// Implementations take normalized (CIP-129 or sentinel) DRep ids and return
/// empty lists for unknown entities or rate-limited calls — "no data" is not
/// an error at this interface.
#[async_trait]
pub trait BulkSource: Send + Sync {
    async fn drep_delegators(
        &self,
        drep_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Delegator>, SdkError>;

    async fn drep_votes(
        &self,
        drep_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<DrepVote>, SdkError>;

    /// Look up a proposal by its compact `gov_action1…` token.
    async fn proposal(&self, compact_id: &str) -> Result<Option<ProposalSummary>, SdkError>;

    async fn health(&self) -> bool;
}

/// The per-entity fallback source (Blockfrost-shaped).
#[async_trait]
pub trait DetailSource: Send + Sync {
    async fn drep_delegators(&self, drep_id: &str) -> Result<Vec<Delegator>, SdkError>;

    async fn drep_votes(&self, drep_id: &str) -> Result<Vec<DrepVote>, SdkError>;

    /// The anchored metadata document for a DRep, if one is registered.
    async fn drep_metadata(&self, drep_id: &str) -> Result<Option<serde_json::Value>, SdkError>;

    /// Look up a proposal by transaction hash and certificate index.
    async fn proposal(
        &self,
        tx_hash: &str,
        cert_index: u32,
    ) -> Result<Option<ProposalSummary>, SdkError>;

    async fn health(&self) -> bool;
}
