//! # govscope
//!
//! Governance data SDK for Cardano-style DRep registries: identifier
//! normalization, metadata cleanup, and multi-provider statistics
//! aggregation behind one client.
//!
//! The crate is layered:
//!
//! - **Identifier codecs** ([`domain::drep::id`], [`domain::proposal`]) —
//!   pure, synchronous conversion between the legacy CIP-105 and current
//!   CIP-129 DRep id forms, and parsing of the two proposal id shapes.
//! - **Metadata normalization** ([`domain::metadata`]) — sanitizing
//!   untrusted anchored JSON and extracting canonical display fields.
//! - **Providers** ([`provider`]) — Koios (bulk) and Blockfrost
//!   (per-entity) adapters behind the [`provider::BulkSource`] and
//!   [`provider::DetailSource`] traits.
//! - **Client** ([`client`]) — [`GovClient`](client::GovClient) with the
//!   batched enrichment pipeline and bulk-to-detail fallback.
//!
//! ## Quick start
//!
//! ```no_run
//! use govscope::prelude::*;
//!
//! # async fn run() -> Result<(), SdkError> {
//! let client = GovClient::builder()
//!     .blockfrost_project_id("preview_abc123")
//!     .build()?;
//!
//! let dreps = vec![Drep::new(
//!     "drep1y29hsnmzssvmjjyc9tst2r2jjkpvam9ph8gzpgmkx3gsxscqrvmvr",
//! )];
//! let enriched = client.dreps().enrich(&dreps).await?;
//! for record in enriched {
//!     println!("{}: {} delegators", record.drep_id, record.delegator_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod domain;
pub mod error;
pub mod http;
pub mod network;
pub mod provider;
pub mod shared;

pub use client::{EnrichTuning, GovClient, GovClientBuilder};
pub use error::{HttpError, IdError, SdkError};

/// Convenience re-exports for the common surface.
pub mod prelude {
    pub use crate::client::{EnrichTuning, GovClient, GovClientBuilder};
    pub use crate::domain::drep::id::{is_script_based, normalize, to_cip105, to_cip129};
    pub use crate::domain::drep::{
        Delegator, Drep, DrepProfile, DrepVote, EnrichedDrep,
    };
    pub use crate::domain::metadata::{
        display_description, display_name, display_website, has_profile, sanitize,
    };
    pub use crate::domain::proposal::ProposalId;
    pub use crate::domain::proposal::wire::ProposalSummary;
    pub use crate::error::{HttpError, IdError, SdkError};
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
    pub use crate::network::{DEFAULT_BLOCKFROST_URL, DEFAULT_KOIOS_URL};
    pub use crate::provider::{BlockfrostProvider, BulkSource, DetailSource, KoiosProvider};
    pub use crate::shared::{VoteKind, VoteTally};
}
