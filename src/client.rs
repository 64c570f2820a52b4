//! High-level client — `GovClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder, provider wiring, and enrichment tuning.

use crate::domain::drep::client::Dreps;
use crate::domain::proposal::client::Proposals;
use crate::error::SdkError;
use crate::provider::{BlockfrostProvider, BulkSource, DetailSource, KoiosProvider};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::drep::client::Dreps as DrepsClient;
pub use crate::domain::proposal::client::Proposals as ProposalsClient;

/// Pacing and sizing knobs for the enrichment pipeline.
///
/// The defaults mirror what the Koios free tier tolerates in practice:
/// batches of 10 ids, 100 ms between call launches inside a batch, 200 ms
/// between batches, and a 1000-row cap per statistics call. There is no
/// dynamic backpressure — fixed pacing is the entire rate-limit strategy.
#[derive(Debug, Clone)]
pub struct EnrichTuning {
    pub batch_size: usize,
    pub call_stagger: Duration,
    pub batch_delay: Duration,
    pub stat_limit: u32,
}

impl Default for EnrichTuning {
    fn default() -> Self {
        Self {
            batch_size: 10,
            call_stagger: Duration::from_millis(100),
            batch_delay: Duration::from_millis(200),
            stat_limit: 1000,
        }
    }
}

/// The primary entry point for the govscope SDK.
///
/// Provides nested sub-client accessors per domain:
/// `client.dreps()`, `client.proposals()`.
pub struct GovClient {
    pub(crate) bulk: Arc<dyn BulkSource>,
    pub(crate) detail: Arc<dyn DetailSource>,
    pub(crate) tuning: EnrichTuning,
}

impl GovClient {
    pub fn builder() -> GovClientBuilder {
        GovClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn dreps(&self) -> Dreps<'_> {
        Dreps { client: self }
    }

    pub fn proposals(&self) -> Proposals<'_> {
        Proposals { client: self }
    }

    /// True only when both sources answer their health endpoints.
    pub async fn health(&self) -> bool {
        let (bulk_ok, detail_ok) =
            futures_util::join!(self.bulk.health(), self.detail.health());
        bulk_ok && detail_ok
    }
}

impl Clone for GovClient {
    fn clone(&self) -> Self {
        Self {
            bulk: self.bulk.clone(),
            detail: self.detail.clone(),
            tuning: self.tuning.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct GovClientBuilder {
    koios_url: String,
    blockfrost_url: String,
    blockfrost_project_id: String,
    tuning: EnrichTuning,
    bulk: Option<Arc<dyn BulkSource>>,
    detail: Option<Arc<dyn DetailSource>>,
}

impl Default for GovClientBuilder {
    fn default() -> Self {
        Self {
            koios_url: crate::network::DEFAULT_KOIOS_URL.to_string(),
            blockfrost_url: crate::network::DEFAULT_BLOCKFROST_URL.to_string(),
            blockfrost_project_id: String::new(),
            tuning: EnrichTuning::default(),
            bulk: None,
            detail: None,
        }
    }
}

impl GovClientBuilder {
    pub fn koios_url(mut self, url: &str) -> Self {
        self.koios_url = url.to_string();
        self
    }

    pub fn blockfrost_url(mut self, url: &str) -> Self {
        self.blockfrost_url = url.to_string();
        self
    }

    pub fn blockfrost_project_id(mut self, project_id: &str) -> Self {
        self.blockfrost_project_id = project_id.to_string();
        self
    }

    pub fn tuning(mut self, tuning: EnrichTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Replace the bulk source (tests inject mocks here).
    pub fn bulk_source(mut self, source: Arc<dyn BulkSource>) -> Self {
        self.bulk = Some(source);
        self
    }

    /// Replace the per-entity detail source.
    pub fn detail_source(mut self, source: Arc<dyn DetailSource>) -> Self {
        self.detail = Some(source);
        self
    }

    pub fn build(self) -> Result<GovClient, SdkError> {
        let bulk = self
            .bulk
            .unwrap_or_else(|| Arc::new(KoiosProvider::new(&self.koios_url)));
        let detail = self.detail.unwrap_or_else(|| {
            Arc::new(BlockfrostProvider::new(
                &self.blockfrost_url,
                &self.blockfrost_project_id,
            ))
        });

        Ok(GovClient {
            bulk,
            detail,
            tuning: self.tuning,
        })
    }
}
