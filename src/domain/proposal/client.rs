//! Proposals sub-client — lookup routed by id shape.

use crate::client::GovClient;
use crate::domain::metadata;
use crate::domain::proposal::wire::ProposalSummary;
use crate::domain::proposal::ProposalId;
use crate::error::SdkError;

/// Sub-client for governance proposal operations.
pub struct Proposals<'a> {
    pub(crate) client: &'a GovClient,
}

impl Proposals<'_> {
    /// Look up a proposal by id in any accepted shape.
    ///
    /// Compact `gov_action1…` tokens route to the bulk source, which indexes
    /// by that token; `tx_hash#cert_index` (and bare hash) forms route to the
    /// per-entity source. Anchored metadata on the result is sanitized before
    /// it leaves the client.
    pub async fn get(&self, id: &str) -> Result<Option<ProposalSummary>, SdkError> {
        let summary = match ProposalId::parse(id)? {
            ProposalId::Compact(token) => self.client.bulk.proposal(&token).await?,
            ProposalId::Composite {
                tx_hash,
                cert_index,
            } => self.client.detail.proposal(&tx_hash, cert_index).await?,
        };

        Ok(summary.map(|mut summary| {
            summary.metadata = summary.metadata.as_ref().and_then(metadata::sanitize);
            summary
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{EnrichTuning, GovClient};
    use crate::domain::drep::{Delegator, DrepVote};
    use crate::error::IdError;
    use crate::provider::{BulkSource, DetailSource};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    const HASH: &str = "a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6e7f8a9b0c1d2e3f4a5b6c7d8e9f0a1b2";

    struct StubBulk {
        proposal: Option<ProposalSummary>,
    }

    #[async_trait]
    impl BulkSource for StubBulk {
        async fn drep_delegators(
            &self,
            _drep_id: &str,
            _limit: Option<u32>,
        ) -> Result<Vec<Delegator>, SdkError> {
            Ok(Vec::new())
        }

        async fn drep_votes(
            &self,
            _drep_id: &str,
            _limit: Option<u32>,
        ) -> Result<Vec<DrepVote>, SdkError> {
            Ok(Vec::new())
        }

        async fn proposal(&self, _id: &str) -> Result<Option<ProposalSummary>, SdkError> {
            Ok(self.proposal.clone())
        }

        async fn health(&self) -> bool {
            true
        }
    }

    struct StubDetail {
        proposal: Option<ProposalSummary>,
    }

    #[async_trait]
    impl DetailSource for StubDetail {
        async fn drep_delegators(&self, _drep_id: &str) -> Result<Vec<Delegator>, SdkError> {
            Ok(Vec::new())
        }

        async fn drep_votes(&self, _drep_id: &str) -> Result<Vec<DrepVote>, SdkError> {
            Ok(Vec::new())
        }

        async fn drep_metadata(
            &self,
            _drep_id: &str,
        ) -> Result<Option<serde_json::Value>, SdkError> {
            Ok(None)
        }

        async fn proposal(
            &self,
            tx_hash: &str,
            cert_index: u32,
        ) -> Result<Option<ProposalSummary>, SdkError> {
            Ok(self.proposal.clone().filter(|p| {
                p.tx_hash.as_deref() == Some(tx_hash) && p.cert_index == Some(cert_index)
            }))
        }

        async fn health(&self) -> bool {
            true
        }
    }

    fn summary(proposal_id: &str) -> ProposalSummary {
        ProposalSummary {
            proposal_id: proposal_id.to_string(),
            tx_hash: Some(HASH.to_string()),
            cert_index: Some(0),
            proposal_type: Some("InfoAction".to_string()),
            deposit: None,
            meta_url: None,
            meta_hash: None,
            metadata: None,
        }
    }

    fn client(bulk: StubBulk, detail: StubDetail) -> GovClient {
        GovClient::builder()
            .tuning(EnrichTuning {
                batch_size: 10,
                call_stagger: Duration::ZERO,
                batch_delay: Duration::ZERO,
                stat_limit: 1000,
            })
            .bulk_source(Arc::new(bulk))
            .detail_source(Arc::new(detail))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn compact_ids_route_to_the_bulk_source() {
        let token = "gov_action1qpzm7x5lwkwnnkj243v2ar2rkvv9slsg5rqmm7xv0m";
        let client = client(
            StubBulk {
                proposal: Some(summary(token)),
            },
            StubDetail { proposal: None },
        );

        let found = client.proposals().get(token).await.unwrap().unwrap();
        assert_eq!(found.proposal_id, token);
    }

    #[tokio::test]
    async fn composite_ids_route_to_the_detail_source() {
        let composite = format!("{}#0", HASH);
        let client = client(
            StubBulk { proposal: None },
            StubDetail {
                proposal: Some(summary(&composite)),
            },
        );

        let found = client.proposals().get(&composite).await.unwrap().unwrap();
        assert_eq!(found.proposal_id, composite);

        // Bare hash means certificate index zero, same route.
        let found = client.proposals().get(HASH).await.unwrap().unwrap();
        assert_eq!(found.cert_index, Some(0));
    }

    #[tokio::test]
    async fn metadata_is_sanitized_on_the_way_out() {
        let token = "gov_action1qpzm7x5lwkwnnkj243v2ar2rkvv9slsg5rqmm7xv0m";
        let mut raw = summary(token);
        // "7b227469746c65223a2241626f6c697368207468696e6773227d" is
        // {"title":"Abolish things"} hex-encoded.
        raw.metadata = Some(json!({
            "body": "7b227469746c65223a2241626f6c697368207468696e6773227d"
        }));
        let client = client(
            StubBulk {
                proposal: Some(raw),
            },
            StubDetail { proposal: None },
        );

        let found = client.proposals().get(token).await.unwrap().unwrap();
        let clean = found.metadata.unwrap();
        assert_eq!(clean["body"]["title"], "Abolish things");
    }

    #[tokio::test]
    async fn unknown_proposals_are_none_not_errors() {
        let client = client(StubBulk { proposal: None }, StubDetail { proposal: None });
        let composite = format!("{}#9", HASH);
        assert!(client.proposals().get(&composite).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unparseable_ids_error_before_any_network_call() {
        let client = client(StubBulk { proposal: None }, StubDetail { proposal: None });
        let result = client.proposals().get("definitely-not-an-id").await;
        assert!(matches!(
            result,
            Err(SdkError::Id(IdError::UnrecognizedProposalFormat(_)))
        ));
    }
}
