//! Koios adapter — the bulk statistics source.

use crate::domain::drep::wire::{KoiosDelegatorRow, KoiosVoteRow};
use crate::domain::drep::{Delegator, DrepVote};
use crate::domain::proposal::wire::{KoiosProposalRow, ProposalSummary};
use crate::error::{HttpError, SdkError};
use crate::http::retry::RetryPolicy;
use crate::http::HttpClient;
use crate::provider::BulkSource;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

pub struct KoiosProvider {
    http: HttpClient,
}

impl KoiosProvider {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: HttpClient::new(
                base_url,
                vec![("Content-Type".to_string(), "application/json".to_string())],
            ),
        }
    }

    /// POST a Koios filter query, treating 404 and 429 as "no rows".
    ///
    /// Koios answers 429 well before its documented quota under burst load;
    /// the pipeline's pacing is the mitigation, so a rate-limited call simply
    /// contributes nothing.
    async fn query_rows<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<Vec<T>, SdkError> {
        match self
            .http
            .post::<Vec<T>, _>(path, &body, RetryPolicy::None)
            .await
        {
            Ok(rows) => Ok(rows),
            Err(HttpError::NotFound(_)) => Ok(Vec::new()),
            Err(HttpError::RateLimited) => {
                tracing::warn!("Koios rate limited (429): {}", path);
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn with_limit(path: &str, limit: Option<u32>) -> String {
        match limit {
            Some(n) => format!("{}?limit={}", path, n),
            None => path.to_string(),
        }
    }
}

#[async_trait]
impl BulkSource for KoiosProvider {
    async fn drep_delegators(
        &self,
        drep_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Delegator>, SdkError> {
        let path = Self::with_limit("/drep_delegators", limit);
        let rows: Vec<KoiosDelegatorRow> = self
            .query_rows(&path, json!({ "_drep_id": drep_id }))
            .await?;
        Ok(rows.into_iter().map(Delegator::from).collect())
    }

    async fn drep_votes(
        &self,
        drep_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<DrepVote>, SdkError> {
        let path = Self::with_limit("/drep_votes", limit);
        let rows: Vec<KoiosVoteRow> = self
            .query_rows(&path, json!({ "_drep_id": drep_id }))
            .await?;
        Ok(rows.into_iter().map(DrepVote::from).collect())
    }

    async fn proposal(&self, compact_id: &str) -> Result<Option<ProposalSummary>, SdkError> {
        let path = format!(
            "/proposal_list?proposal_id=eq.{}",
            urlencoding::encode(compact_id)
        );
        let rows: Vec<KoiosProposalRow> =
            match self.http.get(&path, RetryPolicy::Idempotent).await {
                Ok(rows) => rows,
                Err(HttpError::NotFound(_)) | Err(HttpError::RateLimited) => Vec::new(),
                Err(e) => return Err(e.into()),
            };
        Ok(rows
            .into_iter()
            .filter_map(KoiosProposalRow::into_summary)
            .find(|summary| summary.proposal_id == compact_id))
    }

    async fn health(&self) -> bool {
        self.http
            .get::<serde_json::Value>("/tip", RetryPolicy::None)
            .await
            .is_ok()
    }
}
