//! Blockfrost adapter — the per-entity fallback source.
//!
//! Blockfrost keys DRep endpoints by CIP-105 ids, the opposite convention
//! from Koios; callers hand in normalized ids and the conversion happens
//! here. List endpoints are paginated at 100 rows.

use crate::domain::drep::id;
use crate::domain::drep::wire::{
    BlockfrostDelegatorRow, BlockfrostMetadataResponse, BlockfrostVoteRow,
};
use crate::domain::drep::{Delegator, DrepVote};
use crate::domain::proposal::wire::{BlockfrostProposalResponse, ProposalSummary};
use crate::error::{HttpError, SdkError};
use crate::http::retry::RetryPolicy;
use crate::http::HttpClient;
use crate::provider::DetailSource;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

const PAGE_SIZE: usize = 100;

pub struct BlockfrostProvider {
    http: HttpClient,
}

impl BlockfrostProvider {
    pub fn new(base_url: &str, project_id: &str) -> Self {
        Self {
            http: HttpClient::new(
                base_url,
                vec![("project_id".to_string(), project_id.to_string())],
            ),
        }
    }

    /// Walk a paginated list endpoint to exhaustion.
    async fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, SdkError> {
        let mut all = Vec::new();
        let mut page = 1u32;

        loop {
            let paged = format!("{}?page={}&count={}", path, page, PAGE_SIZE);
            let rows: Vec<T> = match self.http.get(&paged, RetryPolicy::Idempotent).await {
                Ok(rows) => rows,
                Err(HttpError::NotFound(_)) => break,
                Err(e) => return Err(e.into()),
            };

            let len = rows.len();
            all.extend(rows);
            if len < PAGE_SIZE {
                break;
            }
            page += 1;
        }

        Ok(all)
    }
}

#[async_trait]
impl DetailSource for BlockfrostProvider {
    async fn drep_delegators(&self, drep_id: &str) -> Result<Vec<Delegator>, SdkError> {
        let cip105 = id::to_cip105(drep_id)?;
        let path = format!(
            "/governance/dreps/{}/delegators",
            urlencoding::encode(&cip105)
        );
        let rows: Vec<BlockfrostDelegatorRow> = self.fetch_all_pages(&path).await?;
        Ok(rows.into_iter().map(Delegator::from).collect())
    }

    async fn drep_votes(&self, drep_id: &str) -> Result<Vec<DrepVote>, SdkError> {
        let cip105 = id::to_cip105(drep_id)?;
        let path = format!("/governance/dreps/{}/votes", urlencoding::encode(&cip105));
        let rows: Vec<BlockfrostVoteRow> = self.fetch_all_pages(&path).await?;
        Ok(rows.into_iter().map(DrepVote::from).collect())
    }

    async fn drep_metadata(&self, drep_id: &str) -> Result<Option<serde_json::Value>, SdkError> {
        let cip105 = id::to_cip105(drep_id)?;
        let path = format!(
            "/governance/dreps/{}/metadata",
            urlencoding::encode(&cip105)
        );
        match self
            .http
            .get::<BlockfrostMetadataResponse>(&path, RetryPolicy::Idempotent)
            .await
        {
            Ok(resp) => Ok(resp.json_metadata),
            Err(HttpError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn proposal(
        &self,
        tx_hash: &str,
        cert_index: u32,
    ) -> Result<Option<ProposalSummary>, SdkError> {
        let path = format!("/governance/proposals/{}/{}", tx_hash, cert_index);
        match self
            .http
            .get::<BlockfrostProposalResponse>(&path, RetryPolicy::Idempotent)
            .await
        {
            Ok(resp) => Ok(Some(resp.into_summary())),
            Err(HttpError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn health(&self) -> bool {
        self.http
            .get::<serde_json::Value>("/health", RetryPolicy::None)
            .await
            .is_ok()
    }
}
