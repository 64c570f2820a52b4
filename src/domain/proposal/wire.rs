//! Provider wire types for proposal lookups.

use crate::domain::drep::wire::Lovelace;
use crate::domain::proposal::ProposalId;
use serde::{Deserialize, Serialize};

/// A proposal record merged from either provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalSummary {
    /// Canonical id: the compact token when known, else `tx_hash#cert_index`.
    pub proposal_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_hash: Option<String>,
    /// Anchored metadata document. Sanitized at the client boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Raw Koios `/proposal_list` row.
#[derive(Debug, Clone, Deserialize)]
pub struct KoiosProposalRow {
    #[serde(default)]
    pub proposal_id: Option<String>,
    #[serde(default)]
    pub proposal_tx_hash: Option<String>,
    #[serde(default)]
    pub proposal_index: Option<u32>,
    #[serde(default)]
    pub proposal_type: Option<String>,
    #[serde(default)]
    pub deposit: Option<Lovelace>,
    #[serde(default)]
    pub meta_url: Option<String>,
    #[serde(default)]
    pub meta_hash: Option<String>,
    #[serde(default)]
    pub meta_json: Option<serde_json::Value>,
}

impl KoiosProposalRow {
    pub fn into_summary(self) -> Option<ProposalSummary> {
        let proposal_id = self.proposal_id?;
        Some(ProposalSummary {
            proposal_id,
            tx_hash: self.proposal_tx_hash,
            cert_index: self.proposal_index,
            proposal_type: self.proposal_type,
            deposit: self.deposit.map(|d| d.into_string()),
            meta_url: self.meta_url,
            meta_hash: self.meta_hash,
            metadata: self.meta_json,
        })
    }
}

/// Raw Blockfrost `/governance/proposals/{hash}/{idx}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockfrostProposalResponse {
    pub tx_hash: String,
    pub cert_index: u32,
    #[serde(default)]
    pub governance_type: Option<String>,
    #[serde(default)]
    pub deposit: Option<Lovelace>,
}

impl BlockfrostProposalResponse {
    pub fn into_summary(self) -> ProposalSummary {
        ProposalSummary {
            proposal_id: ProposalId::format(&self.tx_hash, self.cert_index),
            tx_hash: Some(self.tx_hash),
            cert_index: Some(self.cert_index),
            proposal_type: self.governance_type,
            deposit: self.deposit.map(|d| d.into_string()),
            meta_url: None,
            meta_hash: None,
            metadata: None,
        }
    }
}
