//! Proposal domain — governance action identifiers and lookup.

pub mod client;
pub mod wire;

use crate::error::IdError;

/// CIP-129 governance action ids are bech32 under this prefix. The body is
/// opaque without a network round-trip, so we carry the token whole.
const GOV_ACTION_PREFIX: &str = "gov_action1";

const TX_HASH_HEX_LEN: usize = 64;

/// A parsed proposal identifier.
///
/// Upstream providers disagree on the shape: Koios keys proposals by the
/// compact `gov_action1…` token, Blockfrost by `tx_hash#cert_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProposalId {
    /// Self-describing bech32 token; no components extractable offline.
    Compact(String),
    /// Transaction hash (64 hex chars) plus certificate index.
    Composite { tx_hash: String, cert_index: u32 },
}

impl ProposalId {
    /// Parse a proposal id string. First match wins:
    /// `gov_action1…`, then `<64 hex>#<digits>`, then bare `<64 hex>`
    /// (implicit index 0).
    pub fn parse(id: &str) -> Result<Self, IdError> {
        if id.starts_with(GOV_ACTION_PREFIX) {
            return Ok(ProposalId::Compact(id.to_string()));
        }

        if let Some((hash, index)) = id.split_once('#') {
            if is_tx_hash(hash) {
                if let Ok(cert_index) = index.parse::<u32>() {
                    return Ok(ProposalId::Composite {
                        tx_hash: hash.to_string(),
                        cert_index,
                    });
                }
            }
            return Err(IdError::UnrecognizedProposalFormat(id.to_string()));
        }

        if is_tx_hash(id) {
            return Ok(ProposalId::Composite {
                tx_hash: id.to_string(),
                cert_index: 0,
            });
        }

        Err(IdError::UnrecognizedProposalFormat(id.to_string()))
    }

    /// Render a composite id. Exact inverse of the composite parse rules.
    pub fn format(tx_hash: &str, cert_index: u32) -> String {
        format!("{}#{}", tx_hash, cert_index)
    }
}

impl std::fmt::Display for ProposalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProposalId::Compact(token) => f.write_str(token),
            ProposalId::Composite {
                tx_hash,
                cert_index,
            } => write!(f, "{}#{}", tx_hash, cert_index),
        }
    }
}

fn is_tx_hash(s: &str) -> bool {
    s.len() == TX_HASH_HEX_LEN && s.chars().all(|c| c.is_ascii_hexdigit())
}
