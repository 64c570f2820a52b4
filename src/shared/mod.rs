//! Shared types used across all domains.

pub mod serde_util;

use serde::{Deserialize, Serialize};

/// A DRep's vote on a governance action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Yes,
    No,
    Abstain,
}

impl VoteKind {
    pub fn as_str(&self) -> &str {
        match self {
            VoteKind::Yes => "yes",
            VoteKind::No => "no",
            VoteKind::Abstain => "abstain",
        }
    }

    /// Case-insensitive parse. Koios reports `Yes`/`No`/`Abstain`,
    /// Blockfrost lowercase.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yes" => Some(VoteKind::Yes),
            "no" => Some(VoteKind::No),
            "abstain" => Some(VoteKind::Abstain),
            _ => None,
        }
    }
}

/// Per-kind vote counts for a single DRep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub yes: u64,
    pub no: u64,
    pub abstain: u64,
}

impl VoteTally {
    pub fn total(&self) -> u64 {
        self.yes + self.no + self.abstain
    }

    pub fn record(&mut self, kind: VoteKind) {
        match kind {
            VoteKind::Yes => self.yes += 1,
            VoteKind::No => self.no += 1,
            VoteKind::Abstain => self.abstain += 1,
        }
    }
}
