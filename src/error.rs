//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Identifier error: {0}")]
    Id(#[from] IdError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Governance identifier errors.
///
/// These are local, caller-facing failures: a malformed DRep or proposal id is
/// a genuine input error and is never silently defaulted. Provider
/// unavailability, by contrast, degrades to empty statistics and never
/// surfaces through this type.
#[derive(Error, Debug)]
pub enum IdError {
    /// Bech32 decode failed — bad checksum, bad charset, or no separator.
    #[error("Malformed identifier {id:?}: {reason}")]
    Malformed { id: String, reason: String },

    /// Decoded payload is neither 28 (CIP-105) nor 29 (CIP-129) bytes.
    #[error("Invalid credential length: {len} bytes")]
    InvalidLength { len: usize },

    /// Human-readable prefix is not a recognized DRep prefix.
    #[error("Unknown identifier prefix {0:?}")]
    UnknownPrefix(String),

    /// Proposal id matches neither the gov_action form nor tx_hash[#index].
    #[error("Unrecognized proposal id format: {0:?}")]
    UnrecognizedProposalFormat(String),
}
