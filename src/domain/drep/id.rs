//! DRep identifier codec — CIP-105 ⇄ CIP-129.
//!
//! A DRep credential is 28 raw bytes. Two bech32 encodings of it circulate:
//!
//! * **CIP-105** (legacy): the bare 28 bytes, with the credential kind carried
//!   by the prefix — `drep1…` for key hashes, `drep_script1…` for scripts.
//! * **CIP-129** (current): a header byte (`0x22` key, `0x23` script) followed
//!   by the same 28 bytes, always under the single `drep` prefix.
//!
//! Conversion is lossless in both directions. The four sentinel ids
//! (`drep_always_abstain` etc.) are not bech32 at all and must be recognized
//! before any decode attempt.

use crate::error::IdError;
use bech32::{Bech32, Hrp};

const HRP_DREP: &str = "drep";
const HRP_DREP_SCRIPT: &str = "drep_script";

/// CIP-129 header byte for a key-hash credential.
pub const HEADER_KEY: u8 = 0x22;
/// CIP-129 header byte for a script-hash credential.
pub const HEADER_SCRIPT: u8 = 0x23;

const CRED_LEN: usize = 28;

/// Voting-behavior sentinels. Valid DRep ids, but carry no credential and are
/// never fed to the bech32 codec.
pub const SENTINEL_DREPS: &[&str] = &[
    "drep_always_abstain",
    "drep_always_no_confidence",
    "drep_always_yes",
    "drep_always_no",
];

/// Which of the two serializations a decoded payload uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrepIdForm {
    /// Legacy: 28 raw credential bytes.
    Cip105,
    /// Current: header byte + 28 credential bytes.
    Cip129,
}

pub fn is_sentinel(id: &str) -> bool {
    SENTINEL_DREPS.contains(&id)
}

/// Classify a decoded payload by length.
pub fn classify(raw: &[u8]) -> Result<DrepIdForm, IdError> {
    match raw.len() {
        CRED_LEN => Ok(DrepIdForm::Cip105),
        len if len == CRED_LEN + 1 => Ok(DrepIdForm::Cip129),
        len => Err(IdError::InvalidLength { len }),
    }
}

/// Bech32-decode a DRep id to its payload bytes.
///
/// Sentinels are rejected here: they have no binary form.
pub fn decode_to_raw(id: &str) -> Result<Vec<u8>, IdError> {
    let (_, raw) = decode(id)?;
    Ok(raw)
}

fn decode(id: &str) -> Result<(String, Vec<u8>), IdError> {
    if is_sentinel(id) {
        return Err(IdError::Malformed {
            id: id.to_string(),
            reason: "sentinel ids have no binary encoding".to_string(),
        });
    }

    let (hrp, raw) = bech32::decode(id).map_err(|e| IdError::Malformed {
        id: id.to_string(),
        reason: e.to_string(),
    })?;

    let hrp = hrp.to_string();
    if hrp != HRP_DREP && hrp != HRP_DREP_SCRIPT {
        return Err(IdError::UnknownPrefix(hrp));
    }
    Ok((hrp, raw))
}

fn encode(hrp: &str, raw: &[u8]) -> Result<String, IdError> {
    let hrp = Hrp::parse(hrp).expect("static hrp literal");
    bech32::encode::<Bech32>(hrp, raw).map_err(|e| IdError::Malformed {
        id: hex::encode(raw),
        reason: e.to_string(),
    })
}

/// Whether the id points at a script credential.
///
/// Legacy ids carry this in the prefix, current ids in the header byte.
/// Sentinels are neither key- nor script-based; they report `false`.
pub fn is_script_based(id: &str) -> Result<bool, IdError> {
    if is_sentinel(id) {
        return Ok(false);
    }
    let (hrp, raw) = decode(id)?;
    match classify(&raw)? {
        DrepIdForm::Cip105 => Ok(hrp == HRP_DREP_SCRIPT),
        DrepIdForm::Cip129 => Ok(raw[0] == HEADER_SCRIPT),
    }
}

/// Convert any DRep id to CIP-129 form. Idempotent; sentinels pass through.
pub fn to_cip129(id: &str) -> Result<String, IdError> {
    if is_sentinel(id) {
        return Ok(id.to_string());
    }
    let (hrp, raw) = decode(id)?;
    match classify(&raw)? {
        DrepIdForm::Cip129 => Ok(id.to_string()),
        DrepIdForm::Cip105 => {
            let header = if hrp == HRP_DREP_SCRIPT {
                HEADER_SCRIPT
            } else {
                HEADER_KEY
            };
            let mut payload = Vec::with_capacity(CRED_LEN + 1);
            payload.push(header);
            payload.extend_from_slice(&raw);
            encode(HRP_DREP, &payload)
        }
    }
}

/// Convert any DRep id to CIP-105 form. Idempotent; sentinels pass through.
pub fn to_cip105(id: &str) -> Result<String, IdError> {
    if is_sentinel(id) {
        return Ok(id.to_string());
    }
    let (_, raw) = decode(id)?;
    match classify(&raw)? {
        DrepIdForm::Cip105 => Ok(id.to_string()),
        DrepIdForm::Cip129 => {
            let hrp = match raw[0] {
                HEADER_SCRIPT => HRP_DREP_SCRIPT,
                HEADER_KEY => HRP_DREP,
                other => {
                    return Err(IdError::Malformed {
                        id: id.to_string(),
                        reason: format!("unknown credential header byte 0x{:02x}", other),
                    })
                }
            };
            encode(hrp, &raw[1..])
        }
    }
}

/// Normalize to the canonical internal form: CIP-129, sentinels unchanged.
///
/// Provider responses are keyed by this form; every id entering the
/// aggregation pipeline goes through here first.
pub fn normalize(id: &str) -> Result<String, IdError> {
    to_cip129(id)
}
