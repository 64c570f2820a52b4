//! DReps sub-client — enrichment pipeline and profile extraction.
//!
//! Enrichment fans batched, staggered statistic calls out to the bulk source
//! and merges the results by normalized id. When the bulk source yields no
//! usable data for the *entire* input — a global health signal, not a
//! per-id one — the whole set is re-enriched from the per-entity source.
//! Neither source failing ever fails the call: records degrade to zero
//! counts instead.

use crate::client::GovClient;
use crate::domain::drep::{id, Delegator, Drep, DrepProfile, DrepVote, EnrichedDrep};
use crate::domain::metadata;
use crate::error::SdkError;
use crate::shared::VoteTally;
use futures_timer::Delay;
use futures_util::future::join_all;
use futures_util::join;
use std::collections::HashMap;

/// Sub-client for DRep operations.
pub struct Dreps<'a> {
    pub(crate) client: &'a GovClient,
}

/// Statistics gathered for one normalized id from whichever source won.
#[derive(Debug, Default)]
struct SourceStats {
    delegators: Vec<Delegator>,
    votes: Vec<DrepVote>,
}

impl SourceStats {
    fn is_empty(&self) -> bool {
        self.delegators.is_empty() && self.votes.is_empty()
    }
}

/// Global fallback predicate: true only when every statistic of every kind
/// for every id came back empty. A single delegator or vote anywhere keeps
/// the bulk results.
fn decide_fallback(results: &HashMap<String, SourceStats>) -> bool {
    results.values().all(SourceStats::is_empty)
}

fn ok_or_empty<T>(result: Result<Vec<T>, SdkError>, drep_id: &str, what: &str) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            tracing::debug!(drep_id, what, error = %e, "statistic call failed; defaulting to empty");
            Vec::new()
        }
    }
}

impl Dreps<'_> {
    /// Attach delegator/vote statistics and a profile flag to base records.
    ///
    /// Malformed input ids error out — they indicate caller bugs, not
    /// provider weather. Provider unavailability never propagates.
    pub async fn enrich(&self, dreps: &[Drep]) -> Result<Vec<EnrichedDrep>, SdkError> {
        // Provider responses are keyed by normalized id only; keep the
        // original order through a parallel vec.
        let mut normalized = Vec::with_capacity(dreps.len());
        for drep in dreps {
            normalized.push(id::normalize(&drep.drep_id)?);
        }

        let mut stats = self.collect_bulk(&normalized).await;

        if decide_fallback(&stats) {
            tracing::debug!(
                ids = normalized.len(),
                "bulk source returned no usable data; switching to per-entity source"
            );
            stats = self.collect_detail(&normalized).await;
        }

        let empty = SourceStats::default();
        Ok(dreps
            .iter()
            .zip(&normalized)
            .map(|(drep, norm_id)| {
                let stat = stats.get(norm_id).unwrap_or(&empty);
                let mut tally = VoteTally::default();
                for vote in &stat.votes {
                    if let Some(kind) = vote.kind {
                        tally.record(kind);
                    }
                }
                EnrichedDrep {
                    drep_id: norm_id.clone(),
                    delegator_count: stat.delegators.len() as u64,
                    vote_count: stat.votes.len() as u64,
                    votes: tally,
                    has_profile: drep
                        .metadata
                        .as_ref()
                        .and_then(metadata::sanitize)
                        .map(|clean| metadata::has_profile(&clean))
                        .unwrap_or(false),
                }
            })
            .collect())
    }

    /// Batched, staggered fan-out against the bulk source.
    async fn collect_bulk(&self, normalized: &[String]) -> HashMap<String, SourceStats> {
        let tuning = &self.client.tuning;
        let mut stats = HashMap::with_capacity(normalized.len());

        for (batch_no, batch) in normalized.chunks(tuning.batch_size.max(1)).enumerate() {
            if batch_no > 0 && !tuning.batch_delay.is_zero() {
                Delay::new(tuning.batch_delay).await;
            }

            let calls = batch.iter().enumerate().map(|(offset, drep_id)| {
                let stagger = tuning.call_stagger * offset as u32;
                async move {
                    if !stagger.is_zero() {
                        Delay::new(stagger).await;
                    }
                    // The two statistic calls touch disjoint fields and may
                    // run concurrently with each other.
                    let (delegators, votes) = join!(
                        self.client
                            .bulk
                            .drep_delegators(drep_id, Some(tuning.stat_limit)),
                        self.client.bulk.drep_votes(drep_id, Some(tuning.stat_limit)),
                    );
                    (
                        drep_id.clone(),
                        SourceStats {
                            delegators: ok_or_empty(delegators, drep_id, "delegators"),
                            votes: ok_or_empty(votes, drep_id, "votes"),
                        },
                    )
                }
            });

            // Results land in the map only after the batch joins; there are
            // no concurrent writers.
            for (drep_id, stat) in join_all(calls).await {
                stats.insert(drep_id, stat);
            }
        }

        stats
    }

    /// Sequential per-entity enrichment against the fallback source.
    async fn collect_detail(&self, normalized: &[String]) -> HashMap<String, SourceStats> {
        let mut stats = HashMap::with_capacity(normalized.len());

        for drep_id in normalized {
            if stats.contains_key(drep_id) {
                continue;
            }
            let delegators = self.client.detail.drep_delegators(drep_id).await;
            let votes = self.client.detail.drep_votes(drep_id).await;
            stats.insert(
                drep_id.clone(),
                SourceStats {
                    delegators: ok_or_empty(delegators, drep_id, "delegators"),
                    votes: ok_or_empty(votes, drep_id, "votes"),
                },
            );
        }

        stats
    }

    /// Fetch and sanitize a DRep's anchored metadata, extracting the
    /// canonical display fields. `Ok(None)` when nothing is anchored or the
    /// document is unreadable.
    pub async fn profile(&self, drep_id: &str) -> Result<Option<DrepProfile>, SdkError> {
        let norm_id = id::normalize(drep_id)?;
        let Some(raw) = self.client.detail.drep_metadata(&norm_id).await? else {
            return Ok(None);
        };
        let Some(clean) = metadata::sanitize(&raw) else {
            return Ok(None);
        };
        Ok(Some(DrepProfile {
            name: metadata::display_name(&clean),
            description: metadata::display_description(&clean),
            website: metadata::display_website(&clean),
        }))
    }
}
