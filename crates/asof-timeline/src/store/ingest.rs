//! Ingestion boundary for the upstream fact feed.
//!
//! Malformed facts are counted and reported, never retried — a bad record
//! does not self-correct. Same-kind overlap within one entity's timeline
//! is validated here, once, and treated as an upstream contract from then
//! on.

use tracing::{debug, info, warn};

use asof_core::config::TimelineConfig;
use asof_core::errors::TimelineError;
use asof_core::models::IntervalFact;

use super::IntervalStore;

/// Outcome of one batch ingest.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub accepted: usize,
    pub rejected: usize,
    /// First few rejection messages, for the run log.
    pub rejection_sample: Vec<String>,
}

impl IngestReport {
    fn record_rejection(&mut self, message: String, sample_cap: usize) {
        self.rejected += 1;
        if self.rejection_sample.len() < sample_cap {
            self.rejection_sample.push(message);
        }
    }
}

impl IntervalStore {
    /// Ingest a batch of facts from the upstream feed.
    ///
    /// Rejects (and counts) facts whose end precedes their start and facts
    /// that overlap an already-accepted interval of the same kind for the
    /// same entity. Acceptance is order-dependent within the batch: the
    /// earlier fact wins an overlap, matching the append-only reading of
    /// the feed.
    pub fn ingest<I>(&mut self, facts: I, config: &TimelineConfig) -> IngestReport
    where
        I: IntoIterator<Item = IntervalFact>,
    {
        let mut report = IngestReport::default();

        for fact in facts {
            let (entity, interval) = fact.into_parts();

            // Well-formedness before the overlap scan: a reversed date
            // range must be rejected as invalid, not as an overlap.
            if let Some(end) = interval.end_date.filter(|&end| interval.start_date > end) {
                let err = TimelineError::InvalidInterval {
                    entity_id: interval.entity_id.clone(),
                    start: interval.start_date,
                    end,
                };
                debug!("rejected fact: {err}");
                report.record_rejection(err.to_string(), config.ingest_rejection_sample);
                continue;
            }

            let overlap = self
                .intervals_for(&interval.entity_id)
                .into_iter()
                .filter(|existing| existing.kind() == interval.kind())
                .find(|existing| {
                    existing.overlaps(
                        interval.start_date,
                        interval.end_date.unwrap_or(chrono::NaiveDate::MAX),
                    )
                })
                .cloned();

            if let Some(existing) = overlap {
                report.record_rejection(
                    format!(
                        "overlapping {:?} intervals for {}: existing starts {}, new starts {}",
                        interval.kind(),
                        interval.entity_id,
                        existing.start_date,
                        interval.start_date
                    ),
                    config.ingest_rejection_sample,
                );
                continue;
            }

            match self.put(interval) {
                Ok(()) => {
                    self.register_entity(entity);
                    report.accepted += 1;
                }
                Err(e) => {
                    debug!("rejected fact: {e}");
                    report.record_rejection(e.to_string(), config.ingest_rejection_sample);
                }
            }
        }

        if report.rejected > 0 {
            warn!(
                "ingest accepted {} fact(s), rejected {}",
                report.accepted, report.rejected
            );
        } else {
            info!("ingest accepted {} fact(s)", report.accepted);
        }

        report
    }
}
