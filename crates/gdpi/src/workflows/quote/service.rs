use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use super::amount::extract_amount;
use super::baseline::{build_analysis_prompt, BaselinePricing};
use super::domain::{AnalysisResult, DoorContext};
use super::fallback::offline_analysis;
use super::intake::{classify_job_type, QuoteSubmission};
use super::repository::{HistoryError, QuoteAnalyst, QuoteHistory, QuoteId, QuoteRecord};
use super::response::parse_ai_response;
use super::torsion::{TorsionBenchmarks, TorsionHeuristic};

const NOTES_EXCERPT_CHARS: usize = 200;

static QUOTE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_quote_id() -> QuoteId {
    let id = QUOTE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    QuoteId(format!("quote-{id:06}"))
}

/// Final assessment together with the stored history entry.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteAnalysis {
    pub record: QuoteRecord,
    pub result: AnalysisResult,
}

/// Service composing the analyst, the torsion heuristic, and quote history.
pub struct QuoteAnalysisService<A, H> {
    analyst: Arc<A>,
    history: Arc<H>,
    heuristic: TorsionHeuristic,
    baseline: BaselinePricing,
}

impl<A, H> QuoteAnalysisService<A, H>
where
    A: QuoteAnalyst + 'static,
    H: QuoteHistory + 'static,
{
    pub fn new(analyst: Arc<A>, history: Arc<H>, benchmarks: TorsionBenchmarks) -> Self {
        Self {
            analyst,
            history,
            heuristic: TorsionHeuristic::new(benchmarks),
            baseline: BaselinePricing::arizona(),
        }
    }

    pub fn baseline(&self) -> &BaselinePricing {
        &self.baseline
    }

    /// Analyze a submission, falling back to the offline assessment when the
    /// analyst fails, and record the outcome in history.
    pub fn analyze(
        &self,
        submission: QuoteSubmission,
    ) -> Result<QuoteAnalysis, QuoteServiceError> {
        let input = submission.input_text();
        if input.is_empty() {
            return Err(QuoteServiceError::InvalidSubmission(
                "quote text is required".to_string(),
            ));
        }
        let door_setup = submission.door_setup.trim();
        if door_setup.is_empty() {
            return Err(QuoteServiceError::InvalidSubmission(
                "door setup is required (e.g. \"Double, insulated, 7ft\")".to_string(),
            ));
        }

        let timing = submission.timing;
        let prompt = build_analysis_prompt(&input, timing, door_setup, &self.baseline);
        let base = match self.analyst.analyze(&prompt) {
            Ok(reply) => parse_ai_response(&reply, timing),
            Err(err) => {
                warn!(error = %err, "quote analyst unavailable; using offline assessment");
                offline_analysis(&input, timing)
            }
        };

        let ctx = DoorContext::new(door_setup, timing);
        let result = self.heuristic.apply(base, &input, &ctx);

        let record = QuoteRecord {
            id: next_quote_id(),
            hoa_id: submission.hoa_id.clone(),
            submitted_at: Utc::now(),
            job_type: classify_job_type(&input),
            timing,
            door_setup: door_setup.to_string(),
            quoted_amount: extract_amount(&input),
            verdict: result.verdict,
            notes: input.chars().take(NOTES_EXCERPT_CHARS).collect(),
        };
        let record = self.history.record(record)?;

        info!(
            quote_id = %record.id.0,
            hoa_id = %record.hoa_id,
            verdict = %result.verdict,
            quoted_amount = record.quoted_amount,
            "quote analyzed"
        );

        Ok(QuoteAnalysis { record, result })
    }

    /// Quote history for an HOA, as stored.
    pub fn history(&self, hoa_id: &str) -> Result<Vec<QuoteRecord>, QuoteServiceError> {
        Ok(self.history.list(hoa_id)?)
    }
}

/// Error raised by the quote analysis service.
#[derive(Debug, thiserror::Error)]
pub enum QuoteServiceError {
    #[error("invalid submission: {0}")]
    InvalidSubmission(String),
    #[error(transparent)]
    History(#[from] HistoryError),
}
