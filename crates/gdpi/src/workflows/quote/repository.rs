use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{JobTiming, QuoteVerdict};
use super::intake::JobType;

/// Identifier wrapper for analyzed quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteId(pub String);

/// History entry kept for each analyzed quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: QuoteId,
    pub hoa_id: String,
    pub submitted_at: DateTime<Utc>,
    pub job_type: JobType,
    pub timing: JobTiming,
    pub door_setup: String,
    pub quoted_amount: f64,
    pub verdict: QuoteVerdict,
    /// Leading excerpt of the submitted text.
    pub notes: String,
}

/// Price summary over an HOA's recorded quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteHistoryStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    /// Mean quoted amount, rounded to whole dollars.
    pub average: f64,
    pub after_hours_count: usize,
}

impl QuoteHistoryStats {
    /// All zeros for an empty history.
    pub fn from_records(records: &[QuoteRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let amounts = records.iter().map(|record| record.quoted_amount);
        let min = amounts.clone().fold(f64::INFINITY, f64::min);
        let max = amounts.clone().fold(f64::NEG_INFINITY, f64::max);
        let total: f64 = amounts.sum();

        Self {
            count: records.len(),
            min,
            max,
            average: (total / records.len() as f64).round(),
            after_hours_count: records
                .iter()
                .filter(|record| record.timing.is_after_hours())
                .count(),
        }
    }
}

/// Storage abstraction for quote history so the service can run without a
/// concrete backend.
pub trait QuoteHistory: Send + Sync {
    fn record(&self, record: QuoteRecord) -> Result<QuoteRecord, HistoryError>;
    fn list(&self, hoa_id: &str) -> Result<Vec<QuoteRecord>, HistoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("quote record already exists")]
    Conflict,
    #[error("quote history unavailable: {0}")]
    Unavailable(String),
}

/// The external AI collaborator: takes a prompt, returns its raw reply text.
pub trait QuoteAnalyst: Send + Sync {
    fn analyze(&self, prompt: &str) -> Result<String, AnalystError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnalystError {
    #[error("analyst is not configured")]
    NotConfigured,
    #[error("analyst request failed: {0}")]
    Unavailable(String),
}
