use gdpi::workflows::quote::{
    AnalystError, HistoryError, JobTiming, QuoteAnalyst, QuoteHistory, QuoteRecord,
    TorsionBenchmarks,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) benchmarks: TorsionBenchmarks,
}

/// Quote history grouped by HOA, newest last.
#[derive(Default, Clone)]
pub(crate) struct InMemoryQuoteHistory {
    records: Arc<Mutex<HashMap<String, Vec<QuoteRecord>>>>,
}

impl QuoteHistory for InMemoryQuoteHistory {
    fn record(&self, record: QuoteRecord) -> Result<QuoteRecord, HistoryError> {
        let mut guard = self.records.lock().expect("history mutex poisoned");
        let entries = guard.entry(record.hoa_id.clone()).or_default();
        if entries.iter().any(|existing| existing.id == record.id) {
            return Err(HistoryError::Conflict);
        }
        entries.push(record.clone());
        Ok(record)
    }

    fn list(&self, hoa_id: &str) -> Result<Vec<QuoteRecord>, HistoryError> {
        let guard = self.records.lock().expect("history mutex poisoned");
        Ok(guard.get(hoa_id).cloned().unwrap_or_default())
    }
}

/// Analyst stand-ins available without a remote model.
#[derive(Debug, Clone)]
pub(crate) enum LocalAnalyst {
    /// No analyst; the service falls back to the offline assessment.
    Offline,
    /// Replays a previously captured analyst reply from disk.
    ReplyFile(PathBuf),
}

impl QuoteAnalyst for LocalAnalyst {
    fn analyze(&self, _prompt: &str) -> Result<String, AnalystError> {
        match self {
            LocalAnalyst::Offline => Err(AnalystError::NotConfigured),
            LocalAnalyst::ReplyFile(path) => std::fs::read_to_string(path).map_err(|err| {
                AnalystError::Unavailable(format!("failed to read {}: {err}", path.display()))
            }),
        }
    }
}

pub(crate) fn parse_timing(raw: &str) -> Result<JobTiming, String> {
    raw.parse::<JobTiming>().map_err(|err| err.to_string())
}
