use std::sync::{Arc, Mutex};

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::quote::repository::{
    AnalystError, HistoryError, QuoteAnalyst, QuoteHistory, QuoteRecord,
};
use crate::workflows::quote::{
    quote_router, JobTiming, QuoteAnalysisService, QuoteSubmission, TorsionBenchmarks,
};

pub(super) const HOA_ID: &str = "hoa-desert-vista";

pub(super) const GREEN_REPLY: &str = "VERDICT: green\n\
PRICE_CONTEXT: Price is within the Arizona baseline for scheduled spring work.\n\
RED_FLAGS: None seen\n\
VENDOR_QUESTIONS:\n\
- What warranty do you provide on the springs?\n\
- Are the springs matched to the door weight?\n\
NEXT_STEP: Proceed if the vendor is licensed.";

#[derive(Clone)]
pub(super) struct CannedAnalyst {
    reply: String,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl CannedAnalyst {
    pub(super) fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(super) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt mutex poisoned").clone()
    }
}

impl QuoteAnalyst for CannedAnalyst {
    fn analyze(&self, prompt: &str) -> Result<String, AnalystError> {
        self.prompts
            .lock()
            .expect("prompt mutex poisoned")
            .push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

pub(super) struct OfflineAnalyst;

impl QuoteAnalyst for OfflineAnalyst {
    fn analyze(&self, _prompt: &str) -> Result<String, AnalystError> {
        Err(AnalystError::Unavailable("connection refused".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryHistory {
    records: Arc<Mutex<Vec<QuoteRecord>>>,
}

impl QuoteHistory for MemoryHistory {
    fn record(&self, record: QuoteRecord) -> Result<QuoteRecord, HistoryError> {
        let mut guard = self.records.lock().expect("history mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(HistoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn list(&self, hoa_id: &str) -> Result<Vec<QuoteRecord>, HistoryError> {
        let guard = self.records.lock().expect("history mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| record.hoa_id == hoa_id)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableHistory;

impl QuoteHistory for UnavailableHistory {
    fn record(&self, _record: QuoteRecord) -> Result<QuoteRecord, HistoryError> {
        Err(HistoryError::Unavailable("disk full".to_string()))
    }

    fn list(&self, _hoa_id: &str) -> Result<Vec<QuoteRecord>, HistoryError> {
        Err(HistoryError::Unavailable("disk full".to_string()))
    }
}

pub(super) fn submission(quote_text: &str, timing: JobTiming, door_setup: &str) -> QuoteSubmission {
    QuoteSubmission {
        hoa_id: HOA_ID.to_string(),
        quote_text: quote_text.to_string(),
        manual: None,
        timing,
        door_setup: door_setup.to_string(),
    }
}

pub(super) fn build_service(
    reply: &str,
) -> (
    QuoteAnalysisService<CannedAnalyst, MemoryHistory>,
    CannedAnalyst,
    MemoryHistory,
) {
    let analyst = CannedAnalyst::new(reply);
    let history = MemoryHistory::default();
    let service = QuoteAnalysisService::new(
        Arc::new(analyst.clone()),
        Arc::new(history.clone()),
        TorsionBenchmarks::default(),
    );
    (service, analyst, history)
}

pub(super) fn router_with_service(
    service: QuoteAnalysisService<CannedAnalyst, MemoryHistory>,
) -> axum::Router {
    quote_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("json body")
}
