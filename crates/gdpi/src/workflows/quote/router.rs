use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::intake::QuoteSubmission;
use super::repository::{QuoteAnalyst, QuoteHistory, QuoteHistoryStats};
use super::service::{QuoteAnalysisService, QuoteServiceError};

/// Router builder exposing quote analysis and history endpoints.
pub fn quote_router<A, H>(service: Arc<QuoteAnalysisService<A, H>>) -> Router
where
    A: QuoteAnalyst + 'static,
    H: QuoteHistory + 'static,
{
    Router::new()
        .route("/api/v1/quotes/analyze", post(analyze_handler::<A, H>))
        .route("/api/v1/hoas/:hoa_id/quotes", get(history_handler::<A, H>))
        .with_state(service)
}

pub(crate) async fn analyze_handler<A, H>(
    State(service): State<Arc<QuoteAnalysisService<A, H>>>,
    axum::Json(submission): axum::Json<QuoteSubmission>,
) -> Response
where
    A: QuoteAnalyst + 'static,
    H: QuoteHistory + 'static,
{
    match service.analyze(submission) {
        Ok(analysis) => (StatusCode::OK, axum::Json(analysis)).into_response(),
        Err(QuoteServiceError::InvalidSubmission(reason)) => {
            let payload = json!({
                "error": reason,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn history_handler<A, H>(
    State(service): State<Arc<QuoteAnalysisService<A, H>>>,
    Path(hoa_id): Path<String>,
) -> Response
where
    A: QuoteAnalyst + 'static,
    H: QuoteHistory + 'static,
{
    match service.history(&hoa_id) {
        Ok(records) => {
            let stats = QuoteHistoryStats::from_records(&records);
            let payload = json!({
                "hoa_id": hoa_id,
                "stats": stats,
                "quotes": records,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
