use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use gdpi::workflows::quote::{
    quote_router, BaselinePricing, QuoteAnalysisService, QuoteAnalyst, QuoteHistory,
    TorsionBenchmarks, PREMIUM_WIRE_CAP,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct BaselineResponse {
    pub(crate) regional: BaselinePricing,
    pub(crate) reference: String,
    pub(crate) premium_wire_cap: u32,
    pub(crate) torsion_benchmarks: TorsionBenchmarks,
}

pub(crate) fn with_quote_routes<A, H>(service: Arc<QuoteAnalysisService<A, H>>) -> axum::Router
where
    A: QuoteAnalyst + 'static,
    H: QuoteHistory + 'static,
{
    quote_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/baseline", axum::routing::get(baseline_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn baseline_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<BaselineResponse> {
    let regional = BaselinePricing::arizona();
    let reference = regional.format_reference();

    Json(BaselineResponse {
        regional,
        reference,
        premium_wire_cap: PREMIUM_WIRE_CAP,
        torsion_benchmarks: state.benchmarks,
    })
}
