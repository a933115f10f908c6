use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::quote::router::{analyze_handler, history_handler};
use crate::workflows::quote::{JobTiming, QuoteAnalysisService, TorsionBenchmarks};

#[tokio::test]
async fn analyze_route_returns_result_and_record() {
    let (service, _, _) = build_service(GREEN_REPLY);
    let router = router_with_service(service);

    let body = json!({
        "hoa_id": HOA_ID,
        "quote_text": "Replace oil tempered torsion springs (springs only). Total $725.",
        "timing": "scheduled",
        "door_setup": "double 7ft",
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/quotes/analyze")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&body).expect("serialize body"),
                ))
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["result"]["verdict"], json!("red"));
    assert_eq!(payload["record"]["hoa_id"], json!(HOA_ID));
    assert_eq!(payload["record"]["timing"], json!("scheduled"));
    assert_eq!(payload["record"]["job_type"], json!("torsion_springs"));
}

#[tokio::test]
async fn analyze_handler_rejects_incomplete_submission() {
    let (service, _, _) = build_service(GREEN_REPLY);

    let response = analyze_handler(
        State(Arc::new(service)),
        axum::Json(submission("", JobTiming::Scheduled, "double 7ft")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("quote text is required"));
}

#[tokio::test]
async fn analyze_handler_reports_history_failure() {
    let service = QuoteAnalysisService::new(
        Arc::new(CannedAnalyst::new(GREEN_REPLY)),
        Arc::new(UnavailableHistory),
        TorsionBenchmarks::default(),
    );

    let response = analyze_handler(
        State(Arc::new(service)),
        axum::Json(submission("Springs $400", JobTiming::Scheduled, "double 7ft")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn history_handler_lists_recorded_quotes() {
    let (service, _, _) = build_service(GREEN_REPLY);
    let service = Arc::new(service);
    service
        .analyze(submission("Springs $400", JobTiming::Scheduled, "double 7ft"))
        .expect("analysis succeeds");

    let response = history_handler(
        State(service.clone()),
        axum::extract::Path(HOA_ID.to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["hoa_id"], json!(HOA_ID));
    assert_eq!(payload["quotes"].as_array().map(Vec::len), Some(1));
    assert_eq!(payload["stats"]["count"], json!(1));
    assert_eq!(payload["stats"]["min"], json!(400.0));
    assert_eq!(payload["stats"]["average"], json!(400.0));
    assert_eq!(payload["stats"]["after_hours_count"], json!(0));
}

#[tokio::test]
async fn history_route_is_mounted() {
    let (service, _, _) = build_service(GREEN_REPLY);
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/hoas/hoa-empty/quotes")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["quotes"], json!([]));
    assert_eq!(payload["stats"]["count"], json!(0));
    assert_eq!(payload["stats"]["average"], json!(0.0));
}
