use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryQuoteHistory, LocalAnalyst};
use crate::routes::with_quote_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use gdpi::config::AppConfig;
use gdpi::error::AppError;
use gdpi::telemetry;
use gdpi::workflows::quote::QuoteAnalysisService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        benchmarks: config.benchmarks,
    };

    let quote_service = Arc::new(QuoteAnalysisService::new(
        Arc::new(LocalAnalyst::Offline),
        Arc::new(InMemoryQuoteHistory::default()),
        config.benchmarks,
    ));

    let app = with_quote_routes(quote_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        springs_only_ceiling = config.benchmarks.springs_only_ceiling,
        springs_plus_parts_ceiling = config.benchmarks.springs_plus_parts_ceiling,
        "quote analysis service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
