use crate::cli::ServeArgs;
use crate::infra::{AppState, LogAlertPublisher};
use crate::routes::with_eligibility_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pesi_eligibility::config::AppConfig;
use pesi_eligibility::error::AppError;
use pesi_eligibility::telemetry;
use pesi_eligibility::workflows::eligibility::EligibilityService;
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(EligibilityService::new(
        Arc::new(LogAlertPublisher),
        config.eligibility.clone(),
    ));

    let app = with_eligibility_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        minimum_score = config.eligibility.minimum_score,
        "eligibility service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
