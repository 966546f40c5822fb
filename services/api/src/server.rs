use crate::cli::ServeArgs;
use crate::infra::{AppState, RecordingGateway};
use crate::routes::app_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use renthub::application::ApplicationSessions;
use renthub::catalog::ListingCatalog;
use renthub::config::AppConfig;
use renthub::error::AppError;
use renthub::telemetry;
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
    };

    let catalog = Arc::new(ListingCatalog::seed());
    let gateway = Arc::new(RecordingGateway::default());
    let sessions = Arc::new(ApplicationSessions::new(
        catalog.clone(),
        gateway,
        config.application.fee,
    ));

    let app = app_router(catalog, sessions)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "renthub leasing service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
