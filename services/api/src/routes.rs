use crate::infra::{AppState, RecordingGateway};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use renthub::application::{application_router, ApplicationSessions};
use renthub::catalog::{catalog_router, ListingCatalog};
use renthub::dashboard::TenantDashboard;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn app_router(
    catalog: Arc<ListingCatalog>,
    sessions: Arc<ApplicationSessions<RecordingGateway>>,
) -> axum::Router {
    catalog_router(catalog)
        .merge(application_router(sessions))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/dashboard", axum::routing::get(dashboard_endpoint))
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

pub(crate) async fn dashboard_endpoint() -> Json<TenantDashboard> {
    Json(TenantDashboard::seed())
}
