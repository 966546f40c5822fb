use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::draft::{DocumentKind, DraftField};
use super::payment::PaymentGateway;
use super::service::{ApplicationSessions, SessionError, SessionId};
use super::wizard::{AdvanceOutcome, RetreatOutcome};

/// Router builder exposing the wizard session endpoints.
pub fn application_router<G>(sessions: Arc<ApplicationSessions<G>>) -> Router
where
    G: PaymentGateway + 'static,
{
    Router::new()
        .route("/api/v1/applications", post(start_handler::<G>))
        .route(
            "/api/v1/applications/:session_id",
            get(snapshot_handler::<G>),
        )
        .route(
            "/api/v1/applications/:session_id/advance",
            post(advance_handler::<G>),
        )
        .route(
            "/api/v1/applications/:session_id/retreat",
            post(retreat_handler::<G>),
        )
        .route(
            "/api/v1/applications/:session_id/fields",
            post(update_field_handler::<G>),
        )
        .route(
            "/api/v1/applications/:session_id/documents",
            post(upload_document_handler::<G>),
        )
        .route(
            "/api/v1/applications/:session_id/close",
            post(close_handler::<G>),
        )
        .with_state(sessions)
}

#[derive(Debug, Deserialize)]
pub(crate) struct StartApplicationRequest {
    pub(crate) listing_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateFieldRequest {
    pub(crate) field: DraftField,
    pub(crate) value: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadDocumentRequest {
    pub(crate) document: DocumentKind,
}

fn error_response(error: SessionError) -> Response {
    let status = match error {
        SessionError::UnknownSession(_) | SessionError::UnknownListing(_) => StatusCode::NOT_FOUND,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn start_handler<G>(
    State(sessions): State<Arc<ApplicationSessions<G>>>,
    axum::Json(request): axum::Json<StartApplicationRequest>,
) -> Response
where
    G: PaymentGateway + 'static,
{
    let listing_id = crate::catalog::ListingId(request.listing_id);
    match sessions.start(&listing_id) {
        Ok(snapshot) => (StatusCode::CREATED, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn snapshot_handler<G>(
    State(sessions): State<Arc<ApplicationSessions<G>>>,
    Path(session_id): Path<String>,
) -> Response
where
    G: PaymentGateway + 'static,
{
    match sessions.snapshot(&SessionId(session_id)) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn advance_handler<G>(
    State(sessions): State<Arc<ApplicationSessions<G>>>,
    Path(session_id): Path<String>,
) -> Response
where
    G: PaymentGateway + 'static,
{
    let id = SessionId(session_id);
    match sessions.advance(&id) {
        Ok(AdvanceOutcome::Moved(step)) => {
            let payload = json!({
                "status": "in_progress",
                "step": step,
                "step_number": step.number(),
                "step_label": step.label(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(AdvanceOutcome::Submitted(receipt)) => {
            let payload = json!({
                "status": "submitted",
                "receipt": receipt,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(AdvanceOutcome::PaymentFailed(error)) => {
            let payload = json!({
                "status": "payment_failed",
                "error": error.to_string(),
            });
            (StatusCode::PAYMENT_REQUIRED, axum::Json(payload)).into_response()
        }
        Ok(AdvanceOutcome::AlreadySubmitted) => {
            let payload = json!({ "status": "already_submitted" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn retreat_handler<G>(
    State(sessions): State<Arc<ApplicationSessions<G>>>,
    Path(session_id): Path<String>,
) -> Response
where
    G: PaymentGateway + 'static,
{
    let id = SessionId(session_id);
    match sessions.retreat(&id) {
        Ok(RetreatOutcome::Moved(step)) => {
            let payload = json!({
                "status": "in_progress",
                "step": step,
                "step_number": step.number(),
                "step_label": step.label(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(RetreatOutcome::Cancelled) => {
            let payload = json!({ "status": "cancelled" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(RetreatOutcome::Stayed) => {
            let payload = json!({ "status": "already_submitted" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_field_handler<G>(
    State(sessions): State<Arc<ApplicationSessions<G>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<UpdateFieldRequest>,
) -> Response
where
    G: PaymentGateway + 'static,
{
    match sessions.update_field(&SessionId(session_id), request.field, request.value) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn upload_document_handler<G>(
    State(sessions): State<Arc<ApplicationSessions<G>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<UploadDocumentRequest>,
) -> Response
where
    G: PaymentGateway + 'static,
{
    match sessions.upload_document(&SessionId(session_id), request.document) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn close_handler<G>(
    State(sessions): State<Arc<ApplicationSessions<G>>>,
    Path(session_id): Path<String>,
) -> Response
where
    G: PaymentGateway + 'static,
{
    match sessions.finish(&SessionId(session_id)) {
        Ok(exit) => {
            let payload = json!({
                "listing_id": exit.listing_id,
                "receipt": exit.receipt,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}
