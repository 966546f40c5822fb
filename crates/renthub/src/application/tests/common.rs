use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::application::payment::{ChargeRequest, PaymentError, PaymentGateway, PaymentReceipt};
use crate::application::service::ApplicationSessions;
use crate::application::wizard::{ApplicationWizard, ListingSnapshot};
use crate::catalog::{ListingCatalog, ListingId};

pub(super) const TEST_FEE: u32 = 50;

pub(super) fn charge_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub(super) fn snapshot() -> ListingSnapshot {
    ListingSnapshot {
        id: ListingId("1".to_string()),
        name: "Modern Smart Home in Downtown".to_string(),
    }
}

/// Gateway double recording every charge and yielding scripted results.
#[derive(Default)]
pub(super) struct RecordingGateway {
    charges: Mutex<Vec<ChargeRequest>>,
    script: Mutex<Vec<PaymentError>>,
}

impl RecordingGateway {
    /// Queue failures to return before charges start succeeding.
    pub(super) fn failing_first(errors: Vec<PaymentError>) -> Self {
        Self {
            charges: Mutex::new(Vec::new()),
            script: Mutex::new(errors),
        }
    }

    pub(super) fn charges(&self) -> Vec<ChargeRequest> {
        self.charges.lock().expect("charge mutex poisoned").clone()
    }
}

impl PaymentGateway for RecordingGateway {
    fn charge(&self, request: &ChargeRequest) -> Result<PaymentReceipt, PaymentError> {
        self.charges
            .lock()
            .expect("charge mutex poisoned")
            .push(request.clone());

        let mut script = self.script.lock().expect("script mutex poisoned");
        if let Some(error) = script.pop() {
            return Err(error);
        }

        Ok(PaymentReceipt {
            confirmation: format!("conf-{}", request.application_id),
            amount: request.amount,
            charged_on: charge_date(),
        })
    }
}

pub(super) fn wizard() -> (ApplicationWizard<RecordingGateway>, Arc<RecordingGateway>) {
    let gateway = Arc::new(RecordingGateway::default());
    let wizard = ApplicationWizard::new(snapshot(), TEST_FEE, gateway.clone());
    (wizard, gateway)
}

pub(super) fn sessions() -> (
    Arc<ApplicationSessions<RecordingGateway>>,
    Arc<RecordingGateway>,
) {
    let gateway = Arc::new(RecordingGateway::default());
    let catalog = Arc::new(ListingCatalog::seed());
    let sessions = Arc::new(ApplicationSessions::new(catalog, gateway.clone(), TEST_FEE));
    (sessions, gateway)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected);
}
