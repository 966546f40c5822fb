use chrono::Local;
use metrics_exporter_prometheus::PrometheusHandle;
use renthub::application::{ChargeRequest, PaymentError, PaymentGateway, PaymentReceipt};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Stand-in processor that settles every charge and records what it saw.
/// Production would swap a real gateway in behind the same trait.
#[derive(Default)]
pub(crate) struct RecordingGateway {
    sequence: AtomicU64,
    charges: Mutex<Vec<ChargeRequest>>,
    decline_all: AtomicBool,
}

impl RecordingGateway {
    pub(crate) fn charges(&self) -> Vec<ChargeRequest> {
        self.charges.lock().expect("charge mutex poisoned").clone()
    }

    /// Flip the double into decline mode, used by the demo's retry leg.
    pub(crate) fn set_decline_all(&self, decline: bool) {
        self.decline_all.store(decline, Ordering::Relaxed);
    }
}

impl PaymentGateway for RecordingGateway {
    fn charge(&self, request: &ChargeRequest) -> Result<PaymentReceipt, PaymentError> {
        self.charges
            .lock()
            .expect("charge mutex poisoned")
            .push(request.clone());

        if self.decline_all.load(Ordering::Relaxed) {
            return Err(PaymentError::Declined {
                reason: "card declined by issuer".to_string(),
            });
        }

        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        Ok(PaymentReceipt {
            confirmation: format!("ch_{sequence:08}"),
            amount: request.amount,
            charged_on: Local::now().date_naive(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use renthub::application::CardDetails;

    fn request() -> ChargeRequest {
        ChargeRequest {
            application_id: "1-APP".to_string(),
            amount: 50,
            card: CardDetails::default(),
        }
    }

    #[test]
    fn recording_gateway_settles_and_remembers_charges() {
        let gateway = RecordingGateway::default();
        let receipt = gateway.charge(&request()).expect("charge settles");
        assert_eq!(receipt.amount, 50);
        assert_eq!(gateway.charges().len(), 1);
    }

    #[test]
    fn decline_mode_rejects_without_losing_the_audit_trail() {
        let gateway = RecordingGateway::default();
        gateway.set_decline_all(true);
        assert!(matches!(
            gateway.charge(&request()),
            Err(PaymentError::Declined { .. })
        ));
        gateway.set_decline_all(false);
        assert!(gateway.charge(&request()).is_ok());
        assert_eq!(gateway.charges().len(), 2);
    }
}
