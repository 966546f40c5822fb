use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::draft::{ApplicationDraft, DraftField};

/// Card fields captured on the review screen. Values pass through to the
/// gateway verbatim; nothing is validated client side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub number: Option<String>,
    pub expiry: Option<String>,
    pub cvv: Option<String>,
    pub holder: Option<String>,
}

impl CardDetails {
    pub fn from_draft(draft: &ApplicationDraft) -> Self {
        Self {
            number: draft.get(DraftField::CardNumber).map(str::to_string),
            expiry: draft.get(DraftField::CardExpiry).map(str::to_string),
            cvv: draft.get(DraftField::CardCvv).map(str::to_string),
            holder: draft.get(DraftField::CardName).map(str::to_string),
        }
    }
}

/// Charge instruction handed to the gateway at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRequest {
    pub application_id: String,
    /// Flat application fee in whole currency units.
    pub amount: u32,
    pub card: CardDetails,
}

/// Settlement confirmation returned by a gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub confirmation: String,
    pub amount: u32,
    pub charged_on: NaiveDate,
}

/// Gateway failure taxonomy. Declines and transport faults both leave the
/// wizard on the review step so the charge can be retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    #[error("card declined: {reason}")]
    Declined { reason: String },
    #[error("payment gateway unavailable: {0}")]
    Gateway(String),
}

/// Capability boundary for charging the application fee. A real processor
/// sits behind this in production; tests and the demo use in-memory doubles.
pub trait PaymentGateway: Send + Sync {
    fn charge(&self, request: &ChargeRequest) -> Result<PaymentReceipt, PaymentError>;
}
