use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::draft::{ApplicationDraft, DocumentKind, DraftField, DOCUMENT_PLACEHOLDER};
use super::payment::{CardDetails, ChargeRequest, PaymentError, PaymentGateway};
use crate::catalog::ListingId;

/// Ordered wizard sections. `Submitted` is terminal: no further edits, only
/// `return_to_listings` remains meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Personal,
    Employment,
    Financial,
    Documents,
    Review,
    Submitted,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Personal,
            Self::Employment,
            Self::Financial,
            Self::Documents,
            Self::Review,
            Self::Submitted,
        ]
    }

    /// One-based position shown in the step indicator.
    pub const fn number(self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Employment => 2,
            Self::Financial => 3,
            Self::Documents => 4,
            Self::Review => 5,
            Self::Submitted => 6,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Employment => "Employment",
            Self::Financial => "Financial",
            Self::Documents => "Documents",
            Self::Review => "Review & Payment",
            Self::Submitted => "Submitted",
        }
    }

    pub const fn is_editable(self) -> bool {
        !matches!(self, Self::Submitted)
    }

    /// Steps rendered with a numbered indicator in the hosting view.
    pub fn indicator_steps() -> impl Iterator<Item = WizardStep> {
        Self::ordered().into_iter().filter(|step| step.is_editable())
    }

    const fn next(self) -> Self {
        match self {
            Self::Personal => Self::Employment,
            Self::Employment => Self::Financial,
            Self::Financial => Self::Documents,
            Self::Documents => Self::Review,
            Self::Review | Self::Submitted => Self::Submitted,
        }
    }

    const fn previous(self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Employment => Some(Self::Personal),
            Self::Financial => Some(Self::Employment),
            Self::Documents => Some(Self::Financial),
            Self::Review => Some(Self::Documents),
            Self::Submitted => None,
        }
    }
}

/// The advertised listing an application is filed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSnapshot {
    pub id: ListingId,
    pub name: String,
}

/// Confirmation produced by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationReceipt {
    pub application_id: String,
    pub listing_name: String,
    pub fee_charged: u32,
    pub confirmation_code: String,
    pub submitted_on: NaiveDate,
}

/// Outcome of a forward transition.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    Moved(WizardStep),
    Submitted(ApplicationReceipt),
    /// The gateway declined or failed; the wizard stays on the review step
    /// and a later `advance` retries the charge.
    PaymentFailed(PaymentError),
    AlreadySubmitted,
}

/// Outcome of a backward transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetreatOutcome {
    Moved(WizardStep),
    /// Backing out of the first step abandons the wizard; the hosting view
    /// discards it.
    Cancelled,
    /// Retreating from the terminal step is a defined no-op.
    Stayed,
}

/// Signal handed back to the hosting view when the wizard is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardExit {
    pub listing_id: ListingId,
    pub receipt: Option<ApplicationReceipt>,
}

/// Six-step rental-application wizard. One instance per applying screen;
/// every transition is synchronous and total over the step domain.
pub struct ApplicationWizard<G> {
    listing: ListingSnapshot,
    fee: u32,
    gateway: Arc<G>,
    step: WizardStep,
    draft: ApplicationDraft,
    receipt: Option<ApplicationReceipt>,
}

impl<G: PaymentGateway> ApplicationWizard<G> {
    pub fn new(listing: ListingSnapshot, fee: u32, gateway: Arc<G>) -> Self {
        Self {
            listing,
            fee,
            gateway,
            step: WizardStep::Personal,
            draft: ApplicationDraft::default(),
            receipt: None,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn listing(&self) -> &ListingSnapshot {
        &self.listing
    }

    pub fn receipt(&self) -> Option<&ApplicationReceipt> {
        self.receipt.as_ref()
    }

    /// Application identifier shown on the review and confirmation screens.
    pub fn application_id(&self) -> String {
        format!("{}-APP", self.listing.id.0)
    }

    /// Record a field edit. Ignored once the application is submitted; no
    /// step change either way.
    pub fn update_field(&mut self, field: DraftField, value: String) {
        if self.step.is_editable() {
            self.draft.set(field, value);
        }
    }

    /// Record a completed upload as a placeholder marker. Reachable from the
    /// Documents screen in the hosting view, but total over all editable
    /// steps.
    pub fn upload_document(&mut self, kind: DocumentKind) {
        if self.step.is_editable() {
            self.draft.set(kind.field(), DOCUMENT_PLACEHOLDER.to_string());
        }
    }

    /// Move forward one section. From the review step this charges the
    /// application fee through the gateway and, on success, reaches the
    /// terminal step with a receipt.
    pub fn advance(&mut self) -> AdvanceOutcome {
        match self.step {
            WizardStep::Review => self.submit(),
            WizardStep::Submitted => AdvanceOutcome::AlreadySubmitted,
            editable => {
                self.step = editable.next();
                AdvanceOutcome::Moved(self.step)
            }
        }
    }

    fn submit(&mut self) -> AdvanceOutcome {
        let request = ChargeRequest {
            application_id: self.application_id(),
            amount: self.fee,
            card: CardDetails::from_draft(&self.draft),
        };

        match self.gateway.charge(&request) {
            Ok(settled) => {
                self.step = WizardStep::Submitted;
                let receipt = ApplicationReceipt {
                    application_id: request.application_id,
                    listing_name: self.listing.name.clone(),
                    fee_charged: settled.amount,
                    confirmation_code: settled.confirmation,
                    submitted_on: settled.charged_on,
                };
                self.receipt = Some(receipt.clone());
                AdvanceOutcome::Submitted(receipt)
            }
            Err(error) => AdvanceOutcome::PaymentFailed(error),
        }
    }

    /// Move back one section. From the first step this signals cancellation
    /// instead of going below step one; the draft is never rolled back.
    pub fn retreat(&mut self) -> RetreatOutcome {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                RetreatOutcome::Moved(previous)
            }
            None if self.step == WizardStep::Personal => RetreatOutcome::Cancelled,
            None => RetreatOutcome::Stayed,
        }
    }

    /// Dismiss the wizard, discarding the draft. The receipt, if the
    /// application was submitted, travels with the exit signal.
    pub fn return_to_listings(self) -> WizardExit {
        WizardExit {
            listing_id: self.listing.id,
            receipt: self.receipt,
        }
    }
}
