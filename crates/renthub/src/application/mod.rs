//! Rental-application intake: the multi-step wizard, its accumulating draft
//! record, and the payment boundary crossed at submission.

pub mod draft;
pub mod payment;
pub mod router;
pub mod service;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use draft::{ApplicationDraft, DocumentKind, DraftField, DOCUMENT_PLACEHOLDER};
pub use payment::{CardDetails, ChargeRequest, PaymentError, PaymentGateway, PaymentReceipt};
pub use router::application_router;
pub use service::{ApplicationSessions, SessionError, SessionId, SessionSnapshot};
pub use wizard::{
    AdvanceOutcome, ApplicationReceipt, ApplicationWizard, ListingSnapshot, RetreatOutcome,
    WizardExit, WizardStep,
};
