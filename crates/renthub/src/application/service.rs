use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::draft::{ApplicationDraft, DocumentKind, DraftField};
use super::payment::PaymentGateway;
use super::wizard::{
    AdvanceOutcome, ApplicationWizard, ListingSnapshot, RetreatOutcome, WizardExit, WizardStep,
};
use crate::catalog::{ListingCatalog, ListingId};

/// Identifier wrapper for live wizard sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

/// Error raised by the session registry.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no application session with id {0}")]
    UnknownSession(String),
    #[error("no listing with id {0}")]
    UnknownListing(String),
}

/// Read view of a session used to render the active section.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub listing_id: ListingId,
    pub application_id: String,
    pub step: WizardStep,
    pub step_number: u8,
    pub step_label: &'static str,
    pub draft: ApplicationDraft,
}

impl SessionSnapshot {
    fn of<G: PaymentGateway>(id: &SessionId, wizard: &ApplicationWizard<G>) -> Self {
        let step = wizard.current_step();
        Self {
            session_id: id.clone(),
            listing_id: wizard.listing().id.clone(),
            application_id: wizard.application_id(),
            step,
            step_number: step.number(),
            step_label: step.label(),
            draft: wizard.draft().clone(),
        }
    }
}

/// Registry owning one wizard per applying client. Wizards are exclusive to
/// their session; the registry only serializes map access.
pub struct ApplicationSessions<G> {
    catalog: Arc<ListingCatalog>,
    gateway: Arc<G>,
    fee: u32,
    sessions: Mutex<HashMap<SessionId, ApplicationWizard<G>>>,
}

impl<G: PaymentGateway + 'static> ApplicationSessions<G> {
    pub fn new(catalog: Arc<ListingCatalog>, gateway: Arc<G>, fee: u32) -> Self {
        Self {
            catalog,
            gateway,
            fee,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Open a fresh wizard against an advertised listing.
    pub fn start(&self, listing_id: &ListingId) -> Result<SessionSnapshot, SessionError> {
        let detail = self
            .catalog
            .get(listing_id)
            .ok_or_else(|| SessionError::UnknownListing(listing_id.0.clone()))?;

        let snapshot = ListingSnapshot {
            id: listing_id.clone(),
            name: detail.title.clone(),
        };
        let wizard = ApplicationWizard::new(snapshot, self.fee, self.gateway.clone());
        let id = next_session_id();
        let view = SessionSnapshot::of(&id, &wizard);

        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard.insert(id, wizard);
        Ok(view)
    }

    pub fn snapshot(&self, id: &SessionId) -> Result<SessionSnapshot, SessionError> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        let wizard = guard
            .get(id)
            .ok_or_else(|| SessionError::UnknownSession(id.0.clone()))?;
        Ok(SessionSnapshot::of(id, wizard))
    }

    pub fn update_field(
        &self,
        id: &SessionId,
        field: DraftField,
        value: String,
    ) -> Result<SessionSnapshot, SessionError> {
        self.with_wizard(id, |wizard| {
            wizard.update_field(field, value);
        })
    }

    pub fn upload_document(
        &self,
        id: &SessionId,
        kind: DocumentKind,
    ) -> Result<SessionSnapshot, SessionError> {
        self.with_wizard(id, |wizard| {
            wizard.upload_document(kind);
        })
    }

    pub fn advance(&self, id: &SessionId) -> Result<AdvanceOutcome, SessionError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        let wizard = guard
            .get_mut(id)
            .ok_or_else(|| SessionError::UnknownSession(id.0.clone()))?;
        Ok(wizard.advance())
    }

    /// Step backward. A cancellation removes the session outright: the
    /// wizard is abandoned and its draft dropped.
    pub fn retreat(&self, id: &SessionId) -> Result<RetreatOutcome, SessionError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        let wizard = guard
            .get_mut(id)
            .ok_or_else(|| SessionError::UnknownSession(id.0.clone()))?;
        let outcome = wizard.retreat();
        if outcome == RetreatOutcome::Cancelled {
            guard.remove(id);
        }
        Ok(outcome)
    }

    /// Dismiss a session, returning the exit signal for the hosting view.
    pub fn finish(&self, id: &SessionId) -> Result<WizardExit, SessionError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        let wizard = guard
            .remove(id)
            .ok_or_else(|| SessionError::UnknownSession(id.0.clone()))?;
        Ok(wizard.return_to_listings())
    }

    pub fn open_sessions(&self) -> usize {
        self.sessions.lock().expect("session mutex poisoned").len()
    }

    fn with_wizard(
        &self,
        id: &SessionId,
        apply: impl FnOnce(&mut ApplicationWizard<G>),
    ) -> Result<SessionSnapshot, SessionError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        let wizard = guard
            .get_mut(id)
            .ok_or_else(|| SessionError::UnknownSession(id.0.clone()))?;
        apply(wizard);
        Ok(SessionSnapshot::of(id, wizard))
    }
}