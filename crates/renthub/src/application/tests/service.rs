use super::common::*;
use crate::application::draft::{DocumentKind, DraftField};
use crate::application::service::{SessionError, SessionId};
use crate::application::wizard::{AdvanceOutcome, RetreatOutcome, WizardStep};
use crate::catalog::ListingId;

#[test]
fn start_requires_a_known_listing() {
    let (sessions, _gateway) = sessions();
    match sessions.start(&ListingId("no-such-listing".to_string())) {
        Err(SessionError::UnknownListing(id)) => assert_eq!(id, "no-such-listing"),
        other => panic!("expected unknown listing, got {other:?}"),
    }
}

#[test]
fn start_opens_a_fresh_wizard_at_the_first_step() {
    let (sessions, _gateway) = sessions();
    let snapshot = sessions
        .start(&ListingId("1".to_string()))
        .expect("seed listing exists");

    assert_eq!(snapshot.step, WizardStep::Personal);
    assert_eq!(snapshot.step_number, 1);
    assert_eq!(snapshot.application_id, "1-APP");
    assert_eq!(snapshot.draft, Default::default());
    assert_eq!(sessions.open_sessions(), 1);
}

#[test]
fn unknown_sessions_are_reported_not_invented() {
    let (sessions, _gateway) = sessions();
    let missing = SessionId("session-999999".to_string());
    assert!(matches!(
        sessions.snapshot(&missing),
        Err(SessionError::UnknownSession(_))
    ));
    assert!(matches!(
        sessions.advance(&missing),
        Err(SessionError::UnknownSession(_))
    ));
}

#[test]
fn cancellation_discards_the_session_and_its_draft() {
    let (sessions, _gateway) = sessions();
    let snapshot = sessions
        .start(&ListingId("2".to_string()))
        .expect("seed listing exists");
    let id = snapshot.session_id.clone();

    sessions
        .update_field(&id, DraftField::FirstName, "Ann".to_string())
        .expect("live session accepts edits");

    assert_eq!(
        sessions.retreat(&id).expect("retreat succeeds"),
        RetreatOutcome::Cancelled
    );
    assert_eq!(sessions.open_sessions(), 0);
    assert!(matches!(
        sessions.snapshot(&id),
        Err(SessionError::UnknownSession(_))
    ));
}

#[test]
fn full_walkthrough_submits_and_closes_with_a_receipt() {
    let (sessions, gateway) = sessions();
    let id = sessions
        .start(&ListingId("3".to_string()))
        .expect("seed listing exists")
        .session_id;

    sessions
        .update_field(&id, DraftField::FirstName, "Ann".to_string())
        .expect("edit");
    sessions.advance(&id).expect("to employment");
    sessions
        .update_field(&id, DraftField::Employer, "Acme Corp".to_string())
        .expect("edit");
    sessions.advance(&id).expect("to financial");
    sessions.advance(&id).expect("to documents");
    sessions
        .upload_document(&id, DocumentKind::GovernmentId)
        .expect("upload");
    sessions.advance(&id).expect("to review");
    sessions
        .update_field(&id, DraftField::CardNumber, "4242424242424242".to_string())
        .expect("edit");

    match sessions.advance(&id).expect("submit") {
        AdvanceOutcome::Submitted(receipt) => assert_eq!(receipt.application_id, "3-APP"),
        other => panic!("expected submission, got {other:?}"),
    }

    let charges = gateway.charges();
    assert_eq!(charges.len(), 1);
    assert_eq!(charges[0].card.number.as_deref(), Some("4242424242424242"));

    let exit = sessions.finish(&id).expect("close session");
    assert!(exit.receipt.is_some());
    assert_eq!(sessions.open_sessions(), 0);
}

#[test]
fn session_ids_are_unique_across_starts() {
    let (sessions, _gateway) = sessions();
    let first = sessions.start(&ListingId("1".to_string())).expect("start");
    let second = sessions.start(&ListingId("1".to_string())).expect("start");
    assert_ne!(first.session_id, second.session_id);
    assert_eq!(sessions.open_sessions(), 2);
}
