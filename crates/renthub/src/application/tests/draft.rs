use crate::application::draft::{ApplicationDraft, DocumentKind, DraftField};
use crate::application::wizard::WizardStep;

#[test]
fn starts_empty() {
    let draft = ApplicationDraft::default();
    assert_eq!(draft, ApplicationDraft::default());
    assert_eq!(draft.get(DraftField::FirstName), None);
    assert_eq!(draft.get(DraftField::CardCvv), None);
}

#[test]
fn the_single_mutator_overwrites_in_place() {
    let mut draft = ApplicationDraft::default();
    draft.set(DraftField::Email, "ann@example.com".to_string());
    draft.set(DraftField::Email, "ann.b@example.com".to_string());
    assert_eq!(draft.get(DraftField::Email), Some("ann.b@example.com"));
    assert_eq!(draft.email.as_deref(), Some("ann.b@example.com"));
}

#[test]
fn setting_one_field_leaves_the_rest_untouched() {
    let mut draft = ApplicationDraft::default();
    draft.set(DraftField::BankName, "First National".to_string());
    assert_eq!(draft.get(DraftField::AccountNumber), None);
    assert_eq!(draft.get(DraftField::RoutingNumber), None);
}

#[test]
fn fields_map_to_their_collecting_section() {
    assert_eq!(DraftField::Ssn.section(), WizardStep::Personal);
    assert_eq!(DraftField::MonthlyIncome.section(), WizardStep::Employment);
    assert_eq!(DraftField::RoutingNumber.section(), WizardStep::Financial);
    assert_eq!(DraftField::ProofOfIncome.section(), WizardStep::Documents);
    assert_eq!(DraftField::CardExpiry.section(), WizardStep::Review);
}

#[test]
fn document_kinds_map_to_their_marker_fields() {
    assert_eq!(DocumentKind::GovernmentId.field(), DraftField::IdDocument);
    assert_eq!(DocumentKind::ProofOfIncome.field(), DraftField::ProofOfIncome);
    assert_eq!(DocumentKind::GovernmentId.label(), "Government ID");
}
