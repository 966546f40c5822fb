use serde::{Deserialize, Serialize};

use super::wizard::WizardStep;

/// Marker value recorded when a document upload completes. No file bytes are
/// stored; the hosting layer owns the real transfer.
pub const DOCUMENT_PLACEHOLDER: &str = "document_placeholder.pdf";

/// Named fields collected across the wizard sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    Ssn,
    Employer,
    Position,
    WorkPhone,
    MonthlyIncome,
    EmploymentLength,
    CreditScore,
    BankName,
    AccountNumber,
    RoutingNumber,
    IdDocument,
    ProofOfIncome,
    CardNumber,
    CardExpiry,
    CardCvv,
    CardName,
}

impl DraftField {
    /// The wizard section this field is collected in.
    pub const fn section(self) -> WizardStep {
        match self {
            Self::FirstName
            | Self::LastName
            | Self::Email
            | Self::Phone
            | Self::DateOfBirth
            | Self::Ssn => WizardStep::Personal,
            Self::Employer
            | Self::Position
            | Self::WorkPhone
            | Self::MonthlyIncome
            | Self::EmploymentLength => WizardStep::Employment,
            Self::CreditScore | Self::BankName | Self::AccountNumber | Self::RoutingNumber => {
                WizardStep::Financial
            }
            Self::IdDocument | Self::ProofOfIncome => WizardStep::Documents,
            Self::CardNumber | Self::CardExpiry | Self::CardCvv | Self::CardName => {
                WizardStep::Review
            }
        }
    }
}

/// Binary upload markers captured during the Documents step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    GovernmentId,
    ProofOfIncome,
}

impl DocumentKind {
    pub const fn field(self) -> DraftField {
        match self {
            Self::GovernmentId => DraftField::IdDocument,
            Self::ProofOfIncome => DraftField::ProofOfIncome,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::GovernmentId => "Government ID",
            Self::ProofOfIncome => "Proof of Income",
        }
    }
}

/// The accumulating rental-application record. Fields persist once set until
/// explicitly overwritten; backward navigation never rolls anything back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub ssn: Option<String>,

    pub employer: Option<String>,
    pub position: Option<String>,
    pub work_phone: Option<String>,
    pub monthly_income: Option<String>,
    pub employment_length: Option<String>,

    pub credit_score: Option<String>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,

    pub id_document: Option<String>,
    pub proof_of_income: Option<String>,

    pub card_number: Option<String>,
    pub card_expiry: Option<String>,
    pub card_cvv: Option<String>,
    pub card_name: Option<String>,
}

impl ApplicationDraft {
    /// Single mutator covering every field.
    pub fn set(&mut self, field: DraftField, value: String) {
        *self.slot_mut(field) = Some(value);
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    fn slot(&self, field: DraftField) -> &Option<String> {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::DateOfBirth => &self.date_of_birth,
            DraftField::Ssn => &self.ssn,
            DraftField::Employer => &self.employer,
            DraftField::Position => &self.position,
            DraftField::WorkPhone => &self.work_phone,
            DraftField::MonthlyIncome => &self.monthly_income,
            DraftField::EmploymentLength => &self.employment_length,
            DraftField::CreditScore => &self.credit_score,
            DraftField::BankName => &self.bank_name,
            DraftField::AccountNumber => &self.account_number,
            DraftField::RoutingNumber => &self.routing_number,
            DraftField::IdDocument => &self.id_document,
            DraftField::ProofOfIncome => &self.proof_of_income,
            DraftField::CardNumber => &self.card_number,
            DraftField::CardExpiry => &self.card_expiry,
            DraftField::CardCvv => &self.card_cvv,
            DraftField::CardName => &self.card_name,
        }
    }

    fn slot_mut(&mut self, field: DraftField) -> &mut Option<String> {
        match field {
            DraftField::FirstName => &mut self.first_name,
            DraftField::LastName => &mut self.last_name,
            DraftField::Email => &mut self.email,
            DraftField::Phone => &mut self.phone,
            DraftField::DateOfBirth => &mut self.date_of_birth,
            DraftField::Ssn => &mut self.ssn,
            DraftField::Employer => &mut self.employer,
            DraftField::Position => &mut self.position,
            DraftField::WorkPhone => &mut self.work_phone,
            DraftField::MonthlyIncome => &mut self.monthly_income,
            DraftField::EmploymentLength => &mut self.employment_length,
            DraftField::CreditScore => &mut self.credit_score,
            DraftField::BankName => &mut self.bank_name,
            DraftField::AccountNumber => &mut self.account_number,
            DraftField::RoutingNumber => &mut self.routing_number,
            DraftField::IdDocument => &mut self.id_document,
            DraftField::ProofOfIncome => &mut self.proof_of_income,
            DraftField::CardNumber => &mut self.card_number,
            DraftField::CardExpiry => &mut self.card_expiry,
            DraftField::CardCvv => &mut self.card_cvv,
            DraftField::CardName => &mut self.card_name,
        }
    }
}
