use serde::{Deserialize, Serialize};

use crate::workflows::eligibility::ApplicantRecord;

/// Supporting documents collected with a voucher application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    SaId,
    ProofOfResidence,
    BankDetails,
    LandAccess,
    DisabilityCertificate,
    MilitaryRecord,
    DeathCertificate,
    SocialWorkerReport,
}

impl DocumentKind {
    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::SaId => "SA ID",
            DocumentKind::ProofOfResidence => "Proof of residence",
            DocumentKind::BankDetails => "Bank details",
            DocumentKind::LandAccess => "Land access",
            DocumentKind::DisabilityCertificate => "Disability certificate",
            DocumentKind::MilitaryRecord => "Military record",
            DocumentKind::DeathCertificate => "Death certificate",
            DocumentKind::SocialWorkerReport => "Social worker report",
        }
    }
}

/// Documents this applicant must supply. Declared circumstances that earn points must be
/// backed by their certificate.
pub fn required_documents(record: &ApplicantRecord) -> Vec<DocumentKind> {
    let mut required = vec![
        DocumentKind::SaId,
        DocumentKind::ProofOfResidence,
        DocumentKind::BankDetails,
        DocumentKind::LandAccess,
    ];

    if record.disability {
        required.push(DocumentKind::DisabilityCertificate);
    }
    if record.military_veteran {
        required.push(DocumentKind::MilitaryRecord);
    }
    if record.child_headed_household {
        required.push(DocumentKind::DeathCertificate);
        required.push(DocumentKind::SocialWorkerReport);
    }

    required
}

pub fn missing_documents(record: &ApplicantRecord, provided: &[DocumentKind]) -> Vec<DocumentKind> {
    required_documents(record)
        .into_iter()
        .filter(|kind| !provided.contains(kind))
        .collect()
}
