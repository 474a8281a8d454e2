//! Voucher value estimates for applicants who pass the eligibility check.

pub mod catalog;
pub mod documents;
mod estimate;

pub use catalog::{Programme, ValueRange, VoucherCategory};
pub use documents::{missing_documents, required_documents, DocumentKind};
pub use estimate::{
    estimate_voucher, AdjustmentKind, ValueAdjustment, VoucherEstimate, VoucherRequest,
};

use serde::{Deserialize, Serialize};

use crate::workflows::eligibility::{ApplicantRecord, Decision, DecisionResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoucherQuote {
    pub qualifies: bool,
    pub decision: DecisionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<VoucherEstimate>,
}

/// Quote a voucher for an evaluated applicant; rejected applicants get no estimate.
pub fn quote(
    record: &ApplicantRecord,
    decision: DecisionResult,
    request: &VoucherRequest,
) -> VoucherQuote {
    let qualifies = decision.decision == Decision::Accept;
    let estimate = qualifies.then(|| estimate_voucher(record, request));

    VoucherQuote {
        qualifies,
        decision,
        estimate,
    }
}
