//! PESI applicant screening: identity validation, minimum requirement gates, priority
//! scoring, and fraud checks, combined into one deterministic decision.
//!
//! Evaluation is a pure function of the applicant record and the evaluation date. The
//! service and router layers add intake, review alerts, and an HTTP surface on top.

pub mod alerts;
pub mod domain;
pub mod evaluation;
pub mod identity;
pub mod intake;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use alerts::{AlertError, AlertPublisher, ReviewAlert};
pub use domain::{
    ApplicantRecord, CorrelationId, Decision, DecisionResult, Gender, ProductionMetrics,
    ScreeningStatus,
};
pub use evaluation::{
    EligibilityAssessment, EligibilityConfig, EligibilityEngine, FraudCheck, FraudReport, GateId,
    GateReport, ScoreCard, ScoreFactor,
};
pub use identity::{IdentityConfig, IdentityFailure, IdentityReport, IdentityValidator};
pub use intake::{ApplicantSubmission, IntakeGuard, MalformedInput};
pub use router::eligibility_router;
pub use service::EligibilityService;
