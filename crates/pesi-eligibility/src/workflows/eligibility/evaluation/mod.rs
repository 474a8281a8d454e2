mod config;
mod fraud;
mod gates;
mod policy;
mod scoring;

pub use config::{EligibilityConfig, FraudLimits, PointTable, ProductionLimits};
pub use fraud::{FraudCheck, FraudReport};
pub use gates::{GateId, GateReport, GateResult};
pub use scoring::{ScoreCard, ScoreComponent, ScoreFactor};

use chrono::NaiveDate;
use tracing::debug;

use super::domain::{ApplicantRecord, DecisionResult};
use super::identity::{IdentityReport, IdentityValidator};
use fraud::detect_fraud;
use gates::check_minimum_requirements;
use policy::assemble_decision;
use scoring::score_applicant;

/// Stateless evaluator applying the rule table to one applicant at a time.
///
/// Holds only read-only configuration, so a single engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    config: EligibilityConfig,
    identity: IdentityValidator,
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new(EligibilityConfig::default())
    }
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig) -> Self {
        let identity = IdentityValidator::new(config.identity);
        Self { config, identity }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    pub fn identity(&self) -> &IdentityValidator {
        &self.identity
    }

    /// Run every component and keep their intermediate outputs alongside the result.
    pub fn evaluate(&self, record: &ApplicantRecord, as_of: NaiveDate) -> EligibilityAssessment {
        let identity = self.identity.validate(&record.id_number);
        let gates = check_minimum_requirements(record, &self.config);
        let score = score_applicant(record, &self.config);
        let fraud = detect_fraud(record, &identity, &self.config, as_of);
        let result = assemble_decision(&gates, &score, &fraud, &self.config);

        let failed_gates: Vec<GateId> = gates.failed().collect();
        debug!(
            decision = result.decision.label(),
            status = result.status.label(),
            score = result.score,
            failed_gates = ?failed_gates,
            fraud_flags = ?fraud.flags,
            "applicant evaluated"
        );

        EligibilityAssessment {
            identity,
            gates,
            score,
            fraud,
            result,
        }
    }

    pub fn decide(&self, record: &ApplicantRecord, as_of: NaiveDate) -> DecisionResult {
        self.evaluate(record, as_of).result
    }
}

/// Audit trail for one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityAssessment {
    pub identity: IdentityReport,
    pub gates: GateReport,
    pub score: ScoreCard,
    pub fraud: FraudReport,
    pub result: DecisionResult,
}
