use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use super::alerts::{AlertPublisher, ReviewAlert};
use super::domain::{ApplicantRecord, CorrelationId, DecisionResult, ScreeningStatus};
use super::evaluation::{EligibilityAssessment, EligibilityConfig, EligibilityEngine};
use super::identity::IdentityValidator;
use super::intake::{ApplicantSubmission, IntakeGuard, MalformedInput};
use crate::workflows::vouchers::{self, VoucherQuote, VoucherRequest};

const FLAGGED_TEMPLATE: &str = "application_flagged";

/// Service composing intake, the rule engine, and review alerts.
pub struct EligibilityService<A> {
    guard: IntakeGuard,
    engine: Arc<EligibilityEngine>,
    alerts: Arc<A>,
}

impl<A> EligibilityService<A>
where
    A: AlertPublisher + 'static,
{
    pub fn new(alerts: Arc<A>, config: EligibilityConfig) -> Self {
        let guard = IntakeGuard::new(IdentityValidator::new(config.identity));
        let engine = Arc::new(EligibilityEngine::new(config));

        Self {
            guard,
            engine,
            alerts,
        }
    }

    pub fn engine(&self) -> &EligibilityEngine {
        &self.engine
    }

    /// Evaluate a raw applicant payload as of today.
    pub fn assess(
        &self,
        payload: &[u8],
        correlation_id: Option<&CorrelationId>,
    ) -> Result<DecisionResult, MalformedInput> {
        let submission = ApplicantSubmission::from_slice(payload)?;
        let today = Local::now().date_naive();
        let assessment = self.assess_as_of(submission, correlation_id, today)?;
        Ok(assessment.result)
    }

    /// Evaluate a parsed submission; flagged applications are forwarded for review.
    pub fn assess_as_of(
        &self,
        submission: ApplicantSubmission,
        correlation_id: Option<&CorrelationId>,
        as_of: NaiveDate,
    ) -> Result<EligibilityAssessment, MalformedInput> {
        let (_, assessment) = self.screen(submission, correlation_id, as_of)?;
        Ok(assessment)
    }

    /// Evaluate the applicant and, when accepted, estimate the requested voucher.
    pub fn quote_voucher(
        &self,
        submission: ApplicantSubmission,
        request: &VoucherRequest,
        correlation_id: Option<&CorrelationId>,
        as_of: NaiveDate,
    ) -> Result<VoucherQuote, MalformedInput> {
        let (record, assessment) = self.screen(submission, correlation_id, as_of)?;
        Ok(vouchers::quote(&record, assessment.result, request))
    }

    fn screen(
        &self,
        submission: ApplicantSubmission,
        correlation_id: Option<&CorrelationId>,
        as_of: NaiveDate,
    ) -> Result<(ApplicantRecord, EligibilityAssessment), MalformedInput> {
        let record = self.guard.record_from_submission(submission, as_of)?;
        let assessment = self.engine.evaluate(&record, as_of);

        if assessment.result.status == ScreeningStatus::Flagged {
            self.raise_review(&assessment, correlation_id);
        }

        Ok((record, assessment))
    }

    fn raise_review(
        &self,
        assessment: &EligibilityAssessment,
        correlation_id: Option<&CorrelationId>,
    ) {
        let fraud_reasons: Vec<&str> = assessment.fraud.reasons().collect();
        let correlation = correlation_id.map(|id| id.0.as_str()).unwrap_or("-");
        info!(
            correlation_id = correlation,
            reasons = ?fraud_reasons,
            "application flagged for review"
        );

        let mut details = BTreeMap::new();
        details.insert(
            "decision".to_string(),
            assessment.result.decision.label().to_string(),
        );
        details.insert("score".to_string(), assessment.result.score.to_string());
        details.insert("fraud_reasons".to_string(), fraud_reasons.join("; "));

        let alert = ReviewAlert {
            template: FLAGGED_TEMPLATE.to_string(),
            correlation_id: correlation_id.cloned(),
            details,
        };

        // the decision stands even when the review queue is unreachable
        if let Err(error) = self.alerts.publish(alert) {
            warn!(correlation_id = correlation, %error, "review alert not delivered");
        }
    }
}
