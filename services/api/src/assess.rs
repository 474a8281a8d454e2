use crate::infra::{parse_date, LogAlertPublisher};
use chrono::{Local, NaiveDate};
use clap::Args;
use pesi_eligibility::config::AppConfig;
use pesi_eligibility::error::AppError;
use pesi_eligibility::telemetry;
use pesi_eligibility::workflows::eligibility::{
    ApplicantSubmission, CorrelationId, EligibilityAssessment, EligibilityService,
};
use std::io::Read;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Applicant JSON file, or `-` to read from stdin
    #[arg(long, default_value = "-")]
    pub(crate) input: String,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Correlation identifier carried into logs and review alerts
    #[arg(long)]
    pub(crate) correlation_id: Option<String>,
    /// Print the gate, score, and fraud breakdown to stderr
    #[arg(long)]
    pub(crate) explain: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    // stdout carries only the decision JSON
    telemetry::init_stderr(&config.telemetry)?;

    let payload = read_payload(&args.input)?;
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let correlation_id = args.correlation_id.map(CorrelationId);

    let service = EligibilityService::new(Arc::new(LogAlertPublisher), config.eligibility);
    let assessment = assess_payload(&service, &payload, correlation_id.as_ref(), as_of)?;

    if args.explain {
        eprint!("{}", render_breakdown(&assessment, as_of));
    }
    println!("{}", assessment.result.to_json()?);
    Ok(())
}

fn assess_payload(
    service: &EligibilityService<LogAlertPublisher>,
    payload: &[u8],
    correlation_id: Option<&CorrelationId>,
    as_of: NaiveDate,
) -> Result<EligibilityAssessment, AppError> {
    let submission = ApplicantSubmission::from_slice(payload)?;
    Ok(service.assess_as_of(submission, correlation_id, as_of)?)
}

fn read_payload(input: &str) -> Result<Vec<u8>, AppError> {
    if input == "-" {
        let mut buffer = Vec::new();
        std::io::stdin().read_to_end(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read(input)?)
    }
}

fn render_breakdown(assessment: &EligibilityAssessment, as_of: NaiveDate) -> String {
    let mut out = format!("Assessment as of {as_of}\n");

    match &assessment.identity.failure {
        None => out.push_str("  Identity: valid\n"),
        Some(failure) => out.push_str(&format!("  Identity: {failure}\n")),
    }

    out.push_str("  Gates:\n");
    for result in &assessment.gates.results {
        let mark = if result.passed { "pass" } else { "FAIL" };
        out.push_str(&format!("    [{mark}] {:?}\n", result.gate));
    }

    out.push_str(&format!(
        "  Score: {} (threshold {})\n",
        assessment.score.total, assessment.score.threshold
    ));
    for component in &assessment.score.components {
        out.push_str(&format!(
            "    +{} {:?}: {}\n",
            component.points, component.factor, component.notes
        ));
    }

    if assessment.fraud.flags.is_empty() {
        out.push_str("  Fraud checks: clear\n");
    } else {
        out.push_str("  Fraud checks:\n");
        for reason in assessment.fraud.reasons() {
            out.push_str(&format!("    - {reason}\n"));
        }
    }

    out
}
