use super::super::domain::{Decision, DecisionResult};
use super::config::EligibilityConfig;
use super::fraud::FraudReport;
use super::gates::GateReport;
use super::scoring::ScoreCard;

/// Combine gate, score, and fraud outcomes into the exposed result.
///
/// Reasons are ordered failed gates, then the score shortfall, then fraud flags, and the list
/// is cut to `config.max_reasons`. Unlike a plain concatenation, wording already collected is
/// skipped before the cut, so the household gate and the duplicate-household fraud check
/// report one shared line.
pub(crate) fn assemble_decision(
    gates: &GateReport,
    score: &ScoreCard,
    fraud: &FraudReport,
    config: &EligibilityConfig,
) -> DecisionResult {
    let decision = if gates.all_passed() && score.meets_threshold() {
        Decision::Accept
    } else {
        Decision::Reject
    };

    let candidates = gates
        .failed()
        .map(|gate| gate.reason(config))
        .chain(score.shortfall_reason())
        .chain(fraud.reasons().map(str::to_string));

    let mut reasons: Vec<String> = Vec::with_capacity(config.max_reasons);
    for reason in candidates {
        if reasons.len() == config.max_reasons {
            break;
        }
        if !reasons.contains(&reason) {
            reasons.push(reason);
        }
    }

    DecisionResult {
        decision,
        reasons,
        score: score.total,
        status: fraud.status(),
    }
}
