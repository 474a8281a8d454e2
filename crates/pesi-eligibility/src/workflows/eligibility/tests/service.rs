use std::sync::Arc;

use super::common::*;
use crate::workflows::eligibility::{
    CorrelationId, Decision, EligibilityConfig, EligibilityService, MalformedInput,
    ScreeningStatus,
};

#[test]
fn clear_applications_emit_no_alerts() {
    let (service, alerts) = build_service();

    let assessment = service
        .assess_as_of(submission(), None, as_of())
        .expect("assessment succeeds");

    assert_eq!(assessment.result.decision, Decision::Accept);
    assert!(alerts.events().is_empty());
}

#[test]
fn flagged_applications_raise_a_review_alert() {
    let (service, alerts) = build_service();
    let mut submission = submission();
    submission.household_has_application = true;
    submission.hectares_maize = Some(400.0);
    let correlation = CorrelationId("req-42".to_string());

    let assessment = service
        .assess_as_of(submission, Some(&correlation), as_of())
        .expect("assessment succeeds");

    assert_eq!(assessment.result.status, ScreeningStatus::Flagged);
    let events = alerts.events();
    assert_eq!(events.len(), 1);
    let alert = &events[0];
    assert_eq!(alert.template, "application_flagged");
    assert_eq!(alert.correlation_id, Some(correlation));
    assert_eq!(
        alert.details.get("fraud_reasons").map(String::as_str),
        Some("Household already has an application; Unrealistic production numbers")
    );
    assert_eq!(alert.details.get("decision").map(String::as_str), Some("REJECT"));
}

#[test]
fn alert_failures_do_not_change_the_decision() {
    let service = EligibilityService::new(Arc::new(OfflineAlerts), EligibilityConfig::default());
    let mut submission = submission();
    submission.child_headed_household = true;

    let assessment = service
        .assess_as_of(submission, None, as_of())
        .expect("assessment succeeds despite offline alerts");

    assert_eq!(assessment.result.decision, Decision::Accept);
    assert_eq!(assessment.result.status, ScreeningStatus::Flagged);
}

#[test]
fn assess_rejects_unparseable_payloads() {
    let (service, alerts) = build_service();

    let error = service
        .assess(b"{\"idNumber\": 42}", None)
        .expect_err("payload rejected");

    assert!(matches!(error, MalformedInput::Payload(_)));
    assert!(alerts.events().is_empty());
}

#[test]
fn correlation_id_does_not_influence_the_result() {
    let (service, _) = build_service();

    let anonymous = service
        .assess_as_of(submission(), None, as_of())
        .expect("assessment succeeds");
    let tagged = service
        .assess_as_of(
            submission(),
            Some(&CorrelationId("trace-1".to_string())),
            as_of(),
        )
        .expect("assessment succeeds");

    assert_eq!(anonymous.result, tagged.result);
}

#[test]
fn engines_can_be_shared_across_threads() {
    let (service, _) = build_service();
    let service = Arc::new(service);
    let expected = service
        .assess_as_of(submission(), None, as_of())
        .expect("assessment succeeds")
        .result;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || {
                service
                    .assess_as_of(submission(), None, as_of())
                    .expect("assessment succeeds")
                    .result
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread completes"), expected);
    }
}
