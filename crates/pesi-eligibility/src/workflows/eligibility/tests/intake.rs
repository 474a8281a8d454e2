use super::common::*;
use crate::workflows::eligibility::{ApplicantSubmission, Gender, IntakeGuard, MalformedInput};

fn guard() -> IntakeGuard {
    IntakeGuard::default()
}

#[test]
fn parses_the_client_payload() {
    let record = guard()
        .record_from_submission(submission(), as_of())
        .expect("valid submission");

    assert_eq!(record, eligible_record());
}

#[test]
fn absent_or_null_production_metrics_default_to_zero() {
    let mut payload = applicant_json();
    let object = payload.as_object_mut().expect("object");
    object.remove("hectaresMaize");
    object.remove("largeStockCount");
    object.insert("poultryLayers".to_string(), serde_json::Value::Null);

    let record = guard()
        .record_from_json(payload, as_of())
        .expect("valid submission");

    assert_eq!(record.production.hectares_maize, 0.0);
    assert_eq!(record.production.large_stock_count, 0.0);
    assert_eq!(record.production.poultry_layers, 0.0);
    assert_eq!(record.production.poultry_broilers, 80.0);
}

#[test]
fn non_numeric_metric_is_malformed() {
    let mut payload = applicant_json();
    payload["hectaresVegetables"] = serde_json::json!("half a hectare");

    let error = guard()
        .record_from_json(payload, as_of())
        .expect_err("string metric rejected");
    assert!(matches!(error, MalformedInput::Payload(_)));
}

#[test]
fn missing_status_flag_is_malformed() {
    let mut payload = applicant_json();
    payload
        .as_object_mut()
        .expect("object")
        .remove("isGovernmentEmployee");

    let error = ApplicantSubmission::from_json(payload).expect_err("flag required");
    assert!(error.to_string().contains("isGovernmentEmployee"));
}

#[test]
fn stringly_typed_age_is_not_coerced() {
    let mut payload = applicant_json();
    payload["age"] = serde_json::json!("25");

    assert!(matches!(
        ApplicantSubmission::from_json(payload),
        Err(MalformedInput::Payload(_))
    ));
}

#[test]
fn malformed_date_of_birth_is_rejected() {
    let mut payload = applicant_json();
    payload["dateOfBirth"] = serde_json::json!("12/03/2000");

    assert!(ApplicantSubmission::from_json(payload).is_err());
}

#[test]
fn accepts_the_legacy_dob_key_and_capitalised_gender() {
    let mut payload = applicant_json();
    let object = payload.as_object_mut().expect("object");
    object.remove("dateOfBirth");
    object.insert("dob".to_string(), serde_json::json!("2000-03-12"));
    object.insert("gender".to_string(), serde_json::json!("Female"));

    let submission = ApplicantSubmission::from_json(payload).expect("parses");
    assert_eq!(submission.date_of_birth, Some(date(2000, 3, 12)));
    assert_eq!(submission.gender, Gender::Female);
}

#[test]
fn age_is_derived_from_date_of_birth_when_absent() {
    let mut submission = submission();
    submission.age = None;

    let record = guard()
        .record_from_submission(submission, as_of())
        .expect("age derived");
    assert_eq!(record.age, 25);
}

#[test]
fn age_falls_back_to_the_identity_number() {
    let mut submission = submission();
    submission.age = None;
    submission.date_of_birth = None;
    submission.id_number = MALE_1985_ID.to_string();

    let record = guard()
        .record_from_submission(submission, as_of())
        .expect("age derived from id");
    assert_eq!(record.age, 40);
}

#[test]
fn age_without_any_date_source_is_missing() {
    let mut submission = submission();
    submission.age = None;
    submission.date_of_birth = None;
    submission.id_number = "not-an-id".to_string();

    let error = guard()
        .record_from_submission(submission, as_of())
        .expect_err("age cannot be derived");
    assert!(matches!(error, MalformedInput::MissingField("age")));
}

#[test]
fn future_date_of_birth_cannot_yield_an_age() {
    let mut submission = submission();
    submission.age = None;
    submission.date_of_birth = Some(date(2030, 1, 1));

    let error = guard()
        .record_from_submission(submission, as_of())
        .expect_err("birth date after evaluation date");
    assert!(matches!(
        error,
        MalformedInput::DateOfBirthInFuture(dob) if dob == date(2030, 1, 1)
    ));
    assert!(error.to_string().contains("2030-01-01"));
}

#[test]
fn non_finite_metric_is_rejected() {
    let mut submission = submission();
    submission.small_stock_count = Some(f64::INFINITY);

    let error = guard()
        .record_from_submission(submission, as_of())
        .expect_err("infinite metric rejected");
    assert!(matches!(
        error,
        MalformedInput::NonFiniteMetric("smallStockCount")
    ));
}
