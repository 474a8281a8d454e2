use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::eligibility::router::{assess_handler, CORRELATION_HEADER};

fn post(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(CORRELATION_HEADER, "route-test")
        .body(Body::from(body))
        .expect("request builds")
}

#[tokio::test]
async fn assessment_route_returns_the_decision_contract() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let body = serde_json::to_vec(&applicant_json()).expect("json");

    let response = router
        .oneshot(post("/api/v1/eligibility/assessments", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_object().map(|object| object.len()), Some(4));
    assert!(matches!(
        payload.get("decision").and_then(serde_json::Value::as_str),
        Some("ACCEPT" | "REJECT")
    ));
    assert!(payload.get("reasons").is_some_and(serde_json::Value::is_array));
}

#[tokio::test]
async fn assessment_route_reports_malformed_input() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post(
            "/api/v1/eligibility/assessments",
            b"{\"idNumber\": \"8506065800086\"}".to_vec(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("missing field"));
}

#[tokio::test]
async fn assess_handler_forwards_correlation_header_to_alerts() {
    let (service, alerts) = build_service();
    let mut payload = applicant_json();
    payload["householdHasApplication"] = json!(true);

    let mut headers = axum::http::HeaderMap::new();
    headers.insert(CORRELATION_HEADER, "handler-7".parse().expect("header value"));

    let response = assess_handler(
        State(Arc::new(service)),
        headers,
        serde_json::to_vec(&payload).expect("json").into(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let events = alerts.events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].correlation_id.as_ref().map(|id| id.0.as_str()),
        Some("handler-7")
    );
}

#[tokio::test]
async fn voucher_route_quotes_accepted_applicants() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let body = serde_json::to_vec(&json!({
        "applicant": applicant_json(),
        "voucher": {
            "category": "vegetables_fruit",
            "documents": ["sa_id", "proof_of_residence"]
        }
    }))
    .expect("json");

    let response = router
        .oneshot(post("/api/v1/vouchers/estimates", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("qualifies"), Some(&json!(true)));
    let estimate = payload.get("estimate").expect("estimate present");
    assert_eq!(
        estimate.get("missing_documents"),
        Some(&json!(["bank_details", "land_access"]))
    );
}

#[tokio::test]
async fn voucher_route_rejects_unknown_categories() {
    let (service, _) = build_service();
    let router = router_with_service(service);
    let body = serde_json::to_vec(&json!({
        "applicant": applicant_json(),
        "voucher": { "category": "orchids" }
    }))
    .expect("json");

    let response = router
        .oneshot(post("/api/v1/vouchers/estimates", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
