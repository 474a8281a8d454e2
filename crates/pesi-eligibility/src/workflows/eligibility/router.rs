use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::alerts::AlertPublisher;
use super::domain::CorrelationId;
use super::intake::{ApplicantSubmission, MalformedInput};
use super::service::EligibilityService;
use crate::workflows::vouchers::VoucherRequest;

pub const CORRELATION_HEADER: &str = "x-correlation-id";

/// Body accepted by the voucher estimate endpoint.
#[derive(Debug, Deserialize)]
pub struct VoucherEstimateRequest {
    pub applicant: ApplicantSubmission,
    pub voucher: VoucherRequest,
}

/// Router builder exposing the eligibility and voucher endpoints.
pub fn eligibility_router<A>(service: Arc<EligibilityService<A>>) -> Router
where
    A: AlertPublisher + 'static,
{
    Router::new()
        .route("/api/v1/eligibility/assessments", post(assess_handler::<A>))
        .route("/api/v1/vouchers/estimates", post(voucher_handler::<A>))
        .with_state(service)
}

pub(crate) async fn assess_handler<A>(
    State(service): State<Arc<EligibilityService<A>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    A: AlertPublisher + 'static,
{
    let correlation_id = correlation_from(&headers);
    match service.assess(&body, correlation_id.as_ref()) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => malformed_response(error),
    }
}

pub(crate) async fn voucher_handler<A>(
    State(service): State<Arc<EligibilityService<A>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    A: AlertPublisher + 'static,
{
    let request: VoucherEstimateRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(error) => return malformed_response(MalformedInput::from(error)),
    };

    let correlation_id = correlation_from(&headers);
    let today = Local::now().date_naive();
    match service.quote_voucher(
        request.applicant,
        &request.voucher,
        correlation_id.as_ref(),
        today,
    ) {
        Ok(quote) => (StatusCode::OK, axum::Json(quote)).into_response(),
        Err(error) => malformed_response(error),
    }
}

fn correlation_from(headers: &HeaderMap) -> Option<CorrelationId> {
    headers
        .get(CORRELATION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| CorrelationId(value.to_string()))
}

fn malformed_response(error: MalformedInput) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
