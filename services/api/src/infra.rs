use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use pesi_eligibility::workflows::eligibility::{AlertError, AlertPublisher, ReviewAlert};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Review alerts written to the structured log for downstream collection.
#[derive(Debug, Default, Clone)]
pub(crate) struct LogAlertPublisher;

impl AlertPublisher for LogAlertPublisher {
    fn publish(&self, alert: ReviewAlert) -> Result<(), AlertError> {
        let correlation_id = alert
            .correlation_id
            .as_ref()
            .map(|id| id.0.as_str())
            .unwrap_or("-");
        warn!(
            template = %alert.template,
            correlation_id,
            details = ?alert.details,
            "manual review required"
        );
        Ok(())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
