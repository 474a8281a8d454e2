use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::CorrelationId;

/// Outbound hook for applications that need manual review (case management, e-mail, ...).
pub trait AlertPublisher: Send + Sync {
    fn publish(&self, alert: ReviewAlert) -> Result<(), AlertError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAlert {
    pub template: String,
    pub correlation_id: Option<CorrelationId>,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}
