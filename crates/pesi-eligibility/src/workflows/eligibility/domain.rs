use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Caller-supplied identifier threaded through logs and alerts. Never part of a decision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationId(pub String);

/// Gender as declared on the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[serde(alias = "Female", alias = "FEMALE")]
    Female,
    #[serde(alias = "Male", alias = "MALE")]
    Male,
}

/// Declared production volumes. Absent metrics are recorded as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionMetrics {
    pub hectares_vegetables: f64,
    pub hectares_maize: f64,
    pub poultry_broilers: f64,
    pub poultry_layers: f64,
    pub small_stock_count: f64,
    pub large_stock_count: f64,
}

impl ProductionMetrics {
    /// Metric values keyed by their wire names, in declaration order.
    pub fn named_values(&self) -> [(&'static str, f64); 6] {
        [
            ("hectaresVegetables", self.hectares_vegetables),
            ("hectaresMaize", self.hectares_maize),
            ("poultryBroilers", self.poultry_broilers),
            ("poultryLayers", self.poultry_layers),
            ("smallStockCount", self.small_stock_count),
            ("largeStockCount", self.large_stock_count),
        ]
    }
}

/// Validated applicant snapshot consumed by the eligibility engine.
///
/// Produced by [`IntakeGuard`](super::intake::IntakeGuard); `age` is always resolved, either as
/// supplied by the caller or derived from a date of birth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRecord {
    pub id_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub age: u32,
    pub nationality: String,
    pub has_valid_id: bool,
    pub active_in_agriculture: bool,
    pub is_government_employee: bool,
    #[serde(rename = "hasDALRRDFunding")]
    pub has_dalrrd_funding: bool,
    pub household_has_application: bool,
    pub disability: bool,
    pub military_veteran: bool,
    pub child_headed_household: bool,
    pub production: ProductionMetrics,
}

/// Final eligibility verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Accept => "ACCEPT",
            Decision::Reject => "REJECT",
        }
    }
}

/// Fraud screening status, independent of the eligibility verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScreeningStatus {
    Clear,
    Flagged,
}

impl ScreeningStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ScreeningStatus::Clear => "CLEAR",
            ScreeningStatus::Flagged => "FLAGGED",
        }
    }
}

/// Wire-level result handed back to callers. Serializes to exactly
/// `{"decision", "reasons", "score", "status"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecisionResult {
    pub decision: Decision,
    pub reasons: Vec<String>,
    pub score: u32,
    pub status: ScreeningStatus,
}

impl DecisionResult {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
