use serde::{Deserialize, Serialize};

use super::super::domain::ApplicantRecord;
use super::config::EligibilityConfig;

/// Hard eligibility gates, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateId {
    MinimumAge,
    Nationality,
    ValidId,
    ActiveInAgriculture,
    NotGovernmentEmployee,
    NoDalrrdFunding,
    ProductionLimits,
    NoHouseholdApplication,
}

impl GateId {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::MinimumAge,
            Self::Nationality,
            Self::ValidId,
            Self::ActiveInAgriculture,
            Self::NotGovernmentEmployee,
            Self::NoDalrrdFunding,
            Self::ProductionLimits,
            Self::NoHouseholdApplication,
        ]
    }

    /// Reason reported when the gate fails.
    pub fn reason(self, config: &EligibilityConfig) -> String {
        match self {
            Self::MinimumAge => format!(
                "Applicant must be {} years or older",
                config.minimum_age
            ),
            Self::Nationality => format!("Applicant must be {}", config.required_nationality),
            Self::ValidId => "Applicant must have a valid ID".to_string(),
            Self::ActiveInAgriculture => "Applicant must be active in agriculture".to_string(),
            Self::NotGovernmentEmployee => {
                "Applicant must not be a government employee".to_string()
            }
            Self::NoDalrrdFunding => "Applicant must not have DALRRD funding".to_string(),
            Self::ProductionLimits => "Production exceeds programme limits".to_string(),
            Self::NoHouseholdApplication => "Household already has an application".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateResult {
    pub gate: GateId,
    pub passed: bool,
}

/// Per-gate outcome for one applicant; every gate is always evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateReport {
    pub results: Vec<GateResult>,
}

impl GateReport {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|result| result.passed)
    }

    pub fn failed(&self) -> impl Iterator<Item = GateId> + '_ {
        self.results
            .iter()
            .filter(|result| !result.passed)
            .map(|result| result.gate)
    }

    pub fn passed(&self, gate: GateId) -> Option<bool> {
        self.results
            .iter()
            .find(|result| result.gate == gate)
            .map(|result| result.passed)
    }
}

pub(crate) fn check_minimum_requirements(
    record: &ApplicantRecord,
    config: &EligibilityConfig,
) -> GateReport {
    let results = GateId::ordered()
        .into_iter()
        .map(|gate| GateResult {
            gate,
            passed: gate_passes(gate, record, config),
        })
        .collect();

    GateReport { results }
}

fn gate_passes(gate: GateId, record: &ApplicantRecord, config: &EligibilityConfig) -> bool {
    match gate {
        GateId::MinimumAge => record.age >= config.minimum_age,
        GateId::Nationality => record.nationality == config.required_nationality,
        GateId::ValidId => record.has_valid_id,
        GateId::ActiveInAgriculture => record.active_in_agriculture,
        GateId::NotGovernmentEmployee => !record.is_government_employee,
        GateId::NoDalrrdFunding => !record.has_dalrrd_funding,
        GateId::ProductionLimits => within_production_limits(record, config),
        GateId::NoHouseholdApplication => !record.household_has_application,
    }
}

fn within_production_limits(record: &ApplicantRecord, config: &EligibilityConfig) -> bool {
    let limits = &config.production_limits;
    let production = &record.production;

    let crops = production.hectares_vegetables <= limits.max_hectares_vegetables
        && production.hectares_maize <= limits.max_hectares_maize;
    let poultry = production.poultry_broilers <= limits.max_poultry_broilers
        || production.poultry_layers <= limits.max_poultry_layers;
    let livestock = production.small_stock_count <= limits.max_small_stock
        || production.large_stock_count <= limits.max_large_stock;

    crops && poultry && livestock
}
