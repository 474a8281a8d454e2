use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::super::domain::{ApplicantRecord, ScreeningStatus};
use super::super::identity::{prefix_matches_date_of_birth, IdentityReport};
use super::config::EligibilityConfig;

/// Consistency and magnitude checks, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudCheck {
    DuplicateHouseholdApplication,
    UnrealisticProduction,
    AgeDateOfBirthMismatch,
    InvalidIdNumber,
    ChildHeadedHouseholdAge,
    IdDateOfBirthMismatch,
}

impl FraudCheck {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::DuplicateHouseholdApplication,
            Self::UnrealisticProduction,
            Self::AgeDateOfBirthMismatch,
            Self::InvalidIdNumber,
            Self::ChildHeadedHouseholdAge,
            Self::IdDateOfBirthMismatch,
        ]
    }

    pub const fn reason(self) -> &'static str {
        match self {
            Self::DuplicateHouseholdApplication => "Household already has an application",
            Self::UnrealisticProduction => "Unrealistic production numbers",
            Self::AgeDateOfBirthMismatch => "Age does not match date of birth",
            Self::InvalidIdNumber => "Invalid ID number format",
            Self::ChildHeadedHouseholdAge => "Child-headed household inconsistent with age",
            Self::IdDateOfBirthMismatch => "ID number does not match date of birth",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudReport {
    /// Raised checks, in [`FraudCheck::ordered`] order.
    pub flags: Vec<FraudCheck>,
}

impl FraudReport {
    pub fn status(&self) -> ScreeningStatus {
        if self.flags.is_empty() {
            ScreeningStatus::Clear
        } else {
            ScreeningStatus::Flagged
        }
    }

    pub fn is_flagged(&self, check: FraudCheck) -> bool {
        self.flags.contains(&check)
    }

    pub fn reasons(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.flags.iter().map(|check| check.reason())
    }
}

pub(crate) fn detect_fraud(
    record: &ApplicantRecord,
    identity: &IdentityReport,
    config: &EligibilityConfig,
    as_of: NaiveDate,
) -> FraudReport {
    let flags = FraudCheck::ordered()
        .into_iter()
        .filter(|check| raised(*check, record, identity, config, as_of))
        .collect();

    FraudReport { flags }
}

fn raised(
    check: FraudCheck,
    record: &ApplicantRecord,
    identity: &IdentityReport,
    config: &EligibilityConfig,
    as_of: NaiveDate,
) -> bool {
    match check {
        FraudCheck::DuplicateHouseholdApplication => record.household_has_application,
        FraudCheck::UnrealisticProduction => unrealistic_production(record, config),
        // a date of birth in the future can never match
        FraudCheck::AgeDateOfBirthMismatch => record
            .date_of_birth
            .is_some_and(|dob| as_of.years_since(dob) != Some(record.age)),
        FraudCheck::InvalidIdNumber => !identity.is_valid(),
        FraudCheck::ChildHeadedHouseholdAge => {
            record.child_headed_household && record.age >= config.minimum_age
        }
        FraudCheck::IdDateOfBirthMismatch => record
            .date_of_birth
            .is_some_and(|dob| !prefix_matches_date_of_birth(&record.id_number, dob)),
    }
}

fn unrealistic_production(record: &ApplicantRecord, config: &EligibilityConfig) -> bool {
    let limits = &config.fraud_limits;
    let production = &record.production;

    let negative = production
        .named_values()
        .iter()
        .any(|(_, value)| *value < 0.0);

    negative
        || production.hectares_vegetables > limits.max_hectares
        || production.hectares_maize > limits.max_hectares
        || production.poultry_broilers > limits.max_poultry
        || production.poultry_layers > limits.max_poultry
        || production.small_stock_count > limits.max_stock
        || production.large_stock_count > limits.max_stock
}
