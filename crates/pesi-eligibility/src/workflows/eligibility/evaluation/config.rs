use serde::{Deserialize, Serialize};

use super::super::identity::IdentityConfig;

/// Canonical rule table for the PESI eligibility check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub minimum_age: u32,
    pub required_nationality: String,
    pub production_limits: ProductionLimits,
    pub points: PointTable,
    pub minimum_score: u32,
    pub fraud_limits: FraudLimits,
    pub identity: IdentityConfig,
    /// Upper bound on reasons exposed in a decision.
    pub max_reasons: usize,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            minimum_age: 18,
            required_nationality: "South African".to_string(),
            production_limits: ProductionLimits::default(),
            points: PointTable::default(),
            minimum_score: 11,
            fraud_limits: FraudLimits::default(),
            identity: IdentityConfig::default(),
            max_reasons: 2,
        }
    }
}

/// Smallholder ceilings; an applicant above them is not a PESI target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductionLimits {
    pub max_hectares_vegetables: f64,
    pub max_hectares_maize: f64,
    pub max_poultry_broilers: f64,
    pub max_poultry_layers: f64,
    pub max_small_stock: f64,
    pub max_large_stock: f64,
}

impl Default for ProductionLimits {
    fn default() -> Self {
        Self {
            max_hectares_vegetables: 1.0,
            max_hectares_maize: 1.0,
            max_poultry_broilers: 100.0,
            max_poultry_layers: 50.0,
            max_small_stock: 25.0,
            max_large_stock: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTable {
    pub female: u32,
    pub male: u32,
    pub youth_min_age: u32,
    pub youth_max_age: u32,
    pub youth: u32,
    pub non_youth: u32,
    pub disability: u32,
    pub no_disability: u32,
    pub military_veteran: u32,
    pub child_headed_household: u32,
}

impl Default for PointTable {
    fn default() -> Self {
        Self {
            female: 5,
            male: 3,
            youth_min_age: 18,
            youth_max_age: 35,
            youth: 5,
            non_youth: 3,
            disability: 5,
            no_disability: 3,
            military_veteran: 2,
            child_headed_household: 2,
        }
    }
}

impl PointTable {
    pub fn minimum_total(&self) -> u32 {
        self.female.min(self.male)
            + self.youth.min(self.non_youth)
            + self.disability.min(self.no_disability)
    }

    pub fn maximum_total(&self) -> u32 {
        self.female.max(self.male)
            + self.youth.max(self.non_youth)
            + self.disability.max(self.no_disability)
            + self.military_veteran
            + self.child_headed_household
    }
}

/// Magnitudes beyond which declared production is treated as implausible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FraudLimits {
    pub max_hectares: f64,
    pub max_poultry: f64,
    pub max_stock: f64,
}

impl Default for FraudLimits {
    fn default() -> Self {
        Self {
            max_hectares: 100.0,
            max_poultry: 10_000.0,
            max_stock: 1_000.0,
        }
    }
}
