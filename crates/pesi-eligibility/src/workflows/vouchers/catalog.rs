use serde::{Deserialize, Serialize};

/// Funding programmes that issue input vouchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Programme {
    /// Presidential Employment Stimulus Initiative.
    Pesi,
    Wasp,
    Disaster,
}

impl Programme {
    pub const fn label(self) -> &'static str {
        match self {
            Programme::Pesi => "PESI",
            Programme::Wasp => "WASP",
            Programme::Disaster => "Disaster",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoucherCategory {
    VegetablesFruit,
    MaizeGrains,
    Poultry,
    Livestock,
    Equipment,
    Inputs,
    Feed,
    Supplies,
    Replanting,
    LivestockRecovery,
}

/// Voucher value bounds in whole rand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
    pub standard: u32,
}

impl ValueRange {
    const fn new(min: u32, max: u32, standard: u32) -> Self {
        Self { min, max, standard }
    }
}

impl VoucherCategory {
    pub const fn programme(self) -> Programme {
        match self {
            Self::VegetablesFruit | Self::MaizeGrains | Self::Poultry | Self::Livestock => {
                Programme::Pesi
            }
            Self::Equipment | Self::Inputs | Self::Feed => Programme::Wasp,
            Self::Supplies | Self::Replanting | Self::LivestockRecovery => Programme::Disaster,
        }
    }

    pub const fn value_range(self) -> ValueRange {
        match self {
            Self::VegetablesFruit => ValueRange::new(1_500, 3_000, 2_500),
            Self::MaizeGrains => ValueRange::new(2_000, 4_000, 3_000),
            Self::Poultry => ValueRange::new(1_000, 2_500, 1_800),
            Self::Livestock => ValueRange::new(3_000, 8_000, 5_000),
            Self::Equipment => ValueRange::new(3_000, 10_000, 6_000),
            Self::Inputs => ValueRange::new(2_000, 5_000, 3_500),
            Self::Feed => ValueRange::new(1_500, 4_000, 2_500),
            Self::Supplies => ValueRange::new(1_000, 5_000, 2_000),
            Self::Replanting => ValueRange::new(2_000, 6_000, 3_500),
            Self::LivestockRecovery => ValueRange::new(3_000, 8_000, 5_000),
        }
    }
}
