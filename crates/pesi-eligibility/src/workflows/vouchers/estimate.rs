use serde::{Deserialize, Serialize};

use super::catalog::{Programme, ValueRange, VoucherCategory};
use super::documents::{missing_documents, DocumentKind};
use crate::workflows::eligibility::{ApplicantRecord, Gender};

const YOUTH_AGES: std::ops::RangeInclusive<u32> = 18..=35;
const RURAL_UPLIFT_PERCENT: std::ops::RangeInclusive<u32> = 5..=20;
const PRODUCTION_FACTOR_MIN: f64 = 0.5;
const PRODUCTION_FACTOR_MAX: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoucherRequest {
    pub category: VoucherCategory,
    /// Rural uplift in percent; clamped to 5-20 when present.
    #[serde(default)]
    pub rural_uplift_percent: Option<u32>,
    /// Production size multiplier; clamped to 0.5-1.5.
    #[serde(default = "default_production_factor")]
    pub production_factor: f64,
    #[serde(default)]
    pub disaster_area: bool,
    #[serde(default)]
    pub documents: Vec<DocumentKind>,
}

fn default_production_factor() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    Female,
    Youth,
    Disability,
    Rural,
    DisasterArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueAdjustment {
    pub kind: AdjustmentKind,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoucherEstimate {
    pub programme: Programme,
    pub category: VoucherCategory,
    pub range: ValueRange,
    pub adjustments: Vec<ValueAdjustment>,
    pub production_factor: f64,
    pub estimated_value: u32,
    pub missing_documents: Vec<DocumentKind>,
}

/// Standard value plus summed percentage adjustments, scaled by production size and held
/// inside the category range.
pub fn estimate_voucher(record: &ApplicantRecord, request: &VoucherRequest) -> VoucherEstimate {
    let range = request.category.value_range();
    let adjustments = adjustments_for(record, request);
    let production_factor = if request.production_factor.is_finite() {
        request
            .production_factor
            .clamp(PRODUCTION_FACTOR_MIN, PRODUCTION_FACTOR_MAX)
    } else {
        default_production_factor()
    };

    let uplift: u32 = adjustments.iter().map(|adjustment| adjustment.percent).sum();
    let raw = f64::from(range.standard) * f64::from(100 + uplift) / 100.0 * production_factor;
    let estimated_value = raw
        .clamp(f64::from(range.min), f64::from(range.max))
        .round() as u32;

    VoucherEstimate {
        programme: request.category.programme(),
        category: request.category,
        range,
        adjustments,
        production_factor,
        estimated_value,
        missing_documents: missing_documents(record, &request.documents),
    }
}

fn adjustments_for(record: &ApplicantRecord, request: &VoucherRequest) -> Vec<ValueAdjustment> {
    let mut adjustments = Vec::new();

    if record.gender == Gender::Female {
        adjustments.push(ValueAdjustment {
            kind: AdjustmentKind::Female,
            percent: 10,
        });
    }
    if YOUTH_AGES.contains(&record.age) {
        adjustments.push(ValueAdjustment {
            kind: AdjustmentKind::Youth,
            percent: 10,
        });
    }
    if record.disability {
        adjustments.push(ValueAdjustment {
            kind: AdjustmentKind::Disability,
            percent: 15,
        });
    }
    if let Some(percent) = request.rural_uplift_percent {
        adjustments.push(ValueAdjustment {
            kind: AdjustmentKind::Rural,
            percent: percent.clamp(*RURAL_UPLIFT_PERCENT.start(), *RURAL_UPLIFT_PERCENT.end()),
        });
    }
    if request.disaster_area {
        adjustments.push(ValueAdjustment {
            kind: AdjustmentKind::DisasterArea,
            percent: 25,
        });
    }

    adjustments
}
