use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{ApplicantRecord, Gender, ProductionMetrics};
use super::identity::IdentityValidator;

/// Raised when an inbound payload cannot become an [`ApplicantRecord`].
#[derive(Debug, thiserror::Error)]
pub enum MalformedInput {
    #[error("malformed applicant payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("date of birth {0} is after the evaluation date")]
    DateOfBirthInFuture(NaiveDate),
    #[error("production metric `{0}` must be a finite number")]
    NonFiniteMetric(&'static str),
}

/// Applicant payload as submitted by the registration client.
///
/// Every status flag is required. Production metrics may be omitted or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantSubmission {
    pub id_number: String,
    #[serde(default, alias = "dob")]
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    #[serde(default)]
    pub age: Option<u32>,
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
    #[serde(default)]
    pub hectares_vegetables: Option<f64>,
    #[serde(default)]
    pub hectares_maize: Option<f64>,
    #[serde(default)]
    pub poultry_broilers: Option<f64>,
    #[serde(default)]
    pub poultry_layers: Option<f64>,
    #[serde(default)]
    pub small_stock_count: Option<f64>,
    #[serde(default)]
    pub large_stock_count: Option<f64>,
}

impl ApplicantSubmission {
    pub fn from_json(value: serde_json::Value) -> Result<Self, MalformedInput> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, MalformedInput> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Turns submissions into records, resolving age and production defaults.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    identity: IdentityValidator,
}

impl IntakeGuard {
    pub fn new(identity: IdentityValidator) -> Self {
        Self { identity }
    }

    /// Resolve a submission into a record, with age arithmetic evaluated on `as_of`.
    ///
    /// A missing `age` is derived from `dateOfBirth`, falling back to the date encoded in a
    /// structurally valid identity number.
    pub fn record_from_submission(
        &self,
        submission: ApplicantSubmission,
        as_of: NaiveDate,
    ) -> Result<ApplicantRecord, MalformedInput> {
        let production = ProductionMetrics {
            hectares_vegetables: metric("hectaresVegetables", submission.hectares_vegetables)?,
            hectares_maize: metric("hectaresMaize", submission.hectares_maize)?,
            poultry_broilers: metric("poultryBroilers", submission.poultry_broilers)?,
            poultry_layers: metric("poultryLayers", submission.poultry_layers)?,
            small_stock_count: metric("smallStockCount", submission.small_stock_count)?,
            large_stock_count: metric("largeStockCount", submission.large_stock_count)?,
        };

        let age = match submission.age {
            Some(age) => age,
            None => {
                let date_of_birth = submission
                    .date_of_birth
                    .or_else(|| {
                        self.identity
                            .validate(&submission.id_number)
                            .verified_date_of_birth()
                    })
                    .ok_or(MalformedInput::MissingField("age"))?;
                as_of
                    .years_since(date_of_birth)
                    .ok_or(MalformedInput::DateOfBirthInFuture(date_of_birth))?
            }
        };

        Ok(ApplicantRecord {
            id_number: submission.id_number,
            date_of_birth: submission.date_of_birth,
            gender: submission.gender,
            age,
            nationality: submission.nationality,
            has_valid_id: submission.has_valid_id,
            active_in_agriculture: submission.active_in_agriculture,
            is_government_employee: submission.is_government_employee,
            has_dalrrd_funding: submission.has_dalrrd_funding,
            household_has_application: submission.household_has_application,
            disability: submission.disability,
            military_veteran: submission.military_veteran,
            child_headed_household: submission.child_headed_household,
            production,
        })
    }

    pub fn record_from_json(
        &self,
        value: serde_json::Value,
        as_of: NaiveDate,
    ) -> Result<ApplicantRecord, MalformedInput> {
        self.record_from_submission(ApplicantSubmission::from_json(value)?, as_of)
    }
}

fn metric(name: &'static str, value: Option<f64>) -> Result<f64, MalformedInput> {
    match value {
        None => Ok(0.0),
        Some(value) if value.is_finite() => Ok(value),
        Some(_) => Err(MalformedInput::NonFiniteMetric(name)),
    }
}
