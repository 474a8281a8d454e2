//! South African identity number validation.
//!
//! Layout is `YYMMDD SSSS C A Z`: date of birth, a gender sequence (`0000-4999` female,
//! `5000-9999` male), a citizenship marker, a legacy digit, and a Luhn check digit.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::Gender;

const ID_LENGTH: usize = 13;
const DEFAULT_PIVOT_YEAR: u8 = 21;

/// Strictness dials for identity validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Two digit years at or below the pivot resolve to `20YY`, the rest to `19YY`.
    pub pivot_year: u8,
    pub enforce_citizenship_digit: bool,
    pub enforce_checksum: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            pivot_year: DEFAULT_PIVOT_YEAR,
            enforce_citizenship_digit: true,
            enforce_checksum: true,
        }
    }
}

/// First structural problem found in an identity number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentityFailure {
    #[error("identity number must be 13 characters, found {found}")]
    Length { found: usize },
    #[error("identity number must contain only digits")]
    NonNumeric,
    #[error("identity number does not start with a valid YYMMDD date")]
    InvalidDate,
    #[error("citizenship digit must be 0 or 1, found {found}")]
    CitizenshipDigit { found: char },
    #[error("identity number fails the Luhn checksum")]
    Checksum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Citizenship {
    Citizen,
    PermanentResident,
}

/// Outcome of validating one identity number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityReport {
    /// Date encoded in the first six digits, when they form a calendar date.
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub citizenship: Option<Citizenship>,
    pub failure: Option<IdentityFailure>,
}

impl IdentityReport {
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    /// Date of birth from a structurally valid identity number only.
    pub fn verified_date_of_birth(&self) -> Option<NaiveDate> {
        if self.is_valid() {
            self.date_of_birth
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct IdentityValidator {
    config: IdentityConfig,
}

impl Default for IdentityValidator {
    fn default() -> Self {
        Self::new(IdentityConfig::default())
    }
}

impl IdentityValidator {
    pub fn new(config: IdentityConfig) -> Self {
        let pivot_year = config.pivot_year.min(99);
        Self {
            config: IdentityConfig {
                pivot_year,
                ..config
            },
        }
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    pub fn validate(&self, id_number: &str) -> IdentityReport {
        let date_of_birth = self.date_from_prefix(id_number);
        let digits: Option<Vec<u8>> = id_number
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect();

        let gender = digits.as_deref().and_then(gender_from_digits);
        let citizenship = digits
            .as_deref()
            .and_then(|digits| digits.get(10))
            .and_then(|digit| match digit {
                0 => Some(Citizenship::Citizen),
                1 => Some(Citizenship::PermanentResident),
                _ => None,
            });

        let failure = self.first_failure(id_number, digits.as_deref(), date_of_birth);

        IdentityReport {
            date_of_birth,
            gender,
            citizenship,
            failure,
        }
    }

    fn first_failure(
        &self,
        id_number: &str,
        digits: Option<&[u8]>,
        date_of_birth: Option<NaiveDate>,
    ) -> Option<IdentityFailure> {
        let length = id_number.chars().count();
        if length != ID_LENGTH {
            return Some(IdentityFailure::Length { found: length });
        }

        let Some(digits) = digits else {
            return Some(IdentityFailure::NonNumeric);
        };

        if date_of_birth.is_none() {
            return Some(IdentityFailure::InvalidDate);
        }

        if self.config.enforce_citizenship_digit && digits[10] > 1 {
            return Some(IdentityFailure::CitizenshipDigit {
                found: char::from(b'0' + digits[10]),
            });
        }

        if self.config.enforce_checksum && !luhn_valid(digits) {
            return Some(IdentityFailure::Checksum);
        }

        None
    }

    fn date_from_prefix(&self, id_number: &str) -> Option<NaiveDate> {
        let prefix = id_number.get(..6)?;
        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let yy: u8 = prefix[0..2].parse().ok()?;
        let month: u32 = prefix[2..4].parse().ok()?;
        let day: u32 = prefix[4..6].parse().ok()?;
        let century = if yy <= self.config.pivot_year { 2000 } else { 1900 };

        NaiveDate::from_ymd_opt(century + i32::from(yy), month, day)
    }
}

/// `true` when the leading six characters of `id_number` equal `date_of_birth` as `YYMMDD`.
pub fn prefix_matches_date_of_birth(id_number: &str, date_of_birth: NaiveDate) -> bool {
    let expected = format!(
        "{:02}{:02}{:02}",
        date_of_birth.year().rem_euclid(100),
        date_of_birth.month(),
        date_of_birth.day()
    );
    id_number.get(..6) == Some(expected.as_str())
}

/// Luhn check over a digit sequence whose last element is the check digit.
pub fn luhn_valid(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(position, &digit)| {
            let digit = u32::from(digit);
            if position % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}

fn gender_from_digits(digits: &[u8]) -> Option<Gender> {
    let sequence = digits.get(6..10)?;
    let value = sequence
        .iter()
        .fold(0u32, |acc, &digit| acc * 10 + u32::from(digit));
    Some(if value < 5000 {
        Gender::Female
    } else {
        Gender::Male
    })
}
