use serde::{Deserialize, Serialize};

use super::super::domain::{ApplicantRecord, Gender};
use super::config::EligibilityConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Gender,
    Age,
    Disability,
    MilitaryVeteran,
    ChildHeadedHousehold,
}

/// Discrete contribution to the priority score, kept for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u32,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub components: Vec<ScoreComponent>,
    pub total: u32,
    pub threshold: u32,
}

impl ScoreCard {
    pub fn meets_threshold(&self) -> bool {
        self.total >= self.threshold
    }

    pub fn shortfall_reason(&self) -> Option<String> {
        if self.meets_threshold() {
            None
        } else {
            Some(format!("Score below {} points", self.threshold))
        }
    }
}

pub(crate) fn score_applicant(record: &ApplicantRecord, config: &EligibilityConfig) -> ScoreCard {
    let points = &config.points;

    let gender = match record.gender {
        Gender::Female => ScoreComponent {
            factor: ScoreFactor::Gender,
            points: points.female,
            notes: "female applicant".to_string(),
        },
        Gender::Male => ScoreComponent {
            factor: ScoreFactor::Gender,
            points: points.male,
            notes: "male applicant".to_string(),
        },
    };

    let youth = (points.youth_min_age..=points.youth_max_age).contains(&record.age);
    let age = ScoreComponent {
        factor: ScoreFactor::Age,
        points: if youth { points.youth } else { points.non_youth },
        notes: if youth {
            format!(
                "age {} within youth band {}-{}",
                record.age, points.youth_min_age, points.youth_max_age
            )
        } else {
            format!("age {} outside youth band", record.age)
        },
    };

    let disability = ScoreComponent {
        factor: ScoreFactor::Disability,
        points: if record.disability {
            points.disability
        } else {
            points.no_disability
        },
        notes: if record.disability {
            "declared disability".to_string()
        } else {
            "no declared disability".to_string()
        },
    };

    let mut components = vec![gender, age, disability];

    if record.military_veteran {
        components.push(ScoreComponent {
            factor: ScoreFactor::MilitaryVeteran,
            points: points.military_veteran,
            notes: "military veteran".to_string(),
        });
    }

    if record.child_headed_household {
        components.push(ScoreComponent {
            factor: ScoreFactor::ChildHeadedHousehold,
            points: points.child_headed_household,
            notes: "child-headed household".to_string(),
        });
    }

    let total = components.iter().map(|component| component.points).sum();

    ScoreCard {
        components,
        total,
        threshold: config.minimum_score,
    }
}
