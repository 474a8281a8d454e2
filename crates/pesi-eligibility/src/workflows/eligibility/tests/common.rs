use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::workflows::eligibility::{
    eligibility_router, AlertError, AlertPublisher, ApplicantRecord, ApplicantSubmission,
    EligibilityConfig, EligibilityEngine, EligibilityService, Gender, ProductionMetrics,
    ReviewAlert,
};

/// Male, born 1985-06-06, Luhn-valid citizen number.
pub(super) const MALE_1985_ID: &str = "8506065800086";
/// Female, born 2000-03-12, Luhn-valid citizen number.
pub(super) const FEMALE_2000_ID: &str = "0003124800081";

pub(super) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub(super) fn as_of() -> NaiveDate {
    date(2025, 10, 15)
}

/// Female youth applicant who passes every gate and scores 13 with a clear status.
pub(super) fn eligible_record() -> ApplicantRecord {
    ApplicantRecord {
        id_number: FEMALE_2000_ID.to_string(),
        date_of_birth: Some(date(2000, 3, 12)),
        gender: Gender::Female,
        age: 25,
        nationality: "South African".to_string(),
        has_valid_id: true,
        active_in_agriculture: true,
        is_government_employee: false,
        has_dalrrd_funding: false,
        household_has_application: false,
        disability: false,
        military_veteran: false,
        child_headed_household: false,
        production: ProductionMetrics {
            hectares_vegetables: 0.5,
            hectares_maize: 0.75,
            poultry_broilers: 80.0,
            poultry_layers: 20.0,
            small_stock_count: 10.0,
            large_stock_count: 2.0,
        },
    }
}

/// Male applicant aged 40 without disability, scoring the table minimum of 9.
pub(super) fn older_male_record() -> ApplicantRecord {
    ApplicantRecord {
        id_number: MALE_1985_ID.to_string(),
        date_of_birth: Some(date(1985, 6, 6)),
        gender: Gender::Male,
        age: 40,
        ..eligible_record()
    }
}

pub(super) fn applicant_json() -> Value {
    json!({
        "idNumber": FEMALE_2000_ID,
        "dateOfBirth": "2000-03-12",
        "gender": "female",
        "age": 25,
        "nationality": "South African",
        "hasValidId": true,
        "activeInAgriculture": true,
        "isGovernmentEmployee": false,
        "hasDALRRDFunding": false,
        "householdHasApplication": false,
        "disability": false,
        "militaryVeteran": false,
        "childHeadedHousehold": false,
        "hectaresVegetables": 0.5,
        "hectaresMaize": 0.75,
        "poultryBroilers": 80,
        "poultryLayers": 20,
        "smallStockCount": 10,
        "largeStockCount": 2
    })
}

pub(super) fn submission() -> ApplicantSubmission {
    ApplicantSubmission::from_json(applicant_json()).expect("fixture parses")
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::default()
}

pub(super) fn engine_with(config: EligibilityConfig) -> EligibilityEngine {
    EligibilityEngine::new(config)
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<ReviewAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<ReviewAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl AlertPublisher for MemoryAlerts {
    fn publish(&self, alert: ReviewAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct OfflineAlerts;

impl AlertPublisher for OfflineAlerts {
    fn publish(&self, _alert: ReviewAlert) -> Result<(), AlertError> {
        Err(AlertError::Transport("queue offline".to_string()))
    }
}

pub(super) fn build_service() -> (EligibilityService<MemoryAlerts>, Arc<MemoryAlerts>) {
    let alerts = Arc::new(MemoryAlerts::default());
    let service = EligibilityService::new(alerts.clone(), EligibilityConfig::default());
    (service, alerts)
}

pub(super) fn router_with_service(service: EligibilityService<MemoryAlerts>) -> axum::Router {
    eligibility_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
