//! Advice endpoint consumed by the profile form.

use axum::extract::{Json, State};
use serde::Deserialize;
use service_core::error::AppError;
use validator::Validate;

use crate::models::{HealthResponse, Language, UserProfile};
use crate::AppState;

/// Profile as submitted by the form.
#[derive(Debug, Deserialize, Validate)]
pub struct AdviceRequest {
    #[validate(length(min = 1, message = "Age is required"))]
    pub age: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub location: String,
    #[validate(length(min = 1, message = "Condition is required"))]
    pub condition: String,
    #[serde(default)]
    pub language: Language,
}

impl AdviceRequest {
    /// Strip surrounding whitespace so blank fields fail validation.
    fn trimmed(self) -> Self {
        Self {
            age: self.age.trim().to_string(),
            weight: self.weight.trim().to_string(),
            height: self.height.trim().to_string(),
            gender: self.gender.trim().to_string(),
            location: self.location.trim().to_string(),
            condition: self.condition.trim().to_string(),
            language: self.language,
        }
    }
}

impl From<AdviceRequest> for UserProfile {
    fn from(req: AdviceRequest) -> Self {
        UserProfile {
            age: req.age,
            weight: req.weight,
            height: req.height,
            gender: req.gender,
            location: req.location,
            condition: req.condition,
            language: req.language,
        }
    }
}

/// Get naturopathy advice for a profile.
///
/// POST /advice
pub async fn get_advice(
    State(state): State<AppState>,
    Json(req): Json<AdviceRequest>,
) -> Result<Json<HealthResponse>, AppError> {
    let req = req.trimmed();
    req.validate()?;

    let profile = UserProfile::from(req);
    let advice = state
        .advice_client
        .fetch_advice(&profile)
        .await
        .map_err(|e| AppError::BadGateway(e.to_string()))?;

    Ok(Json(advice))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(age: &str, condition: &str) -> AdviceRequest {
        AdviceRequest {
            age: age.to_string(),
            weight: String::new(),
            height: String::new(),
            gender: String::new(),
            location: String::new(),
            condition: condition.to_string(),
            language: Language::English,
        }
    }

    #[test]
    fn blank_condition_fails_validation() {
        let errors = request("30", "   ").trimmed().validate().unwrap_err();
        assert!(errors.field_errors().contains_key("condition"));
    }

    #[test]
    fn blank_age_fails_validation() {
        let errors = request("", "cough").trimmed().validate().unwrap_err();
        assert!(errors.field_errors().contains_key("age"));
    }

    #[test]
    fn complete_request_becomes_profile() {
        let req = request(" 30 ", "cough").trimmed();
        assert!(req.validate().is_ok());

        let profile = UserProfile::from(req);
        assert_eq!(profile.age, "30");
        assert_eq!(profile.condition, "cough");
    }
}
