use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a new donor account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Request to log in
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Request to submit a donation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitDonationRequest {
    #[validate(length(min = 1, message = "food type must not be empty"))]
    #[serde(alias = "food_type", rename = "foodType")]
    pub food_type: String,
    #[validate(range(min = 0.01, message = "quantity must be positive"))]
    pub quantity: f64,
    #[serde(alias = "expiry", alias = "expiry_hours", rename = "expiryHours")]
    pub expiry_hours: u32,
}

/// Request for a donation volume prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(alias = "time_of_day", rename = "timeOfDay")]
    pub time_of_day: f64,
    #[serde(alias = "day_of_week", rename = "dayOfWeek")]
    pub day_of_week: f64,
}
