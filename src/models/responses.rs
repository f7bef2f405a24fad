use crate::models::domain::DonationRecord;
use serde::{Deserialize, Serialize};

/// Generic message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: String,
    pub token: String,
}

/// Response for a submitted donation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitDonationResponse {
    pub message: String,
    pub donation: DonationRecord,
}

/// Response for a donation volume prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(rename = "predictedDonationKg")]
    pub predicted_donation_kg: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
