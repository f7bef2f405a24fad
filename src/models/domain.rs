use serde::{Deserialize, Serialize};

/// Nonprofit recipient configured to accept donations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    #[serde(rename = "desiredFoodType")]
    pub desired_food_type: String,
    #[serde(rename = "maxQuantity")]
    pub max_quantity: f64,
}

impl Recipient {
    /// Helper to check whether this recipient accepts any food type
    pub fn accepts_any(&self) -> bool {
        self.desired_food_type.to_lowercase() == ANY_FOOD_TYPE
    }
}

/// Wildcard food type accepted by catch-all recipients
pub const ANY_FOOD_TYPE: &str = "any";

/// Donation offer as seen by the matcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationRequest {
    #[serde(rename = "foodType")]
    pub food_type: String,
    pub quantity: f64,
    #[serde(rename = "expiryHours")]
    pub expiry_hours: u32,
}

/// Registered donor account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Audit log entry for a submitted donation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationRecord {
    #[serde(rename = "foodType")]
    pub food_type: String,
    pub quantity: f64,
    #[serde(rename = "expiresAt")]
    pub expires_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "matchedRecipient")]
    pub matched_recipient: String,
    pub donor: String,
    #[serde(rename = "submittedAt")]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// Point values used by the matcher
///
/// Scores are small additive integers, never disqualifying: a donation that
/// fits no criterion still scores 0 and can be matched.
#[derive(Debug, Clone, Copy)]
pub struct ScorePoints {
    pub exact_food_type: i32,
    pub any_food_type: i32,
    pub quantity_fit: i32,
    pub freshness: i32,
}

impl Default for ScorePoints {
    fn default() -> Self {
        Self {
            exact_food_type: 2,
            any_food_type: 1,
            quantity_fit: 1,
            freshness: 1,
        }
    }
}
