//! Mealbridge - donation matching backend for the Mealbridge food-sharing platform
//!
//! This library provides the donation-to-recipient matching heuristic used by
//! the Mealbridge backend, plus the HTTP surface around it: donor accounts,
//! donation intake with an audit log, and a placeholder volume predictor.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{DonationPredictor, MatchOutcome, Matcher, NO_MATCH};
pub use crate::models::{DonationRecord, DonationRequest, Recipient, ScorePoints, ANY_FOOD_TYPE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = Matcher::with_default_points();
        let outcome = matcher.match_donation(
            &DonationRequest {
                food_type: "Rice".to_string(),
                quantity: 5.0,
                expiry_hours: 6,
            },
            &[],
        );
        assert_eq!(outcome.recipient_name(), NO_MATCH);
    }
}
