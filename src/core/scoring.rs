use crate::models::{DonationRequest, Recipient, ScorePoints};

/// Score a single recipient for a donation
///
/// Scoring is additive and never disqualifying:
/// - exact food type match (case-insensitive) earns the full food points,
///   otherwise a catch-all "any" recipient earns the reduced wildcard points
/// - a quantity at or under the recipient's maximum earns the fit points
/// - a donation expiring within the freshness window earns a bonus that is
///   independent of the recipient
pub fn score_recipient(
    request: &DonationRequest,
    recipient: &Recipient,
    points: &ScorePoints,
    freshness_window_hours: u32,
) -> i32 {
    let mut score = 0;

    // Full Unicode lowercasing, so "Käse" and "KÄSE" compare equal
    if recipient.desired_food_type.to_lowercase() == request.food_type.to_lowercase() {
        score += points.exact_food_type;
    } else if recipient.accepts_any() {
        score += points.any_food_type;
    }

    if request.quantity <= recipient.max_quantity {
        score += points.quantity_fit;
    }

    if request.expiry_hours <= freshness_window_hours {
        score += points.freshness;
    }

    score
}
