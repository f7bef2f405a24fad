use crate::core::scoring::score_recipient;
use crate::models::{DonationRequest, Recipient, ScorePoints};

/// Name reported when no recipient could be matched
pub const NO_MATCH: &str = "No Match";

/// Result of matching a donation against the recipient registry
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub recipient: Option<String>,
    pub score: i32,
}

impl MatchOutcome {
    /// The matched recipient's name, or the no-match sentinel
    pub fn recipient_name(&self) -> &str {
        self.recipient.as_deref().unwrap_or(NO_MATCH)
    }
}

/// Donation-to-recipient matcher
///
/// Scores every recipient in registry order and keeps the single best one.
/// Ties resolve to the earliest recipient in the list, so the outcome is
/// deterministic for a fixed registry order.
#[derive(Debug, Clone)]
pub struct Matcher {
    points: ScorePoints,
    freshness_window_hours: u32,
}

impl Matcher {
    pub fn new(points: ScorePoints, freshness_window_hours: u32) -> Self {
        Self {
            points,
            freshness_window_hours,
        }
    }

    pub fn with_default_points() -> Self {
        Self::new(ScorePoints::default(), 12)
    }

    /// Match a donation against the recipient registry
    ///
    /// Every recipient is scored; a strictly higher score replaces the
    /// current best. The initial best score of -1 is below the minimum
    /// achievable score of 0, so any non-empty registry produces a match.
    /// Only an empty registry yields the sentinel outcome.
    pub fn match_donation(
        &self,
        request: &DonationRequest,
        recipients: &[Recipient],
    ) -> MatchOutcome {
        let mut best: Option<&Recipient> = None;
        let mut best_score = -1;

        for recipient in recipients {
            let score =
                score_recipient(request, recipient, &self.points, self.freshness_window_hours);
            if score > best_score {
                best_score = score;
                best = Some(recipient);
            }
        }

        MatchOutcome {
            recipient: best.map(|r| r.name.clone()),
            score: best_score,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_points()
    }
}
