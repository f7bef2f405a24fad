// Core algorithm exports
pub mod matcher;
pub mod predictor;
pub mod scoring;

pub use matcher::{MatchOutcome, Matcher, NO_MATCH};
pub use predictor::{DonationPredictor, TrainingSample, DEFAULT_TRAINING_SET};
pub use scoring::score_recipient;
