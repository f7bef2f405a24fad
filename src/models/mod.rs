// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{DonationRecord, DonationRequest, Recipient, ScorePoints, User, ANY_FOOD_TYPE};
pub use requests::{LoginRequest, PredictRequest, RegisterRequest, SubmitDonationRequest};
pub use responses::{
    ErrorResponse, HealthResponse, LoginResponse, MessageResponse, PredictResponse,
    SubmitDonationResponse,
};
