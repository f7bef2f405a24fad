use crate::models::{
    DonationRecord, DonationRequest, ErrorResponse, HealthResponse, PredictRequest,
    PredictResponse, SubmitDonationRequest, SubmitDonationResponse,
};
use crate::routes::{bearer_token, AppState};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure donation, prediction, and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/donations", web::post().to(submit_donation))
        .route("/donations", web::get().to(list_donations))
        .route("/recipients", web::get().to(list_recipients))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Submit a donation and match it against the recipient registry
///
/// POST /api/v1/donations
///
/// Requires a bearer session token. The expiry horizon in hours is converted
/// to an absolute UTC timestamp on the stored record.
async fn submit_donation(
    state: web::Data<AppState>,
    req: web::Json<SubmitDonationRequest>,
    http_req: actix_web::HttpRequest,
) -> impl Responder {
    let donor = match resolve_session(&state, &http_req).await {
        Some(username) => username,
        None => {
            return HttpResponse::Unauthorized().json(ErrorResponse {
                error: "Unauthorized".to_string(),
                message: "A valid session token is required".to_string(),
                status_code: 401,
            });
        }
    };

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for donation from {}: {}", donor, errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let donation = DonationRequest {
        food_type: req.food_type.clone(),
        quantity: req.quantity,
        expiry_hours: req.expiry_hours,
    };

    let outcome = state.matcher.match_donation(&donation, &state.recipients);

    let now = chrono::Utc::now();
    // An absurd expiry horizon can push the timestamp past chrono's
    // representable range; reject it instead of panicking in the addition
    let expires_at =
        match now.checked_add_signed(chrono::Duration::hours(i64::from(donation.expiry_hours))) {
            Some(expires_at) => expires_at,
            None => {
                return HttpResponse::BadRequest().json(ErrorResponse {
                    error: "Validation failed".to_string(),
                    message: format!("Expiry of {} hours is out of range", donation.expiry_hours),
                    status_code: 400,
                });
            }
        };

    let record = DonationRecord {
        food_type: donation.food_type,
        quantity: donation.quantity,
        expires_at,
        matched_recipient: outcome.recipient_name().to_string(),
        donor,
        submitted_at: now,
    };

    state.donations.append(record.clone()).await;

    let message = match &outcome.recipient {
        Some(name) => format!("Donation submitted and matched with recipient: {}", name),
        None => "Donation submitted but no suitable recipient match found.".to_string(),
    };

    tracing::info!(
        "Donation of {} kg {} matched to {} (score {})",
        record.quantity,
        record.food_type,
        record.matched_recipient,
        outcome.score
    );

    HttpResponse::Ok().json(SubmitDonationResponse {
        message,
        donation: record,
    })
}

/// List all donations, newest first
///
/// GET /api/v1/donations
async fn list_donations(state: web::Data<AppState>) -> impl Responder {
    let donations = state.donations.list_newest_first().await;
    HttpResponse::Ok().json(donations)
}

/// List the configured recipient registry
///
/// GET /api/v1/recipients
async fn list_recipients(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.recipients.as_ref())
}

/// Predict expected donation volume for a time slot
///
/// POST /api/v1/predict
async fn predict(state: web::Data<AppState>, req: web::Json<PredictRequest>) -> impl Responder {
    let predicted = state.predictor.predict(req.time_of_day, req.day_of_week);

    HttpResponse::Ok().json(PredictResponse {
        predicted_donation_kg: predicted,
    })
}

async fn resolve_session(
    state: &web::Data<AppState>,
    req: &actix_web::HttpRequest,
) -> Option<String> {
    let token = bearer_token(req)?;
    state.sessions.resolve(token).await
}
