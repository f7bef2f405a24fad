// Integration tests driving the full Mealbridge route table

use actix_web::{test, web, App};
use mealbridge::core::{DonationPredictor, Matcher};
use mealbridge::models::{
    DonationRecord, ErrorResponse, HealthResponse, LoginResponse, MessageResponse,
    PredictResponse, Recipient, SubmitDonationResponse,
};
use mealbridge::routes::{
    configure_routes, handle_json_payload_error, handle_query_payload_error, AppState,
};
use mealbridge::services::{DonationLog, SessionManager, UserStore};
use std::sync::Arc;

fn test_state() -> AppState {
    AppState {
        users: Arc::new(UserStore::new()),
        sessions: Arc::new(SessionManager::new()),
        donations: Arc::new(DonationLog::new()),
        recipients: Arc::new(vec![
            Recipient {
                name: "Feeding India".to_string(),
                desired_food_type: "Rice".to_string(),
                max_quantity: 10.0,
            },
            Recipient {
                name: "Robin Hood Army".to_string(),
                desired_food_type: "Vegetables".to_string(),
                max_quantity: 15.0,
            },
            Recipient {
                name: "AnyHelp".to_string(),
                desired_food_type: "Any".to_string(),
                max_quantity: 20.0,
            },
        ]),
        matcher: Matcher::with_default_points(),
        predictor: DonationPredictor::with_default_training(0.0005, 100_000),
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
                .configure(configure_routes),
        )
        .await
    };
}

macro_rules! register_and_login {
    ($app:expr, $username:expr, $password:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(serde_json::json!({ "username": $username, "password": $password }))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert!(resp.status().is_success());

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({ "username": $username, "password": $password }))
            .to_request();
        let login: LoginResponse = test::call_and_read_body_json($app, req).await;
        assert_eq!(login.user, $username);
        login.token
    }};
}

#[actix_web::test]
async fn test_register_login_submit_and_list() {
    let app = init_app!(test_state());
    let token = register_and_login!(&app, "alice", "hunter2");

    let req = test::TestRequest::post()
        .uri("/api/v1/donations")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({
            "foodType": "Rice",
            "quantity": 5.0,
            "expiryHours": 6
        }))
        .to_request();
    let submitted: SubmitDonationResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(submitted.donation.matched_recipient, "Feeding India");
    assert_eq!(submitted.donation.donor, "alice");
    assert!(submitted.message.contains("Feeding India"));
    assert!(submitted.donation.expires_at > submitted.donation.submitted_at);

    let req = test::TestRequest::get().uri("/api/v1/donations").to_request();
    let donations: Vec<DonationRecord> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0].food_type, "Rice");
}

#[actix_web::test]
async fn test_donations_listed_newest_first() {
    let app = init_app!(test_state());
    let token = register_and_login!(&app, "alice", "hunter2");

    for food in ["Rice", "Vegetables"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/donations")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "foodType": food,
                "quantity": 5.0,
                "expiryHours": 6
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let req = test::TestRequest::get().uri("/api/v1/donations").to_request();
    let donations: Vec<DonationRecord> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(donations.len(), 2);
    assert_eq!(donations[0].food_type, "Vegetables");
    assert_eq!(donations[1].food_type, "Rice");
}

#[actix_web::test]
async fn test_submit_without_session_is_unauthorized() {
    let app = init_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/donations")
        .set_json(serde_json::json!({
            "foodType": "Rice",
            "quantity": 5.0,
            "expiryHours": 6
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_logout_revokes_session() {
    let app = init_app!(test_state());
    let token = register_and_login!(&app, "alice", "hunter2");

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/logout")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let logout: MessageResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(logout.message, "Logged out");

    let req = test::TestRequest::post()
        .uri("/api/v1/donations")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({
            "foodType": "Rice",
            "quantity": 5.0,
            "expiryHours": 6
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_duplicate_registration_conflicts() {
    let app = init_app!(test_state());

    for expected_status in [200u16, 409u16] {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(serde_json::json!({ "username": "alice", "password": "hunter2" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), expected_status);
    }
}

#[actix_web::test]
async fn test_login_with_wrong_password_fails() {
    let app = init_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(serde_json::json!({ "username": "alice", "password": "hunter2" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({ "username": "alice", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Invalid credentials");
}

#[actix_web::test]
async fn test_invalid_donation_payload_rejected() {
    let app = init_app!(test_state());
    let token = register_and_login!(&app, "alice", "hunter2");

    let req = test::TestRequest::post()
        .uri("/api/v1/donations")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({
            "foodType": "",
            "quantity": 0.0,
            "expiryHours": 6
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_extreme_expiry_rejected_not_panicking() {
    let app = init_app!(test_state());
    let token = register_and_login!(&app, "alice", "hunter2");

    // u32::MAX hours would overflow the expiry timestamp; the handler must
    // answer with a 400 rather than dying mid-request
    let req = test::TestRequest::post()
        .uri("/api/v1/donations")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({
            "foodType": "Rice",
            "quantity": 5.0,
            "expiryHours": 4294967295u32
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Validation failed");

    let req = test::TestRequest::get().uri("/api/v1/donations").to_request();
    let donations: Vec<DonationRecord> = test::call_and_read_body_json(&app, req).await;
    assert!(donations.is_empty());
}

#[actix_web::test]
async fn test_malformed_json_body_gets_structured_400() {
    let app = init_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");
    assert_eq!(body.status_code, 400);
}

#[actix_web::test]
async fn test_predict_endpoint() {
    let app = init_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/predict")
        .set_json(serde_json::json!({ "timeOfDay": 1.0, "dayOfWeek": 10.0 }))
        .to_request();
    let prediction: PredictResponse = test::call_and_read_body_json(&app, req).await;

    // First training sample, the fit reproduces its 5 kg target
    assert!((prediction.predicted_donation_kg - 5.0).abs() < 0.1);
}

#[actix_web::test]
async fn test_recipients_endpoint() {
    let app = init_app!(test_state());

    let req = test::TestRequest::get().uri("/api/v1/recipients").to_request();
    let recipients: Vec<Recipient> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(recipients.len(), 3);
    assert_eq!(recipients[0].name, "Feeding India");
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!(test_state());

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let health: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(health.status, "healthy");
}
