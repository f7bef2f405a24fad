mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use crate::config::Settings;
use crate::core::{DonationPredictor, Matcher};
use crate::models::ScorePoints;
use crate::routes::{handle_json_payload_error, handle_query_payload_error, AppState};
use crate::services::{DonationLog, SessionManager, UserStore};
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Mealbridge donation matching service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Build the immutable recipient registry
    let recipients = Arc::new(settings.recipient_registry());

    info!("Recipient registry loaded ({} recipients)", recipients.len());

    // Initialize matcher with configured point values
    let points = ScorePoints {
        exact_food_type: settings.scoring.exact_food_type,
        any_food_type: settings.scoring.any_food_type,
        quantity_fit: settings.scoring.quantity_fit,
        freshness: settings.scoring.freshness,
    };

    let matcher = Matcher::new(points, settings.scoring.freshness_window_hours);

    info!("Matcher initialized with points: {:?}", points);

    // Fit the donation volume predictor on the built-in training set
    let predictor = DonationPredictor::with_default_training(
        settings.predictor.learning_rate,
        settings.predictor.iterations,
    );

    info!(
        "Predictor fitted ({} gradient steps, lr {})",
        settings.predictor.iterations, settings.predictor.learning_rate
    );

    // Build application state
    let app_state = AppState {
        users: Arc::new(UserStore::new()),
        sessions: Arc::new(SessionManager::new()),
        donations: Arc::new(DonationLog::new()),
        recipients,
        matcher,
        predictor,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
