use crate::models::{
    ErrorResponse, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, User,
};
use crate::routes::{bearer_token, AppState};
use crate::services::{hash_password, verify_password, StoreError};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure all auth-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/logout", web::get().to(logout)),
    );
}

/// Register a new donor account
///
/// POST /api/v1/auth/register
async fn register(state: web::Data<AppState>, req: web::Json<RegisterRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Username and password required".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let password_hash = match hash_password(&req.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Failed to hash password for {}: {}", req.username, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Registration failed".to_string(),
                message: "Could not hash password".to_string(),
                status_code: 500,
            });
        }
    };

    let user = User {
        username: req.username.clone(),
        password_hash,
    };

    match state.users.insert(user).await {
        Ok(()) => {
            tracing::info!("Registered new user: {}", req.username);
            HttpResponse::Ok().json(MessageResponse {
                message: "Registration successful".to_string(),
            })
        }
        Err(StoreError::DuplicateUser(username)) => HttpResponse::Conflict().json(ErrorResponse {
            error: "User already exists".to_string(),
            message: format!("Username {} is taken", username),
            status_code: 409,
        }),
    }
}

/// Log in and receive a session token
///
/// POST /api/v1/auth/login
async fn login(state: web::Data<AppState>, req: web::Json<LoginRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Username and password required".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user = state.users.get(&req.username).await;
    let authenticated = match &user {
        Some(user) => verify_password(&req.password, &user.password_hash),
        None => false,
    };

    if !authenticated {
        tracing::info!("Failed login attempt for {}", req.username);
        return HttpResponse::Unauthorized().json(ErrorResponse {
            error: "Invalid credentials".to_string(),
            message: "Username or password is incorrect".to_string(),
            status_code: 401,
        });
    }

    let token = state.sessions.issue(&req.username).await;
    tracing::info!("User logged in: {}", req.username);

    HttpResponse::Ok().json(LoginResponse {
        message: "Login successful".to_string(),
        user: req.username.clone(),
        token,
    })
}

/// Log out, revoking the bearer session if one is presented
///
/// GET /api/v1/auth/logout
async fn logout(state: web::Data<AppState>, req: actix_web::HttpRequest) -> impl Responder {
    if let Some(token) = bearer_token(&req) {
        if state.sessions.revoke(token).await {
            tracing::debug!("Session revoked");
        }
    }

    HttpResponse::Ok().json(MessageResponse {
        message: "Logged out".to_string(),
    })
}
