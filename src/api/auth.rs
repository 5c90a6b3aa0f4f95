use actix_web::{web, HttpResponse, ResponseError};

use crate::database::MemoryDb;
use crate::services::auth_service;
use crate::services::auth_service::{AuthResponse, Claims, LoginRequest, RegisterRequest};

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration successful"),
        (status = 400, description = "User already exists")
    )
)]
pub async fn register(
    db: web::Data<MemoryDb>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    log::info!("📝 POST /auth/register - email: {}", request.email);

    match auth_service::register(&db, &request).await {
        Ok(()) => {
            log::info!("✅ Registration successful: {}", request.email);
            HttpResponse::Created().json(serde_json::json!({
                "message": "User registered successfully"
            }))
        }
        Err(e) => {
            log::warn!("❌ Registration failed: {} - {}", request.email, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(db: web::Data<MemoryDb>, request: web::Json<LoginRequest>) -> HttpResponse {
    log::info!("🔐 POST /auth/login - email: {}", request.email);

    match auth_service::login(&db, &request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", request.email);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", request.email, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn logout(user: web::ReqData<Claims>) -> HttpResponse {
    log::info!("👋 POST /auth/logout - {}", user.email);

    // No server-side session to invalidate; the token stays valid
    // until its expiry.
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Logged out successfully"
    }))
}
