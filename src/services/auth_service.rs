use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::{lock_err, MemoryDb};
use crate::models::User;
use crate::utils::error::AppError;

// JWT Claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // email
    pub email: String,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
    pub jti: String,
}

// Request/Response structures
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserInfo {
    pub email: String,
    pub name: String,
    pub role: String,
}

fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "default-secret-change-me".to_string())
}

/// Signs a token carrying the user's email and role, valid for 7 days.
pub fn generate_jwt(user: &User) -> Result<String, AppError> {
    let iat = Utc::now().timestamp() as usize;
    let exp = (Utc::now() + Duration::days(7)).timestamp() as usize;
    let jti = Uuid::new_v4().to_string();

    let claims = Claims {
        sub: user.email.clone(),
        email: user.email.clone(),
        role: user.role.clone(),
        iat,
        exp,
        jti,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(get_jwt_secret().as_ref()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
}

/// Verifies signature and expiry; there is no server-side session state,
/// so a verified token stays valid until it expires.
pub fn verify_token(token: &str) -> Result<Claims, AppError> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(get_jwt_secret().as_ref()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))
}

pub async fn register(db: &MemoryDb, request: &RegisterRequest) -> Result<(), AppError> {
    {
        let users = db.users.read().map_err(lock_err)?;
        if users.contains_key(&request.email) {
            return Err(AppError::Conflict("User already exists".to_string()));
        }
    }

    // Hashing is the one slow operation here; run it off the runtime so
    // other requests keep flowing.
    let password = request.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || hash(password, DEFAULT_COST))
        .await
        .map_err(|e| AppError::Internal(format!("Hash task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;

    let user = User {
        user_id: Uuid::new_v4().to_string(),
        email: request.email.clone(),
        password_hash,
        name: request.name.clone(),
        role: request.role.clone(),
        created_at: Utc::now(),
    };

    let mut users = db.users.write().map_err(lock_err)?;
    // Re-check under the write lock; another request may have registered
    // the same email while we were hashing.
    if users.contains_key(&request.email) {
        return Err(AppError::Conflict("User already exists".to_string()));
    }
    users.insert(request.email.clone(), user);

    Ok(())
}

pub async fn login(db: &MemoryDb, request: &LoginRequest) -> Result<AuthResponse, AppError> {
    let user = {
        let users = db.users.read().map_err(lock_err)?;
        users
            .get(&request.email)
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?
    };

    let password = request.password.clone();
    let stored_hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || verify(password, &stored_hash))
        .await
        .map_err(|e| AppError::Internal(format!("Verify task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Password verification error: {}", e)))?;

    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = generate_jwt(&user)?;

    Ok(AuthResponse {
        token,
        user: UserInfo {
            email: user.email,
            name: user.name,
            role: user.role,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "p".to_string(),
            name: "A".to_string(),
            role: "student".to_string(),
        }
    }

    #[tokio::test]
    async fn register_twice_conflicts() {
        let db = MemoryDb::new();
        let request = register_request("a@x.com");

        assert!(register(&db, &request).await.is_ok());
        match register(&db, &request).await {
            Err(AppError::Conflict(msg)) => assert_eq!(msg, "User already exists"),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn login_roundtrip_verifies_claims() {
        let db = MemoryDb::new();
        register(&db, &register_request("a@x.com")).await.unwrap();

        let response = login(
            &db,
            &LoginRequest {
                email: "a@x.com".to_string(),
                password: "p".to_string(),
            },
        )
        .await
        .unwrap();

        let claims = verify_token(&response.token).unwrap();
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, "student");
        assert_eq!(response.user.name, "A");
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let db = MemoryDb::new();
        register(&db, &register_request("a@x.com")).await.unwrap();

        let result = login(
            &db,
            &LoginRequest {
                email: "a@x.com".to_string(),
                password: "wrong".to_string(),
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_unauthorized() {
        let db = MemoryDb::new();
        let result = login(
            &db,
            &LoginRequest {
                email: "nobody@x.com".to_string(),
                password: "p".to_string(),
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            verify_token("not-a-jwt"),
            Err(AppError::Unauthorized(_))
        ));
    }
}
