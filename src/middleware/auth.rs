use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::services::auth_service;
use crate::utils::error::AppError;

/// Bearer-token guard. Verifies the JWT and inserts the decoded
/// `Claims` into request extensions for the wrapped handlers.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|header| header.strip_prefix("Bearer "))
            .map(str::to_owned);

        let token = match token {
            Some(token) => token,
            None => {
                return Box::pin(async move {
                    Err(AppError::Unauthorized("No token provided".to_string()).into())
                });
            }
        };

        match auth_service::verify_token(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);

                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res)
                })
            }
            Err(e) => Box::pin(async move { Err(e.into()) }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use chrono::Utc;

    use crate::models::User;

    async fn guarded_ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    fn test_user() -> User {
        User {
            user_id: "u1".to_string(),
            email: "a@x.com".to_string(),
            password_hash: String::new(),
            name: "A".to_string(),
            role: "student".to_string(),
            created_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn missing_token_is_rejected() {
        let app = test::init_service(
            App::new().service(
                web::resource("/logout")
                    .wrap(AuthMiddleware)
                    .route(web::post().to(guarded_ok)),
            ),
        )
        .await;

        let req = test::TestRequest::post().uri("/logout").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn valid_token_passes_through() {
        let token = auth_service::generate_jwt(&test_user()).unwrap();

        let app = test::init_service(
            App::new().service(
                web::resource("/logout")
                    .wrap(AuthMiddleware)
                    .route(web::post().to(guarded_ok)),
            ),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/logout")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn garbage_token_is_rejected() {
        let app = test::init_service(
            App::new().service(
                web::resource("/logout")
                    .wrap(AuthMiddleware)
                    .route(web::post().to(guarded_ok)),
            ),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/logout")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
