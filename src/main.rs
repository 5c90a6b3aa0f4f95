mod api;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::utils::error::AppError;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

    if env::var("JWT_SECRET").is_err() {
        log::warn!("⚠️  JWT_SECRET not set, using insecure development default");
    }

    log::info!("🚀 Starting LMS Service...");
    log::info!("💾 Storage: in-memory (state is lost on restart)");

    // Process-wide store shared by every worker
    let db = web::Data::new(database::MemoryDb::new());

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        // Render body-parse failures in the same {"error": ...} shape
        // the handlers use.
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            AppError::Internal(err.to_string()).into()
        });

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db.clone())
            .app_data(json_config)
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Auth endpoints
            .service(
                web::scope("/api/auth")
                    .route("/register", web::post().to(api::auth::register))
                    .route("/login", web::post().to(api::auth::login))
                    .service(
                        web::resource("/logout")
                            .wrap(middleware::AuthMiddleware)
                            .route(web::post().to(api::auth::logout)),
                    ),
            )
            // CMS: course records
            .service(
                web::scope("/api/cms")
                    .route("/courses", web::post().to(api::cms::create_course))
                    .route("/courses", web::get().to(api::cms::get_courses))
                    .route("/courses/{id}", web::get().to(api::cms::get_course))
                    .route("/courses/{id}", web::put().to(api::cms::update_course))
                    .route("/courses/{id}", web::delete().to(api::cms::delete_course)),
            )
            // Syllabus
            .service(
                web::scope("/api/syllabus")
                    .route("/create", web::post().to(api::syllabus::create_syllabus))
                    .route(
                        "/course/{course_id}",
                        web::get().to(api::syllabus::get_syllabi_by_course),
                    )
                    .route("", web::get().to(api::syllabus::get_syllabi))
                    .route("/{id}", web::put().to(api::syllabus::update_syllabus)),
            )
            // Analytics
            .service(
                web::scope("/api/analytics")
                    .route("/track", web::post().to(api::analytics::track_activity))
                    .route(
                        "/progress/{user_id}/{course_id}",
                        web::get().to(api::analytics::get_progress),
                    )
                    .route(
                        "/course/{course_id}",
                        web::get().to(api::analytics::get_course_analytics),
                    ),
            )
            // PYQ: past-year-question sets
            .service(
                web::scope("/api/pyq")
                    .route("/create", web::post().to(api::pyq::create_pyq))
                    .route(
                        "/course/{course_id}/year/{year}",
                        web::get().to(api::pyq::get_pyq_by_year),
                    )
                    .route(
                        "/course/{course_id}",
                        web::get().to(api::pyq::get_pyqs_by_course),
                    )
                    .route("", web::get().to(api::pyq::get_pyqs)),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
