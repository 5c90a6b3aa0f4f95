use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LMS Service API",
        version = "1.0.0",
        description = "Minimal learning-management-system backend.\n\n**Services:** authentication, course content (CMS), syllabi, past-year-questions (PYQ), and basic usage analytics.\n\nAll state is held in process memory and lost on restart."
    ),
    paths(
        // Auth
        crate::api::auth::register,
        crate::api::auth::login,
        crate::api::auth::logout,

        // Health
        crate::api::health::health_check,

        // CMS
        crate::api::cms::create_course,
        crate::api::cms::get_courses,
        crate::api::cms::get_course,
        crate::api::cms::update_course,
        crate::api::cms::delete_course,

        // Analytics
        crate::api::analytics::track_activity,
        crate::api::analytics::get_progress,
        crate::api::analytics::get_course_analytics,
    ),
    components(
        schemas(
            // Auth
            crate::services::auth_service::RegisterRequest,
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::AuthResponse,
            crate::services::auth_service::UserInfo,

            // Health
            crate::api::health::HealthResponse,

            // CMS
            crate::models::Course,
            crate::models::CourseModule,
            crate::services::cms_service::CreateCourseRequest,
            crate::services::cms_service::UpdateCourseRequest,

            // Analytics
            crate::services::analytics_service::TrackRequest,
            crate::services::analytics_service::ProgressResponse,
            crate::services::analytics_service::CourseAnalyticsResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login, and token-guarded logout."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
        (name = "CMS", description = "Course record storage: create, list, fetch, update, delete."),
        (name = "Analytics", description = "Per-user activity tracking and per-course aggregates."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            );
        }
    }
}
