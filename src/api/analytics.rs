use actix_web::{web, HttpResponse, ResponseError};

use crate::database::MemoryDb;
use crate::services::analytics_service;
use crate::services::analytics_service::{
    CourseAnalyticsResponse, ProgressResponse, TrackRequest,
};

#[utoipa::path(
    post,
    path = "/api/analytics/track",
    tag = "Analytics",
    request_body = TrackRequest,
    responses(
        (status = 200, description = "Activity tracked")
    )
)]
pub async fn track_activity(
    db: web::Data<MemoryDb>,
    request: web::Json<TrackRequest>,
) -> HttpResponse {
    log::info!(
        "📊 POST /analytics/track - user: {}, course: {}, action: {}",
        request.user_id,
        request.course_id,
        request.action
    );

    match analytics_service::track(&db, &request) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Activity tracked"
        })),
        Err(e) => {
            log::error!("❌ Tracking failed: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/analytics/progress/{user_id}/{course_id}",
    tag = "Analytics",
    params(
        ("user_id" = String, Path, description = "User id"),
        ("course_id" = u64, Path, description = "Course id")
    ),
    responses(
        (status = 200, description = "Progress (zero placeholder if untracked)", body = ProgressResponse)
    )
)]
pub async fn get_progress(db: web::Data<MemoryDb>, path: web::Path<(String, u64)>) -> HttpResponse {
    let (user_id, course_id) = path.into_inner();
    log::info!("📊 GET /analytics/progress/{}/{}", user_id, course_id);

    match analytics_service::get_progress(&db, &user_id, course_id) {
        Ok(progress) => HttpResponse::Ok().json(progress),
        Err(e) => {
            log::error!("❌ Progress lookup failed: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/analytics/course/{course_id}",
    tag = "Analytics",
    params(("course_id" = u64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Aggregate usage for the course", body = CourseAnalyticsResponse)
    )
)]
pub async fn get_course_analytics(db: web::Data<MemoryDb>, path: web::Path<u64>) -> HttpResponse {
    let course_id = path.into_inner();
    log::info!("📊 GET /analytics/course/{}", course_id);

    match analytics_service::get_course_analytics(&db, course_id) {
        Ok(analytics) => HttpResponse::Ok().json(analytics),
        Err(e) => {
            log::error!("❌ Course analytics failed: {}", e);
            e.error_response()
        }
    }
}
