use actix_web::{web, HttpResponse, ResponseError};

use crate::database::MemoryDb;
use crate::models::Course;
use crate::services::cms_service;
use crate::services::cms_service::{CreateCourseRequest, UpdateCourseRequest};

#[utoipa::path(
    post,
    path = "/api/cms/courses",
    tag = "CMS",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = Course)
    )
)]
pub async fn create_course(
    db: web::Data<MemoryDb>,
    request: web::Json<CreateCourseRequest>,
) -> HttpResponse {
    log::info!("📚 POST /cms/courses - title: {}", request.title);

    match cms_service::create_course(&db, &request) {
        Ok(course) => {
            log::info!("✅ Course created: id={}", course.id);
            HttpResponse::Created().json(course)
        }
        Err(e) => {
            log::error!("❌ Course creation failed: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/cms/courses",
    tag = "CMS",
    responses(
        (status = 200, description = "All courses", body = [Course])
    )
)]
pub async fn get_courses(db: web::Data<MemoryDb>) -> HttpResponse {
    log::info!("📚 GET /cms/courses");

    match cms_service::list_courses(&db) {
        Ok(courses) => HttpResponse::Ok().json(courses),
        Err(e) => {
            log::error!("❌ Course listing failed: {}", e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/cms/courses/{id}",
    tag = "CMS",
    params(("id" = u64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course found", body = Course),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get_course(db: web::Data<MemoryDb>, path: web::Path<u64>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("📚 GET /cms/courses/{}", id);

    match cms_service::get_course(&db, id) {
        Ok(course) => HttpResponse::Ok().json(course),
        Err(e) => {
            log::warn!("❌ Course {} not found", id);
            e.error_response()
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/cms/courses/{id}",
    tag = "CMS",
    params(("id" = u64, Path, description = "Course id")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 404, description = "Course not found")
    )
)]
pub async fn update_course(
    db: web::Data<MemoryDb>,
    path: web::Path<u64>,
    request: web::Json<UpdateCourseRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("📚 PUT /cms/courses/{}", id);

    match cms_service::update_course(&db, id, &request) {
        Ok(course) => {
            log::info!("✅ Course updated: id={}", id);
            HttpResponse::Ok().json(course)
        }
        Err(e) => {
            log::warn!("❌ Course update failed: {} - {}", id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/cms/courses/{id}",
    tag = "CMS",
    params(("id" = u64, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deleted (no-op if absent)")
    )
)]
pub async fn delete_course(db: web::Data<MemoryDb>, path: web::Path<u64>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🗑️ DELETE /cms/courses/{}", id);

    match cms_service::delete_course(&db, id) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Course deleted successfully"
        })),
        Err(e) => {
            log::error!("❌ Course deletion failed: {} - {}", id, e);
            e.error_response()
        }
    }
}
