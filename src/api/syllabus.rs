use actix_web::{web, HttpResponse, ResponseError};

use crate::database::MemoryDb;
use crate::services::syllabus_service;
use crate::services::syllabus_service::{CreateSyllabusRequest, UpdateSyllabusRequest};

pub async fn create_syllabus(
    db: web::Data<MemoryDb>,
    request: web::Json<CreateSyllabusRequest>,
) -> HttpResponse {
    log::info!("📖 POST /syllabus/create - course: {}", request.course_id);

    match syllabus_service::create_syllabus(&db, &request) {
        Ok(syllabus) => {
            log::info!("✅ Syllabus created: id={}", syllabus.id);
            HttpResponse::Created().json(syllabus)
        }
        Err(e) => {
            log::error!("❌ Syllabus creation failed: {}", e);
            e.error_response()
        }
    }
}

pub async fn get_syllabi(db: web::Data<MemoryDb>) -> HttpResponse {
    log::info!("📖 GET /syllabus");

    match syllabus_service::list_syllabi(&db) {
        Ok(syllabi) => HttpResponse::Ok().json(syllabi),
        Err(e) => {
            log::error!("❌ Syllabus listing failed: {}", e);
            e.error_response()
        }
    }
}

pub async fn get_syllabi_by_course(db: web::Data<MemoryDb>, path: web::Path<u64>) -> HttpResponse {
    let course_id = path.into_inner();
    log::info!("📖 GET /syllabus/course/{}", course_id);

    match syllabus_service::list_syllabi_by_course(&db, course_id) {
        Ok(syllabi) => HttpResponse::Ok().json(syllabi),
        Err(e) => {
            log::error!("❌ Syllabus listing failed: {} - {}", course_id, e);
            e.error_response()
        }
    }
}

pub async fn update_syllabus(
    db: web::Data<MemoryDb>,
    path: web::Path<u64>,
    request: web::Json<UpdateSyllabusRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("📖 PUT /syllabus/{}", id);

    match syllabus_service::update_syllabus(&db, id, &request) {
        Ok(syllabus) => {
            log::info!("✅ Syllabus updated: id={}", id);
            HttpResponse::Ok().json(syllabus)
        }
        Err(e) => {
            log::warn!("❌ Syllabus update failed: {} - {}", id, e);
            e.error_response()
        }
    }
}
