use actix_web::{web, HttpResponse, ResponseError};

use crate::database::MemoryDb;
use crate::services::pyq_service;
use crate::services::pyq_service::CreatePyqRequest;

pub async fn create_pyq(
    db: web::Data<MemoryDb>,
    request: web::Json<CreatePyqRequest>,
) -> HttpResponse {
    log::info!(
        "📝 POST /pyq/create - course: {}, year: {}",
        request.course_id,
        request.year
    );

    match pyq_service::create_pyq(&db, &request) {
        Ok(pyq) => {
            log::info!("✅ PYQ created: id={}", pyq.id);
            HttpResponse::Created().json(pyq)
        }
        Err(e) => {
            log::error!("❌ PYQ creation failed: {}", e);
            e.error_response()
        }
    }
}

pub async fn get_pyqs(db: web::Data<MemoryDb>) -> HttpResponse {
    log::info!("📝 GET /pyq");

    match pyq_service::list_pyqs(&db) {
        Ok(pyqs) => HttpResponse::Ok().json(pyqs),
        Err(e) => {
            log::error!("❌ PYQ listing failed: {}", e);
            e.error_response()
        }
    }
}

pub async fn get_pyqs_by_course(db: web::Data<MemoryDb>, path: web::Path<u64>) -> HttpResponse {
    let course_id = path.into_inner();
    log::info!("📝 GET /pyq/course/{}", course_id);

    match pyq_service::list_pyqs_by_course(&db, course_id) {
        Ok(pyqs) => HttpResponse::Ok().json(pyqs),
        Err(e) => {
            log::error!("❌ PYQ listing failed: {} - {}", course_id, e);
            e.error_response()
        }
    }
}

pub async fn get_pyq_by_year(db: web::Data<MemoryDb>, path: web::Path<(u64, i32)>) -> HttpResponse {
    let (course_id, year) = path.into_inner();
    log::info!("📝 GET /pyq/course/{}/year/{}", course_id, year);

    match pyq_service::get_pyq_by_year(&db, course_id, year) {
        Ok(pyq) => HttpResponse::Ok().json(pyq),
        Err(e) => {
            log::warn!("❌ PYQ not found: course={}, year={}", course_id, year);
            e.error_response()
        }
    }
}
