use chrono::Utc;
use serde::Deserialize;

use crate::database::{lock_err, MemoryDb};
use crate::models::{Course, CourseModule};
use crate::utils::error::AppError;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
}

/// Every mutable course field, each optional: `Some` overwrites, `None`
/// leaves the stored value alone.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub duration: Option<String>,
    pub modules: Option<Vec<CourseModule>>,
}

pub fn create_course(db: &MemoryDb, request: &CreateCourseRequest) -> Result<Course, AppError> {
    let course = Course {
        id: db.next_course_id(),
        title: request.title.clone(),
        description: request.description.clone(),
        instructor: request.instructor.clone(),
        duration: request.duration.clone(),
        created_at: Utc::now(),
        modules: Vec::new(),
    };

    let mut courses = db.courses.write().map_err(lock_err)?;
    courses.insert(course.id, course.clone());

    Ok(course)
}

pub fn list_courses(db: &MemoryDb) -> Result<Vec<Course>, AppError> {
    let courses = db.courses.read().map_err(lock_err)?;
    Ok(courses.values().cloned().collect())
}

pub fn get_course(db: &MemoryDb, id: u64) -> Result<Course, AppError> {
    let courses = db.courses.read().map_err(lock_err)?;
    courses
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))
}

pub fn update_course(
    db: &MemoryDb,
    id: u64,
    request: &UpdateCourseRequest,
) -> Result<Course, AppError> {
    let mut courses = db.courses.write().map_err(lock_err)?;
    let course = courses
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    if let Some(title) = &request.title {
        course.title = title.clone();
    }
    if let Some(description) = &request.description {
        course.description = description.clone();
    }
    if let Some(instructor) = &request.instructor {
        course.instructor = instructor.clone();
    }
    if let Some(duration) = &request.duration {
        course.duration = duration.clone();
    }
    if let Some(modules) = &request.modules {
        course.modules = modules.clone();
    }

    Ok(course.clone())
}

/// Removal is unconditional: deleting an absent id is a silent no-op,
/// and syllabi/PYQs/activity referencing the course are left orphaned.
pub fn delete_course(db: &MemoryDb, id: u64) -> Result<(), AppError> {
    let mut courses = db.courses.write().map_err(lock_err)?;
    courses.remove(&id);
    Ok(())
}
