use chrono::Utc;
use serde::Deserialize;

use crate::database::{lock_err, MemoryDb};
use crate::models::{Pyq, PyqQuestion};
use crate::utils::error::AppError;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePyqRequest {
    pub course_id: u64,
    pub year: i32,
    pub questions: Vec<PyqQuestion>,
    pub duration: String,
    pub total_marks: u32,
}

pub fn create_pyq(db: &MemoryDb, request: &CreatePyqRequest) -> Result<Pyq, AppError> {
    let pyq = Pyq {
        id: db.next_pyq_id(),
        course_id: request.course_id,
        year: request.year,
        questions: request.questions.clone(),
        duration: request.duration.clone(),
        total_marks: request.total_marks,
        created_at: Utc::now(),
    };

    let mut pyqs = db.pyqs.write().map_err(lock_err)?;
    pyqs.insert(pyq.id, pyq.clone());

    Ok(pyq)
}

pub fn list_pyqs(db: &MemoryDb) -> Result<Vec<Pyq>, AppError> {
    let pyqs = db.pyqs.read().map_err(lock_err)?;
    Ok(pyqs.values().cloned().collect())
}

pub fn list_pyqs_by_course(db: &MemoryDb, course_id: u64) -> Result<Vec<Pyq>, AppError> {
    let pyqs = db.pyqs.read().map_err(lock_err)?;
    Ok(pyqs
        .values()
        .filter(|p| p.course_id == course_id)
        .cloned()
        .collect())
}

/// First match wins if several sets exist for the same course and year.
pub fn get_pyq_by_year(db: &MemoryDb, course_id: u64, year: i32) -> Result<Pyq, AppError> {
    let pyqs = db.pyqs.read().map_err(lock_err)?;
    pyqs.values()
        .find(|p| p.course_id == course_id && p.year == year)
        .cloned()
        .ok_or_else(|| AppError::NotFound("PYQ not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(course_id: u64, year: i32) -> CreatePyqRequest {
        CreatePyqRequest {
            course_id,
            year,
            questions: vec![PyqQuestion {
                question: "Explain lifetimes".to_string(),
                marks: Some(10),
            }],
            duration: "3 hours".to_string(),
            total_marks: 100,
        }
    }

    #[test]
    fn fetch_by_course_and_year() {
        let db = MemoryDb::new();
        create_pyq(&db, &create_request(1, 2023)).unwrap();
        create_pyq(&db, &create_request(1, 2024)).unwrap();
        create_pyq(&db, &create_request(2, 2024)).unwrap();

        let pyq = get_pyq_by_year(&db, 1, 2024).unwrap();
        assert_eq!(pyq.course_id, 1);
        assert_eq!(pyq.year, 2024);

        assert_eq!(list_pyqs_by_course(&db, 1).unwrap().len(), 2);
        assert_eq!(list_pyqs(&db).unwrap().len(), 3);
    }

    #[test]
    fn missing_year_is_not_found() {
        let db = MemoryDb::new();
        create_pyq(&db, &create_request(1, 2023)).unwrap();

        assert!(matches!(
            get_pyq_by_year(&db, 1, 1999),
            Err(AppError::NotFound(_))
        ));
    }
}
