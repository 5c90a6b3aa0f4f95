use chrono::Utc;
use serde::Deserialize;

use crate::database::{lock_err, MemoryDb};
use crate::models::Syllabus;
use crate::utils::error::AppError;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSyllabusRequest {
    pub course_id: u64,
    pub topics: Vec<String>,
    pub duration: String,
    pub objectives: Vec<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSyllabusRequest {
    pub course_id: Option<u64>,
    pub topics: Option<Vec<String>>,
    pub duration: Option<String>,
    pub objectives: Option<Vec<String>>,
    pub chapters: Option<Vec<String>>,
}

pub fn create_syllabus(
    db: &MemoryDb,
    request: &CreateSyllabusRequest,
) -> Result<Syllabus, AppError> {
    let syllabus = Syllabus {
        id: db.next_syllabus_id(),
        course_id: request.course_id,
        topics: request.topics.clone(),
        duration: request.duration.clone(),
        objectives: request.objectives.clone(),
        created_at: Utc::now(),
        chapters: Vec::new(),
    };

    let mut syllabi = db.syllabi.write().map_err(lock_err)?;
    syllabi.insert(syllabus.id, syllabus.clone());

    Ok(syllabus)
}

pub fn list_syllabi(db: &MemoryDb) -> Result<Vec<Syllabus>, AppError> {
    let syllabi = db.syllabi.read().map_err(lock_err)?;
    Ok(syllabi.values().cloned().collect())
}

pub fn list_syllabi_by_course(db: &MemoryDb, course_id: u64) -> Result<Vec<Syllabus>, AppError> {
    let syllabi = db.syllabi.read().map_err(lock_err)?;
    Ok(syllabi
        .values()
        .filter(|s| s.course_id == course_id)
        .cloned()
        .collect())
}

pub fn update_syllabus(
    db: &MemoryDb,
    id: u64,
    request: &UpdateSyllabusRequest,
) -> Result<Syllabus, AppError> {
    let mut syllabi = db.syllabi.write().map_err(lock_err)?;
    let syllabus = syllabi
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound("Syllabus not found".to_string()))?;

    if let Some(course_id) = request.course_id {
        syllabus.course_id = course_id;
    }
    if let Some(topics) = &request.topics {
        syllabus.topics = topics.clone();
    }
    if let Some(duration) = &request.duration {
        syllabus.duration = duration.clone();
    }
    if let Some(objectives) = &request.objectives {
        syllabus.objectives = objectives.clone();
    }
    if let Some(chapters) = &request.chapters {
        syllabus.chapters = chapters.clone();
    }

    Ok(syllabus.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(course_id: u64) -> CreateSyllabusRequest {
        CreateSyllabusRequest {
            course_id,
            topics: vec!["ownership".to_string()],
            duration: "12 weeks".to_string(),
            objectives: vec!["borrowck".to_string()],
        }
    }

    #[test]
    fn filter_by_course_returns_only_matching() {
        let db = MemoryDb::new();
        create_syllabus(&db, &create_request(1)).unwrap();
        create_syllabus(&db, &create_request(1)).unwrap();
        create_syllabus(&db, &create_request(2)).unwrap();

        assert_eq!(list_syllabi_by_course(&db, 1).unwrap().len(), 2);
        assert_eq!(list_syllabi_by_course(&db, 3).unwrap().len(), 0);
        assert_eq!(list_syllabi(&db).unwrap().len(), 3);
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let db = MemoryDb::new();
        let created = create_syllabus(&db, &create_request(1)).unwrap();

        let updated = update_syllabus(
            &db,
            created.id,
            &UpdateSyllabusRequest {
                course_id: None,
                topics: None,
                duration: None,
                objectives: None,
                chapters: Some(vec!["ch1".to_string()]),
            },
        )
        .unwrap();

        assert_eq!(updated.chapters, vec!["ch1".to_string()]);
        assert_eq!(updated.topics, vec!["ownership".to_string()]);
        assert_eq!(updated.course_id, 1);
    }

    #[test]
    fn update_missing_syllabus_is_not_found() {
        let db = MemoryDb::new();
        let request = UpdateSyllabusRequest {
            course_id: None,
            topics: None,
            duration: None,
            objectives: None,
            chapters: None,
        };
        assert!(matches!(
            update_syllabus(&db, 7, &request),
            Err(AppError::NotFound(_))
        ));
    }
}
