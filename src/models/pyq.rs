use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Past-year-question set tied to a course and an exam year.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pyq {
    pub id: u64,
    pub course_id: u64,
    pub year: i32,
    pub questions: Vec<PyqQuestion>,
    pub duration: String,
    pub total_marks: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PyqQuestion {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<u32>,
}
