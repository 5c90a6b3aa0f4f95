use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Syllabus record. `course_id` is not checked against the CMS store;
/// orphaned syllabi are possible and expected.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Syllabus {
    pub id: u64,
    pub course_id: u64,
    pub topics: Vec<String>,
    pub duration: String,
    pub objectives: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub chapters: Vec<String>,
}
