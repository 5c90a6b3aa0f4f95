use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Course record owned by the CMS service.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub created_at: DateTime<Utc>,
    pub modules: Vec<CourseModule>,
}

/// Content unit inside a course. Courses are created with an empty
/// module list; modules only arrive through updates.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub title: String,
    pub content: String,
}
