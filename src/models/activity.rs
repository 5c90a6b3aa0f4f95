use serde::{Deserialize, Serialize};

/// Per-(user, course) activity log, keyed `"{userId}-{courseId}"` in the
/// store. Timestamps are opaque client-supplied strings kept verbatim;
/// `last_active` may move backward if the client sends an earlier one.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub user_id: String,
    pub course_id: u64,
    pub activities: Vec<ActivityEntry>,
    pub last_active: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub action: String,
    pub timestamp: String,
}

impl ActivityRecord {
    pub fn key(user_id: &str, course_id: u64) -> String {
        format!("{}-{}", user_id, course_id)
    }
}
