use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user, keyed by email in the store.
/// The bcrypt hash never leaves the process.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
