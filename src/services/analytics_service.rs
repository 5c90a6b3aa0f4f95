use serde::{Deserialize, Serialize};

use crate::database::{lock_err, MemoryDb};
use crate::models::{ActivityEntry, ActivityRecord};
use crate::utils::error::AppError;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    pub user_id: String,
    pub course_id: u64,
    pub action: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub user_id: String,
    pub course_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_activities: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active: Option<String>,
    /// Zero-progress placeholder returned when nothing was tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseAnalyticsResponse {
    pub course_id: u64,
    pub total_users: usize,
    pub total_activities: usize,
}

/// Appends one activity and moves `last_active` to the supplied
/// timestamp, even if that timestamp is earlier than the current one.
pub fn track(db: &MemoryDb, request: &TrackRequest) -> Result<(), AppError> {
    let key = ActivityRecord::key(&request.user_id, request.course_id);

    let mut activity = db.activity.write().map_err(lock_err)?;
    let record = activity.entry(key).or_insert_with(|| ActivityRecord {
        user_id: request.user_id.clone(),
        course_id: request.course_id,
        activities: Vec::new(),
        last_active: request.timestamp.clone(),
    });

    record.activities.push(ActivityEntry {
        action: request.action.clone(),
        timestamp: request.timestamp.clone(),
    });
    record.last_active = request.timestamp.clone();

    Ok(())
}

pub fn get_progress(
    db: &MemoryDb,
    user_id: &str,
    course_id: u64,
) -> Result<ProgressResponse, AppError> {
    let key = ActivityRecord::key(user_id, course_id);
    let activity = db.activity.read().map_err(lock_err)?;

    match activity.get(&key) {
        Some(record) => Ok(ProgressResponse {
            user_id: user_id.to_string(),
            course_id,
            total_activities: Some(record.activities.len()),
            last_active: Some(record.last_active.clone()),
            progress: None,
        }),
        None => Ok(ProgressResponse {
            user_id: user_id.to_string(),
            course_id,
            total_activities: None,
            last_active: None,
            progress: Some(0),
        }),
    }
}

/// Linear scan over every record; fine at in-memory scale.
pub fn get_course_analytics(
    db: &MemoryDb,
    course_id: u64,
) -> Result<CourseAnalyticsResponse, AppError> {
    let activity = db.activity.read().map_err(lock_err)?;
    let records: Vec<&ActivityRecord> = activity
        .values()
        .filter(|r| r.course_id == course_id)
        .collect();

    Ok(CourseAnalyticsResponse {
        course_id,
        total_users: records.len(),
        total_activities: records.iter().map(|r| r.activities.len()).sum(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track_request(user_id: &str, course_id: u64, timestamp: &str) -> TrackRequest {
        TrackRequest {
            user_id: user_id.to_string(),
            course_id,
            action: "viewed".to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn two_tracks_count_two_and_keep_second_timestamp() {
        let db = MemoryDb::new();
        track(&db, &track_request("u1", 1, "2026-01-01T10:00:00Z")).unwrap();
        track(&db, &track_request("u1", 1, "2026-01-02T09:00:00Z")).unwrap();

        let progress = get_progress(&db, "u1", 1).unwrap();
        assert_eq!(progress.total_activities, Some(2));
        assert_eq!(
            progress.last_active.as_deref(),
            Some("2026-01-02T09:00:00Z")
        );
        assert!(progress.progress.is_none());
    }

    #[test]
    fn timestamp_moving_backward_is_kept_verbatim() {
        let db = MemoryDb::new();
        track(&db, &track_request("u1", 1, "2026-01-02T09:00:00Z")).unwrap();
        track(&db, &track_request("u1", 1, "2026-01-01T10:00:00Z")).unwrap();

        let progress = get_progress(&db, "u1", 1).unwrap();
        assert_eq!(
            progress.last_active.as_deref(),
            Some("2026-01-01T10:00:00Z")
        );
    }

    #[test]
    fn untracked_pair_returns_zero_placeholder() {
        let db = MemoryDb::new();
        let progress = get_progress(&db, "ghost", 9).unwrap();
        assert_eq!(progress.progress, Some(0));
        assert!(progress.total_activities.is_none());
        assert!(progress.last_active.is_none());
    }

    #[test]
    fn course_totals_sum_across_users() {
        let db = MemoryDb::new();
        track(&db, &track_request("u1", 1, "t1")).unwrap();
        track(&db, &track_request("u1", 1, "t2")).unwrap();
        track(&db, &track_request("u2", 1, "t3")).unwrap();
        track(&db, &track_request("u3", 2, "t4")).unwrap();

        let analytics = get_course_analytics(&db, 1).unwrap();
        assert_eq!(analytics.total_users, 2);
        assert_eq!(analytics.total_activities, 3);

        let empty = get_course_analytics(&db, 5).unwrap();
        assert_eq!(empty.total_users, 0);
        assert_eq!(empty.total_activities, 0);
    }
}
