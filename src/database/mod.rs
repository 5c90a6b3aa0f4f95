use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::models::{ActivityRecord, Course, Pyq, Syllabus, User};
use crate::utils::error::AppError;

/// Process-wide in-memory store, injected into handlers via
/// `web::Data<MemoryDb>`. Each service owns one table; id counters are
/// monotonic per process and never reused, even after deletes. Nothing
/// survives a restart.
pub struct MemoryDb {
    pub users: RwLock<HashMap<String, User>>,
    pub courses: RwLock<HashMap<u64, Course>>,
    pub syllabi: RwLock<HashMap<u64, Syllabus>>,
    pub pyqs: RwLock<HashMap<u64, Pyq>>,
    pub activity: RwLock<HashMap<String, ActivityRecord>>,
    course_seq: AtomicU64,
    syllabus_seq: AtomicU64,
    pyq_seq: AtomicU64,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            courses: RwLock::new(HashMap::new()),
            syllabi: RwLock::new(HashMap::new()),
            pyqs: RwLock::new(HashMap::new()),
            activity: RwLock::new(HashMap::new()),
            course_seq: AtomicU64::new(1),
            syllabus_seq: AtomicU64::new(1),
            pyq_seq: AtomicU64::new(1),
        }
    }

    pub fn next_course_id(&self) -> u64 {
        self.course_seq.fetch_add(1, Ordering::SeqCst)
    }

    pub fn next_syllabus_id(&self) -> u64 {
        self.syllabus_seq.fetch_add(1, Ordering::SeqCst)
    }

    pub fn next_pyq_id(&self) -> u64 {
        self.pyq_seq.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for MemoryDb {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a poisoned lock to the generic internal error instead of
/// panicking the handler.
pub fn lock_err<T>(_: T) -> AppError {
    AppError::Internal("store lock poisoned".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_monotonic_and_never_reused() {
        let db = MemoryDb::new();
        let first = db.next_course_id();
        let second = db.next_course_id();
        assert_eq!(first, 1);
        assert_eq!(second, 2);

        // A delete does not recycle ids.
        db.courses.write().unwrap().remove(&second);
        assert_eq!(db.next_course_id(), 3);
    }

    #[test]
    fn sequences_are_independent_per_table() {
        let db = MemoryDb::new();
        db.next_course_id();
        db.next_course_id();
        assert_eq!(db.next_syllabus_id(), 1);
        assert_eq!(db.next_pyq_id(), 1);
    }
}
