pub mod health;
pub mod auth;
pub mod cms;
pub mod syllabus;
pub mod pyq;
pub mod analytics;
pub mod swagger;
