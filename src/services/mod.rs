pub mod auth_service;
pub mod cms_service;
pub mod syllabus_service;
pub mod pyq_service;
pub mod analytics_service;
