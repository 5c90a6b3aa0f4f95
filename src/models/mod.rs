pub mod user;
pub mod course;
pub mod syllabus;
pub mod pyq;
pub mod activity;

pub use user::*;
pub use course::*;
pub use syllabus::*;
pub use pyq::*;
pub use activity::*;
