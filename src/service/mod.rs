//! Domain services between the HTTP handlers and the repository.
//!
//! Services turn absent records into tagged [`AppError::NotFound`](crate::errors::AppError)
//! values, fill in default messages for unexpected failures, and return the
//! user-facing success messages.

pub mod forum;
pub mod notice;
pub mod school;
pub mod user;

pub use forum::ForumService;
pub use notice::NoticeService;
pub use school::SchoolDataService;
pub use user::UserService;
