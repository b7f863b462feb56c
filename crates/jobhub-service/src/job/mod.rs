//! Job CRUD service and its reply type.

pub mod reply;
pub mod service;

pub use reply::JobReply;
pub use service::JobService;
