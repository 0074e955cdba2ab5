mod end_interview;
mod health;
mod sessions;
mod start_interview;
mod submit_response;
mod update_status;

pub use end_interview::end_interview_handler;
pub use health::health_handler;
pub use sessions::list_sessions_handler;
pub use start_interview::start_interview_handler;
pub use submit_response::submit_response_handler;
pub use update_status::update_status_handler;
