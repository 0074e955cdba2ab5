mod interview_service;
pub mod prompts;
mod report_renderer;
mod report_worker;
pub mod scoring;

pub use interview_service::{
    EndConfirmation, InterviewError, InterviewService, StartedInterview, TurnOutcome,
};
pub use report_renderer::{performance_tier, render_report};
pub use report_worker::{ReportMessage, ReportWorker};
