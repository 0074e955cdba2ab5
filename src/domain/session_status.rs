use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an interview session. Transitions only move forward:
/// `InProgress` -> `Completed` -> one of the review outcomes, and the review
/// outcomes are reachable only through an explicit status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    InProgress,
    Completed,
    Hired,
    Reviewed,
    Rejected,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Completed => "completed",
            SessionStatus::Hired => "hired",
            SessionStatus::Reviewed => "reviewed",
            SessionStatus::Rejected => "rejected",
        }
    }

    /// True for the statuses an external reviewer may assign after completion.
    pub fn is_review_outcome(&self) -> bool {
        matches!(
            self,
            SessionStatus::Hired | SessionStatus::Reviewed | SessionStatus::Rejected
        )
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(SessionStatus::InProgress),
            "completed" => Ok(SessionStatus::Completed),
            "hired" => Ok(SessionStatus::Hired),
            "reviewed" => Ok(SessionStatus::Reviewed),
            "rejected" => Ok(SessionStatus::Rejected),
            _ => Err(format!("Invalid session status: {}", s)),
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
