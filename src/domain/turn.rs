use super::TurnRole;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: TurnRole, text: String) -> Self {
        Self {
            role,
            text,
            created_at: Utc::now(),
        }
    }
}
