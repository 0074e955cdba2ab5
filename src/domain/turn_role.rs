use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnRole {
    System,
    Candidate,
    Interviewer,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::System => "SYSTEM",
            TurnRole::Candidate => "CANDIDATE",
            TurnRole::Interviewer => "INTERVIEWER",
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SYSTEM" => Ok(TurnRole::System),
            "CANDIDATE" => Ok(TurnRole::Candidate),
            "INTERVIEWER" => Ok(TurnRole::Interviewer),
            _ => Err(format!("Invalid turn role: {}", s)),
        }
    }
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
