use std::fmt;

/// Categorical hiring suggestion extracted from the free-text evaluation
/// narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    StrongHire,
    Hire,
    Maybe,
    NoHire,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::StrongHire => "Strong Hire",
            Recommendation::Hire => "Hire",
            Recommendation::Maybe => "Maybe",
            Recommendation::NoHire => "No Hire",
        }
    }

    /// Keyword precedence: "strong hire" wins over "no hire", which wins over
    /// a bare "hire". Anything else is `Maybe`.
    pub fn from_narrative(narrative: &str) -> Self {
        let lowered = narrative.to_lowercase();
        if lowered.contains("strong hire") {
            Recommendation::StrongHire
        } else if lowered.contains("no hire") {
            Recommendation::NoHire
        } else if lowered.contains("hire") {
            Recommendation::Hire
        } else {
            Recommendation::Maybe
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
