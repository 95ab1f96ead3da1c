//! Execution status classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution status as far as the report cares about it
///
/// The directory service reports statuses as free-form strings and may add
/// new ones; anything not recognised is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    Succeeded,
    Executing,
    Failed,
    Other(String),
}

impl ExecutionStatus {
    /// Classify a raw status string. Matching is exact and case-sensitive.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Succeeded" => Self::Succeeded,
            "Executing" => Self::Executing,
            "Failed" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Succeeded => "Succeeded",
            Self::Executing => "Executing",
            Self::Failed => "Failed",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(ExecutionStatus::parse("Succeeded"), ExecutionStatus::Succeeded);
        assert_eq!(ExecutionStatus::parse("Executing"), ExecutionStatus::Executing);
        assert_eq!(ExecutionStatus::parse("Failed"), ExecutionStatus::Failed);
    }

    #[test]
    fn test_unknown_statuses_are_kept_verbatim() {
        for raw in ["Stopping", "Stopped", "", "succeeded"] {
            let status = ExecutionStatus::parse(raw);
            assert_eq!(status, ExecutionStatus::Other(raw.to_string()));
            assert_eq!(status.to_string(), raw);
        }
    }
}
