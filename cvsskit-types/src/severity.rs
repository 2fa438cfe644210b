use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative severity rating derived from a base score.
///
/// The five bands partition [0.0, 10.0] totally and without overlap:
/// 0.0 is None, (0.0, 4.0) is Low, [4.0, 7.0) is Medium, [7.0, 9.0) is
/// High, [9.0, 10.0] is Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Classify a base score. Total over [0.0, 10.0]; scores the engine
    /// produces always land in that range.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 9.0 => Severity::Critical,
            s if s >= 7.0 => Severity::High,
            s if s >= 4.0 => Severity::Medium,
            s if s > 0.0 => Severity::Low,
            _ => Severity::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
