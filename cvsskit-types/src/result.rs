use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// Computed view of one scoring request. Never mutated after creation and
/// never stored; callers serialize or display it and move on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Base score in [0.0, 10.0], already rounded to one decimal.
    pub base_score: f64,
    pub severity: Severity,
    /// Canonical vector string for the scored input.
    pub vector_string: String,
}
