// ---------------------------------------------------------------------------
// CVSS v3.1 base metrics
// ---------------------------------------------------------------------------
//
// One enum per axis, each serialized as its single-letter CVSS code.
// Codes are case-sensitive, matching the vector-string grammar.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the eight base-metric axes.
///
/// Displays as the CVSS abbreviation used in vector strings ("AV", "PR", ...),
/// which keeps error messages readable next to other CVSS tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricAxis {
    AttackVector,
    AttackComplexity,
    PrivilegesRequired,
    UserInteraction,
    Scope,
    Confidentiality,
    Integrity,
    Availability,
}

impl MetricAxis {
    pub fn abbrev(&self) -> &'static str {
        match self {
            MetricAxis::AttackVector => "AV",
            MetricAxis::AttackComplexity => "AC",
            MetricAxis::PrivilegesRequired => "PR",
            MetricAxis::UserInteraction => "UI",
            MetricAxis::Scope => "S",
            MetricAxis::Confidentiality => "C",
            MetricAxis::Integrity => "I",
            MetricAxis::Availability => "A",
        }
    }
}

impl fmt::Display for MetricAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

/// Validation failure for raw metric input.
///
/// Both variants are detected before any scoring arithmetic runs; a
/// malformed vector never produces a partial or defaulted score.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    /// A supplied code is outside its axis's enumerated domain.
    #[error("unknown {axis} code: {code:?}")]
    UnknownMetricCode { axis: MetricAxis, code: String },
    /// A required axis is absent from the input.
    #[error("missing required metric: {axis}")]
    InvalidVector { axis: MetricAxis },
}

/// Attack Vector (AV): how remote an attacker can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackVector {
    #[serde(rename = "N")]
    Network,
    #[serde(rename = "A")]
    Adjacent,
    #[serde(rename = "L")]
    Local,
    #[serde(rename = "P")]
    Physical,
}

impl AttackVector {
    pub fn code(&self) -> &'static str {
        match self {
            AttackVector::Network => "N",
            AttackVector::Adjacent => "A",
            AttackVector::Local => "L",
            AttackVector::Physical => "P",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, VectorError> {
        match code {
            "N" => Ok(AttackVector::Network),
            "A" => Ok(AttackVector::Adjacent),
            "L" => Ok(AttackVector::Local),
            "P" => Ok(AttackVector::Physical),
            _ => Err(VectorError::UnknownMetricCode {
                axis: MetricAxis::AttackVector,
                code: code.to_string(),
            }),
        }
    }
}

impl fmt::Display for AttackVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Attack Complexity (AC): conditions beyond the attacker's control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackComplexity {
    #[serde(rename = "L")]
    Low,
    #[serde(rename = "H")]
    High,
}

impl AttackComplexity {
    pub fn code(&self) -> &'static str {
        match self {
            AttackComplexity::Low => "L",
            AttackComplexity::High => "H",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, VectorError> {
        match code {
            "L" => Ok(AttackComplexity::Low),
            "H" => Ok(AttackComplexity::High),
            _ => Err(VectorError::UnknownMetricCode {
                axis: MetricAxis::AttackComplexity,
                code: code.to_string(),
            }),
        }
    }
}

impl fmt::Display for AttackComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Privileges Required (PR): privilege level needed before the attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrivilegesRequired {
    #[serde(rename = "N")]
    None,
    #[serde(rename = "L")]
    Low,
    #[serde(rename = "H")]
    High,
}

impl PrivilegesRequired {
    pub fn code(&self) -> &'static str {
        match self {
            PrivilegesRequired::None => "N",
            PrivilegesRequired::Low => "L",
            PrivilegesRequired::High => "H",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, VectorError> {
        match code {
            "N" => Ok(PrivilegesRequired::None),
            "L" => Ok(PrivilegesRequired::Low),
            "H" => Ok(PrivilegesRequired::High),
            _ => Err(VectorError::UnknownMetricCode {
                axis: MetricAxis::PrivilegesRequired,
                code: code.to_string(),
            }),
        }
    }
}

impl fmt::Display for PrivilegesRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// User Interaction (UI): whether a user other than the attacker must act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserInteraction {
    #[serde(rename = "N")]
    None,
    #[serde(rename = "R")]
    Required,
}

impl UserInteraction {
    pub fn code(&self) -> &'static str {
        match self {
            UserInteraction::None => "N",
            UserInteraction::Required => "R",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, VectorError> {
        match code {
            "N" => Ok(UserInteraction::None),
            "R" => Ok(UserInteraction::Required),
            _ => Err(VectorError::UnknownMetricCode {
                axis: MetricAxis::UserInteraction,
                code: code.to_string(),
            }),
        }
    }
}

impl fmt::Display for UserInteraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Scope (S): whether impact escapes the vulnerable component.
///
/// Carries no weight of its own; it selects which Impact formula applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    #[serde(rename = "U")]
    Unchanged,
    #[serde(rename = "C")]
    Changed,
}

impl Scope {
    pub fn code(&self) -> &'static str {
        match self {
            Scope::Unchanged => "U",
            Scope::Changed => "C",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, VectorError> {
        match code {
            "U" => Ok(Scope::Unchanged),
            "C" => Ok(Scope::Changed),
            _ => Err(VectorError::UnknownMetricCode {
                axis: MetricAxis::Scope,
                code: code.to_string(),
            }),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Impact level shared by the Confidentiality, Integrity, and Availability
/// axes. The three axes have distinct meanings but one weight set, so a
/// single enum serves all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactMetric {
    #[serde(rename = "N")]
    None,
    #[serde(rename = "L")]
    Low,
    #[serde(rename = "H")]
    High,
}

impl ImpactMetric {
    pub fn code(&self) -> &'static str {
        match self {
            ImpactMetric::None => "N",
            ImpactMetric::Low => "L",
            ImpactMetric::High => "H",
        }
    }

    /// Parse an impact code, attributing failures to the given axis
    /// (C, I, and A share the domain but must report their own axis).
    pub fn from_code(axis: MetricAxis, code: &str) -> Result<Self, VectorError> {
        match code {
            "N" => Ok(ImpactMetric::None),
            "L" => Ok(ImpactMetric::Low),
            "H" => Ok(ImpactMetric::High),
            _ => Err(VectorError::UnknownMetricCode {
                axis,
                code: code.to_string(),
            }),
        }
    }
}

impl fmt::Display for ImpactMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
