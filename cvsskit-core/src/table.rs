// ---------------------------------------------------------------------------
// Metric weight table
// ---------------------------------------------------------------------------
//
// Fixed numeric weights for each categorical metric value, as defined by
// the CVSS v3.1 specification. The functions are total over the typed
// metrics: out-of-domain codes are rejected earlier, at the string
// boundary in `from_code`, so no lookup here can fail.

use cvsskit_types::{
    AttackComplexity, AttackVector, ImpactMetric, PrivilegesRequired, UserInteraction,
};

pub fn attack_vector_weight(av: AttackVector) -> f64 {
    match av {
        AttackVector::Network => 0.85,
        AttackVector::Adjacent => 0.62,
        AttackVector::Local => 0.55,
        AttackVector::Physical => 0.2,
    }
}

pub fn attack_complexity_weight(ac: AttackComplexity) -> f64 {
    match ac {
        AttackComplexity::Low => 0.77,
        AttackComplexity::High => 0.44,
    }
}

pub fn privileges_required_weight(pr: PrivilegesRequired) -> f64 {
    match pr {
        PrivilegesRequired::None => 0.85,
        PrivilegesRequired::Low => 0.62,
        PrivilegesRequired::High => 0.27,
    }
}

pub fn user_interaction_weight(ui: UserInteraction) -> f64 {
    match ui {
        UserInteraction::None => 0.85,
        UserInteraction::Required => 0.62,
    }
}

/// Shared weight set for the Confidentiality, Integrity, and Availability
/// axes.
pub fn impact_weight(impact: ImpactMetric) -> f64 {
    match impact {
        ImpactMetric::None => 0.0,
        ImpactMetric::Low => 0.22,
        ImpactMetric::High => 0.56,
    }
}
