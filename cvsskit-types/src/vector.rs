use crate::metric::{
    AttackComplexity, AttackVector, ImpactMetric, MetricAxis, PrivilegesRequired, Scope,
    UserInteraction, VectorError,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One complete CVSS v3.1 base-metric selection.
///
/// A plain value object: two vectors with identical fields are
/// interchangeable, and scoring never mutates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CvssVector {
    pub attack_vector: AttackVector,
    pub attack_complexity: AttackComplexity,
    pub privileges_required: PrivilegesRequired,
    pub user_interaction: UserInteraction,
    pub scope: Scope,
    pub confidentiality: ImpactMetric,
    pub integrity: ImpactMetric,
    pub availability: ImpactMetric,
}

impl CvssVector {
    /// Build a vector from raw categorical codes in AV, AC, PR, UI, S, C,
    /// I, A order.
    ///
    /// A `None` axis fails with `InvalidVector`; an out-of-domain code
    /// fails with `UnknownMetricCode`. Axes are checked left to right, so
    /// the first problem wins.
    #[allow(clippy::too_many_arguments)]
    pub fn from_codes(
        av: Option<&str>,
        ac: Option<&str>,
        pr: Option<&str>,
        ui: Option<&str>,
        s: Option<&str>,
        c: Option<&str>,
        i: Option<&str>,
        a: Option<&str>,
    ) -> Result<Self, VectorError> {
        Ok(Self {
            attack_vector: AttackVector::from_code(require(MetricAxis::AttackVector, av)?)?,
            attack_complexity: AttackComplexity::from_code(require(
                MetricAxis::AttackComplexity,
                ac,
            )?)?,
            privileges_required: PrivilegesRequired::from_code(require(
                MetricAxis::PrivilegesRequired,
                pr,
            )?)?,
            user_interaction: UserInteraction::from_code(require(
                MetricAxis::UserInteraction,
                ui,
            )?)?,
            scope: Scope::from_code(require(MetricAxis::Scope, s)?)?,
            confidentiality: ImpactMetric::from_code(
                MetricAxis::Confidentiality,
                require(MetricAxis::Confidentiality, c)?,
            )?,
            integrity: ImpactMetric::from_code(
                MetricAxis::Integrity,
                require(MetricAxis::Integrity, i)?,
            )?,
            availability: ImpactMetric::from_code(
                MetricAxis::Availability,
                require(MetricAxis::Availability, a)?,
            )?,
        })
    }

    /// Canonical vector-string encoding.
    ///
    /// Construction only — parsing vector strings back is out of scope.
    pub fn vector_string(&self) -> String {
        self.to_string()
    }
}

fn require(axis: MetricAxis, code: Option<&str>) -> Result<&str, VectorError> {
    code.ok_or(VectorError::InvalidVector { axis })
}

impl fmt::Display for CvssVector {
    /// Field order is fixed by the CVSS v3.1 vector-string grammar; codes
    /// are interpolated verbatim, never the numeric weights.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CVSS:3.1/AV:{}/AC:{}/PR:{}/UI:{}/S:{}/C:{}/I:{}/A:{}",
            self.attack_vector,
            self.attack_complexity,
            self.privileges_required,
            self.user_interaction,
            self.scope,
            self.confidentiality,
            self.integrity,
            self.availability,
        )
    }
}
