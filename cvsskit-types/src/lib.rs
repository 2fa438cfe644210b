pub mod metric;
pub mod result;
pub mod severity;
pub mod vector;

pub use metric::{
    AttackComplexity, AttackVector, ImpactMetric, MetricAxis, PrivilegesRequired, Scope,
    UserInteraction, VectorError,
};
pub use result::ScoreResult;
pub use severity::Severity;
pub use vector::CvssVector;
