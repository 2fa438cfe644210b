// ---------------------------------------------------------------------------
// Base score engine
// ---------------------------------------------------------------------------
//
// Implements the CVSS v3.1 base score equations: the impact sub-score with
// its scope-dependent branch, the multiplicative exploitability sub-score,
// and the mandated round-up-to-tenths rule. Pure functions over immutable
// inputs; safe to call from any number of threads.

use cvsskit_types::{CvssVector, Scope, ScoreResult, Severity};

use crate::table;

/// Round up to the next tenth: 4.01 becomes 4.1, 4.0 stays 4.0.
///
/// Uses the integer-scaling algorithm from the CVSS v3.1 specification's
/// reference pseudocode rather than `ceil(x * 10) / 10` directly, so that
/// products carrying float noise a hair above a tenth boundary (e.g.
/// 4.0000000001) do not spuriously round to the next band.
fn round_up(value: f64) -> f64 {
    let scaled = (value * 100_000.0).round();
    if scaled % 10_000.0 == 0.0 {
        scaled / 100_000.0
    } else {
        ((scaled / 10_000.0).floor() + 1.0) / 10.0
    }
}

/// Impact sub-score, including the scope branch.
///
/// ISCBase aggregates the three impact weights as
/// 1 - (1-c)(1-i)(1-a); the Changed branch then applies the 15th-power
/// penalty term with the exact constants from the specification.
fn impact_subscore(vector: &CvssVector) -> f64 {
    let c = table::impact_weight(vector.confidentiality);
    let i = table::impact_weight(vector.integrity);
    let a = table::impact_weight(vector.availability);

    let isc_base = 1.0 - (1.0 - c) * (1.0 - i) * (1.0 - a);

    match vector.scope {
        Scope::Unchanged => 6.42 * isc_base,
        Scope::Changed => 7.52 * (isc_base - 0.029) - 3.25 * (isc_base - 0.02).powi(15),
    }
}

/// Exploitability sub-score: 8.22 · av · ac · pr · ui.
fn exploitability_subscore(vector: &CvssVector) -> f64 {
    8.22 * table::attack_vector_weight(vector.attack_vector)
        * table::attack_complexity_weight(vector.attack_complexity)
        * table::privileges_required_weight(vector.privileges_required)
        * table::user_interaction_weight(vector.user_interaction)
}

/// Score one vector.
///
/// Total over a typed `CvssVector` — malformed raw input is rejected
/// earlier, in `CvssVector::from_codes`, so every call here yields a
/// result. No side effects, no logging.
pub fn score(vector: &CvssVector) -> ScoreResult {
    let impact = impact_subscore(vector);
    let exploitability = exploitability_subscore(vector);

    // Non-positive impact means no exploitable harm regardless of
    // exploitability: the score is an exact zero, not a rounded one.
    let base_score = if impact <= 0.0 {
        0.0
    } else {
        match vector.scope {
            Scope::Unchanged => round_up((impact + exploitability).min(10.0)),
            Scope::Changed => round_up((1.08 * (impact + exploitability)).min(10.0)),
        }
    };

    ScoreResult {
        base_score,
        severity: Severity::from_score(base_score),
        vector_string: vector.vector_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvsskit_types::{
        AttackComplexity, AttackVector, ImpactMetric, PrivilegesRequired, UserInteraction,
    };

    const ATTACK_VECTORS: [AttackVector; 4] = [
        AttackVector::Network,
        AttackVector::Adjacent,
        AttackVector::Local,
        AttackVector::Physical,
    ];
    const COMPLEXITIES: [AttackComplexity; 2] = [AttackComplexity::Low, AttackComplexity::High];
    const PRIVILEGES: [PrivilegesRequired; 3] = [
        PrivilegesRequired::None,
        PrivilegesRequired::Low,
        PrivilegesRequired::High,
    ];
    const INTERACTIONS: [UserInteraction; 2] = [UserInteraction::None, UserInteraction::Required];
    const SCOPES: [Scope; 2] = [Scope::Unchanged, Scope::Changed];
    const IMPACTS: [ImpactMetric; 3] = [ImpactMetric::None, ImpactMetric::Low, ImpactMetric::High];

    fn vector(
        av: AttackVector,
        ac: AttackComplexity,
        pr: PrivilegesRequired,
        ui: UserInteraction,
        s: Scope,
        c: ImpactMetric,
        i: ImpactMetric,
        a: ImpactMetric,
    ) -> CvssVector {
        CvssVector {
            attack_vector: av,
            attack_complexity: ac,
            privileges_required: pr,
            user_interaction: ui,
            scope: s,
            confidentiality: c,
            integrity: i,
            availability: a,
        }
    }

    fn all_vectors() -> Vec<CvssVector> {
        let mut out = Vec::new();
        for av in ATTACK_VECTORS {
            for ac in COMPLEXITIES {
                for pr in PRIVILEGES {
                    for ui in INTERACTIONS {
                        for s in SCOPES {
                            for c in IMPACTS {
                                for i in IMPACTS {
                                    for a in IMPACTS {
                                        out.push(vector(av, ac, pr, ui, s, c, i, a));
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        out
    }

    #[test]
    fn reference_vector_scores_9_8_critical() {
        // AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H:
        // ISCBase = 1 - (1-0.56)^3 = 0.914816, impact ~= 5.8731,
        // exploitability ~= 3.8872, sum ~= 9.7603 -> 9.8
        let result = score(&vector(
            AttackVector::Network,
            AttackComplexity::Low,
            PrivilegesRequired::None,
            UserInteraction::None,
            Scope::Unchanged,
            ImpactMetric::High,
            ImpactMetric::High,
            ImpactMetric::High,
        ));
        assert_eq!(result.base_score, 9.8);
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(
            result.vector_string,
            "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H"
        );
    }

    #[test]
    fn changed_scope_saturates_at_10() {
        // Same metrics with S:C: 1.08 * (impact + exploitability) exceeds
        // 10 and must clamp to exactly 10.0 before rounding.
        let result = score(&vector(
            AttackVector::Network,
            AttackComplexity::Low,
            PrivilegesRequired::None,
            UserInteraction::None,
            Scope::Changed,
            ImpactMetric::High,
            ImpactMetric::High,
            ImpactMetric::High,
        ));
        assert_eq!(result.base_score, 10.0);
        assert_eq!(result.severity, Severity::Critical);
    }

    #[test]
    fn scope_branch_changes_the_score() {
        // High ISCBase makes the Changed formula diverge from Unchanged.
        let unchanged = score(&vector(
            AttackVector::Network,
            AttackComplexity::Low,
            PrivilegesRequired::None,
            UserInteraction::None,
            Scope::Unchanged,
            ImpactMetric::High,
            ImpactMetric::High,
            ImpactMetric::High,
        ));
        let changed = score(&vector(
            AttackVector::Network,
            AttackComplexity::Low,
            PrivilegesRequired::None,
            UserInteraction::None,
            Scope::Changed,
            ImpactMetric::High,
            ImpactMetric::High,
            ImpactMetric::High,
        ));
        assert_ne!(unchanged.base_score, changed.base_score);
    }

    #[test]
    fn zero_impact_is_exact_zero_regardless_of_exploitability() {
        // Most exploitable metrics possible, but C/I/A all None.
        let result = score(&vector(
            AttackVector::Network,
            AttackComplexity::Low,
            PrivilegesRequired::None,
            UserInteraction::None,
            Scope::Unchanged,
            ImpactMetric::None,
            ImpactMetric::None,
            ImpactMetric::None,
        ));
        assert_eq!(result.base_score, 0.0);
        assert_eq!(result.severity, Severity::None);

        // Changed scope drives the impact sub-score slightly negative for
        // an all-None vector; the zero short-circuit must still apply.
        let changed = score(&vector(
            AttackVector::Network,
            AttackComplexity::Low,
            PrivilegesRequired::None,
            UserInteraction::None,
            Scope::Changed,
            ImpactMetric::None,
            ImpactMetric::None,
            ImpactMetric::None,
        ));
        assert_eq!(changed.base_score, 0.0);
        assert_eq!(changed.severity, Severity::None);
    }

    #[test]
    fn worked_low_and_medium_examples() {
        // AV:L/AC:H/PR:L/UI:R/S:U/C:L/I:L/A:N:
        // ISCBase = 1 - 0.78*0.78 = 0.3916, impact ~= 2.5141,
        // exploitability ~= 0.7647, sum ~= 3.2787 -> 3.3
        let low = score(&vector(
            AttackVector::Local,
            AttackComplexity::High,
            PrivilegesRequired::Low,
            UserInteraction::Required,
            Scope::Unchanged,
            ImpactMetric::Low,
            ImpactMetric::Low,
            ImpactMetric::None,
        ));
        assert_eq!(low.base_score, 3.3);
        assert_eq!(low.severity, Severity::Low);

        // AV:N/AC:L/PR:L/UI:N/S:U/C:L/I:L/A:L -> 6.3
        let medium = score(&vector(
            AttackVector::Network,
            AttackComplexity::Low,
            PrivilegesRequired::Low,
            UserInteraction::None,
            Scope::Unchanged,
            ImpactMetric::Low,
            ImpactMetric::Low,
            ImpactMetric::Low,
        ));
        assert_eq!(medium.base_score, 6.3);
        assert_eq!(medium.severity, Severity::Medium);
    }

    #[test]
    fn worked_physical_example() {
        // AV:P/AC:H/PR:H/UI:R/S:U/C:L/I:N/A:N -> 1.6
        let result = score(&vector(
            AttackVector::Physical,
            AttackComplexity::High,
            PrivilegesRequired::High,
            UserInteraction::Required,
            Scope::Unchanged,
            ImpactMetric::Low,
            ImpactMetric::None,
            ImpactMetric::None,
        ));
        assert_eq!(result.base_score, 1.6);
        assert_eq!(result.severity, Severity::Low);
    }

    #[test]
    fn impact_axes_are_monotonic() {
        // Raising any one impact axis N -> L -> H never lowers the score.
        for axis in 0..3 {
            let mut previous = -1.0;
            for level in IMPACTS {
                let (c, i, a) = match axis {
                    0 => (level, ImpactMetric::Low, ImpactMetric::Low),
                    1 => (ImpactMetric::Low, level, ImpactMetric::Low),
                    _ => (ImpactMetric::Low, ImpactMetric::Low, level),
                };
                let result = score(&vector(
                    AttackVector::Network,
                    AttackComplexity::Low,
                    PrivilegesRequired::None,
                    UserInteraction::None,
                    Scope::Unchanged,
                    c,
                    i,
                    a,
                ));
                assert!(
                    result.base_score >= previous,
                    "axis {axis}: {level:?} scored {} after {previous}",
                    result.base_score
                );
                previous = result.base_score;
            }
        }
    }

    #[test]
    fn attack_vector_exploitability_is_monotonic() {
        // P -> L -> A -> N never decreases exploitability.
        let chain = [
            AttackVector::Physical,
            AttackVector::Local,
            AttackVector::Adjacent,
            AttackVector::Network,
        ];
        let mut previous = -1.0;
        for av in chain {
            let e = exploitability_subscore(&vector(
                av,
                AttackComplexity::Low,
                PrivilegesRequired::Low,
                UserInteraction::Required,
                Scope::Unchanged,
                ImpactMetric::Low,
                ImpactMetric::Low,
                ImpactMetric::Low,
            ));
            assert!(e >= previous, "{av:?} gave {e} after {previous}");
            previous = e;
        }
    }

    #[test]
    fn round_up_goes_to_the_next_tenth() {
        assert_eq!(round_up(4.01), 4.1);
        assert_eq!(round_up(4.0), 4.0);
        assert_eq!(round_up(0.05), 0.1);
        assert_eq!(round_up(9.96), 10.0);
        assert_eq!(round_up(10.0), 10.0);
    }

    #[test]
    fn round_up_tolerates_float_noise() {
        // A hair above a tenth boundary from accumulated float error must
        // not bump the score a full tenth.
        assert_eq!(round_up(4.000_000_000_1), 4.0);
        assert_eq!(round_up(6.999_999_999_9), 7.0);
        // A genuine overshoot still rounds up.
        assert_eq!(round_up(4.000_1), 4.1);
    }

    #[test]
    fn round_up_idempotent_on_tenths() {
        for tenths in 0..=100u32 {
            let value = f64::from(tenths) / 10.0;
            assert_eq!(round_up(value), round_up(round_up(value)));
        }
    }

    #[test]
    fn every_vector_scores_in_range_with_one_decimal() {
        for v in all_vectors() {
            let result = score(&v);
            assert!(
                (0.0..=10.0).contains(&result.base_score),
                "{}: score {} out of range",
                result.vector_string,
                result.base_score
            );
            let tenths = result.base_score * 10.0;
            assert!(
                (tenths - tenths.round()).abs() < 1e-9,
                "{}: score {} has more than one decimal",
                result.vector_string,
                result.base_score
            );
            assert_eq!(result.severity, Severity::from_score(result.base_score));
        }
    }

    #[test]
    fn zero_score_exactly_when_all_impacts_are_none() {
        for v in all_vectors() {
            let result = score(&v);
            let no_impact = v.confidentiality == ImpactMetric::None
                && v.integrity == ImpactMetric::None
                && v.availability == ImpactMetric::None;
            assert_eq!(
                result.base_score == 0.0,
                no_impact,
                "{} scored {}",
                result.vector_string,
                result.base_score
            );
        }
    }
}
