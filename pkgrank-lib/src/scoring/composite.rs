use super::{DerivedRatios, Dimension, HealthReport, RawMetricSet, ScorecardValues, ScoringError, ZeroIssuePolicy};

/// The five normalized dimensions of a single scoring request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedMetricSet {
    pub ramp_up: f64,
    pub correctness: f64,
    pub bus_factor: f64,
    pub maintenance: f64,

    /// Binary license indicator, never normalized
    pub license: u8,
}

impl NormalizedMetricSet {
    #[must_use]
    pub fn new(ratios: &DerivedRatios, scorecard: &ScorecardValues) -> Self {
        Self {
            ramp_up: ratios.ramp_up_score(),
            correctness: ratios.correctness_score(),
            bus_factor: ratios.bus_factor_score(),
            maintenance: scorecard.maintenance(),
            license: scorecard.license(),
        }
    }
}

/// The composite quality score of a package, with its components retained for auditing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeScore {
    pub net_score: f64,
    pub ramp_up: f64,
    pub correctness: f64,
    pub bus_factor: f64,
    pub license: u8,
    pub maintenance: f64,
}

impl CompositeScore {
    /// Value of a dimension, or `None` if the dimension is not computed.
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::NetScore => Some(self.net_score),
            Dimension::RampUp => Some(self.ramp_up),
            Dimension::Correctness => Some(self.correctness),
            Dimension::BusFactor => Some(self.bus_factor),
            Dimension::License => Some(f64::from(self.license)),
            Dimension::ResponsiveMaintainer => Some(self.maintenance),
            Dimension::Version | Dimension::CodeReview => None,
        }
    }

    /// Whether every computed component reaches `threshold`.
    ///
    /// The net score and dimensions without a value are not considered.
    #[must_use]
    pub fn qualifies(&self, threshold: f64) -> bool {
        use strum::IntoEnumIterator;

        Dimension::iter()
            .filter(|d| d.is_component() && d.is_computed())
            .all(|d| self.get(d).is_some_and(|value| value >= threshold))
    }
}

impl From<NormalizedMetricSet> for CompositeScore {
    fn from(set: NormalizedMetricSet) -> Self {
        aggregate(set.ramp_up, set.correctness, set.bus_factor, set.license, set.maintenance)
    }
}

/// Combine the five dimensions into a [`CompositeScore`].
///
/// The net score is the unweighted arithmetic mean of the five inputs. Inputs are
/// trusted to already be in range.
#[must_use]
pub fn aggregate(ramp_up: f64, correctness: f64, bus_factor: f64, license: u8, maintenance: f64) -> CompositeScore {
    let net_score = (ramp_up + correctness + bus_factor + f64::from(license) + maintenance) / 5.0;

    CompositeScore {
        net_score,
        ramp_up,
        correctness,
        bus_factor,
        license,
        maintenance,
    }
}

/// Run the full scoring pipeline for one package.
///
/// # Errors
///
/// Returns [`ScoringError::DegenerateInput`] if the repository has no open issues and
/// `policy` is [`ZeroIssuePolicy::Fail`].
pub fn score(raw: &RawMetricSet, report: &HealthReport, policy: ZeroIssuePolicy) -> Result<CompositeScore, ScoringError> {
    let ratios = DerivedRatios::compute(raw, policy)?;
    let scorecard = report.extract();

    log::trace!("derived ratios {ratios:?}, scorecard values {scorecard:?}");

    Ok(NormalizedMetricSet::new(&ratios, &scorecard).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Check;

    const EPSILON: f64 = 1e-9;

    fn scenario_a() -> RawMetricSet {
        RawMetricSet {
            forks: 10,
            subscribers: 5,
            open_issues: 5,
            contributors: 14,
        }
    }

    fn scenario_b() -> HealthReport {
        HealthReport {
            checks: vec![
                Check {
                    name: "Maintained".to_string(),
                    score: Some(8.0),
                },
                Check {
                    name: "License".to_string(),
                    score: Some(1.0),
                },
            ],
        }
    }

    #[test]
    fn test_end_to_end_net_score() {
        let composite = score(&scenario_a(), &scenario_b(), ZeroIssuePolicy::Fail).unwrap();

        assert!((composite.ramp_up - 2.0 / 3.0).abs() < EPSILON);
        assert!((composite.correctness - 0.5).abs() < EPSILON);
        assert!((composite.bus_factor - 2.0 / 3.0).abs() < EPSILON);
        assert_eq!(composite.license, 1);
        assert!((composite.maintenance - 8.0 / 9.0).abs() < EPSILON);
        assert!((composite.net_score - 0.7444).abs() < 1e-3);
    }

    #[test]
    fn test_aggregate_is_plain_mean() {
        let composite = aggregate(0.2, 0.4, 0.6, 1, 0.8);
        assert!((composite.net_score - 0.6).abs() < EPSILON);
    }

    #[test]
    fn test_aggregate_order_of_summation_does_not_matter() {
        let values = [0.13, 0.71, 0.42, 0.99];
        let a = aggregate(values[0], values[1], values[2], 0, values[3]);
        let b = aggregate(values[3], values[2], values[1], 0, values[0]);
        let c = aggregate(values[1], values[3], values[0], 0, values[2]);

        assert!((a.net_score - b.net_score).abs() < EPSILON);
        assert!((a.net_score - c.net_score).abs() < EPSILON);
    }

    #[test]
    fn test_aggregate_retains_components() {
        let composite = aggregate(0.1, 0.2, 0.3, 0, 0.4);
        assert!((composite.ramp_up - 0.1).abs() < EPSILON);
        assert!((composite.correctness - 0.2).abs() < EPSILON);
        assert!((composite.bus_factor - 0.3).abs() < EPSILON);
        assert_eq!(composite.license, 0);
        assert!((composite.maintenance - 0.4).abs() < EPSILON);
    }

    #[test]
    fn test_aggregate_all_zero() {
        let composite = aggregate(0.0, 0.0, 0.0, 0, 0.0);
        assert!(composite.net_score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_net_score_stays_below_one() {
        let raw = RawMetricSet {
            forks: u64::from(u32::MAX),
            subscribers: u64::from(u32::MAX),
            open_issues: 1,
            contributors: u64::from(u32::MAX),
        };
        let report = HealthReport {
            checks: vec![
                Check {
                    name: "Maintained".to_string(),
                    score: Some(10.0),
                },
                Check {
                    name: "License".to_string(),
                    score: Some(10.0),
                },
            ],
        };
        let composite = score(&raw, &report, ZeroIssuePolicy::Fail).unwrap();
        assert!(composite.net_score < 1.0);
        assert!(composite.net_score > 0.9);
    }

    #[test]
    fn test_score_with_empty_report() {
        let composite = score(&scenario_a(), &HealthReport::default(), ZeroIssuePolicy::Fail).unwrap();
        assert_eq!(composite.license, 0);
        assert!(composite.maintenance.abs() < f64::EPSILON);
        let expected = (2.0 / 3.0 + 0.5 + 2.0 / 3.0) / 5.0;
        assert!((composite.net_score - expected).abs() < EPSILON);
    }

    #[test]
    fn test_score_zero_issues_fail_policy() {
        let raw = RawMetricSet {
            open_issues: 0,
            ..scenario_a()
        };
        let err = score(&raw, &scenario_b(), ZeroIssuePolicy::Fail).unwrap_err();
        assert_eq!(err, ScoringError::DegenerateInput { metric: "ramp_up" });
    }

    #[test]
    fn test_score_zero_issues_numerator_policy() {
        let raw = RawMetricSet {
            open_issues: 0,
            ..scenario_a()
        };
        let composite = score(&raw, &scenario_b(), ZeroIssuePolicy::Numerator).unwrap();
        assert!((composite.ramp_up - 10.0 / 11.0).abs() < EPSILON);
        assert!((composite.correctness - 5.0 / 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_get_uncomputed_dimensions() {
        let composite = aggregate(0.5, 0.5, 0.5, 1, 0.5);
        assert_eq!(composite.get(Dimension::Version), None);
        assert_eq!(composite.get(Dimension::CodeReview), None);
        assert_eq!(composite.get(Dimension::License), Some(1.0));
        assert_eq!(composite.get(Dimension::NetScore), Some(composite.net_score));
    }

    #[test]
    fn test_qualifies() {
        assert!(aggregate(0.5, 0.6, 0.7, 1, 0.9).qualifies(0.5));
        assert!(!aggregate(0.5, 0.6, 0.49, 1, 0.9).qualifies(0.5));
        assert!(!aggregate(0.9, 0.9, 0.9, 0, 0.9).qualifies(0.5));
        assert!(aggregate(0.0, 0.0, 0.0, 0, 0.0).qualifies(0.0));
    }

    #[test]
    fn test_from_normalized_metric_set() {
        let set = NormalizedMetricSet {
            ramp_up: 0.5,
            correctness: 0.5,
            bus_factor: 0.5,
            maintenance: 0.5,
            license: 1,
        };
        let composite = CompositeScore::from(set);
        assert!((composite.net_score - 0.6).abs() < EPSILON);
    }
}
