use super::{ScoringError, normalize};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Reference team size used as the denominator of the bus factor ratio.
pub const REFERENCE_TEAM_SIZE: u64 = 7;

/// Raw repository counts supplied by the hosting provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMetricSet {
    pub forks: u64,
    pub subscribers: u64,
    pub open_issues: u64,
    pub contributors: u64,
}

/// What to do when a repository reports zero open issues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ZeroIssuePolicy {
    /// Fail the scoring request with [`ScoringError::DegenerateInput`].
    #[default]
    Fail,

    /// Use the numerator as the ratio, treating zero open issues as maximally favorable.
    Numerator,
}

/// The three ratios derived from a [`RawMetricSet`], before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRatios {
    /// Forks per open issue
    pub ramp_up: f64,

    /// Subscribers per open issue
    pub correctness: f64,

    /// Contributors relative to [`REFERENCE_TEAM_SIZE`]
    pub bus_factor: f64,
}

impl DerivedRatios {
    /// Compute the ramp-up, correctness, and bus factor ratios.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::DegenerateInput`] naming the first undefined ratio when
    /// the open issue count is zero and `policy` is [`ZeroIssuePolicy::Fail`].
    #[expect(clippy::cast_precision_loss, reason = "repository counts are far below 2^52")]
    pub fn compute(raw: &RawMetricSet, policy: ZeroIssuePolicy) -> Result<Self, ScoringError> {
        let per_issue = |numerator: u64, metric: &'static str| -> Result<f64, ScoringError> {
            match (raw.open_issues, policy) {
                (0, ZeroIssuePolicy::Fail) => Err(ScoringError::DegenerateInput { metric }),
                (0, ZeroIssuePolicy::Numerator) => Ok(numerator as f64),
                (issues, _) => Ok(numerator as f64 / issues as f64),
            }
        };

        Ok(Self {
            ramp_up: per_issue(raw.forks, "ramp_up")?,
            correctness: per_issue(raw.subscribers, "correctness")?,
            bus_factor: raw.contributors as f64 / REFERENCE_TEAM_SIZE as f64,
        })
    }

    /// Ramp-up score in `[0, 1)`.
    #[must_use]
    pub fn ramp_up_score(&self) -> f64 {
        normalize(self.ramp_up)
    }

    /// Correctness score in `[0, 1)`.
    #[must_use]
    pub fn correctness_score(&self) -> f64 {
        normalize(self.correctness)
    }

    /// Bus factor score in `[0, 1)`.
    #[must_use]
    pub fn bus_factor_score(&self) -> f64 {
        normalize(self.bus_factor)
    }
}
