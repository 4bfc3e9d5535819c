use super::{ScoringError, normalize};
use serde::Deserialize;

/// Name of the health report check carrying the maintenance sub-score.
pub const MAINTAINED_CHECK: &str = "Maintained";

/// Name of the health report check whose presence signals a license.
pub const LICENSE_CHECK: &str = "License";

/// A supply-chain health report, as produced by an `OpenSSF` Scorecard scan.
///
/// Only the fields needed for scoring are modeled; everything else in the
/// document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HealthReport {
    pub checks: Vec<Check>,
}

/// A single named check within a [`HealthReport`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Check {
    pub name: String,

    #[serde(default)]
    pub score: Option<f64>,
}

/// Values extracted from a [`HealthReport`] for scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScorecardValues {
    /// Raw score of the "Maintained" check, or 0 when unavailable
    pub maintenance_raw: f64,

    /// Whether a scored "License" check is present
    pub license_present: bool,
}

impl HealthReport {
    /// Parse a health report from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::MalformedHealthReport`] if the text is not JSON, has no
    /// `checks` array, or any check lacks a string `name` or has a non-numeric `score`.
    pub fn parse(text: &str) -> Result<Self, ScoringError> {
        serde_json::from_str(text).map_err(|e| ScoringError::MalformedHealthReport { reason: e.to_string() })
    }

    /// Extract the maintenance sub-score and the license flag in one pass over the checks.
    ///
    /// Scorecard reports `-1` for checks it could not evaluate. A negative or
    /// non-finite "Maintained" score is treated as missing. A "License" check
    /// counts as present with any score.
    #[must_use]
    pub fn extract(&self) -> ScorecardValues {
        let mut values = ScorecardValues::default();

        for check in &self.checks {
            match check.name.as_str() {
                MAINTAINED_CHECK => {
                    values.maintenance_raw = check.score.filter(|s| s.is_finite() && *s >= 0.0).unwrap_or(0.0);
                }
                LICENSE_CHECK => {
                    values.license_present |= check.score.is_some();
                }
                _ => {}
            }
        }

        values
    }
}

impl ScorecardValues {
    /// Maintenance score in `[0, 1)`.
    ///
    /// A zero raw score stays exactly zero and is not passed through [`normalize`].
    #[must_use]
    pub fn maintenance(&self) -> f64 {
        if self.maintenance_raw == 0.0 {
            0.0
        } else {
            normalize(self.maintenance_raw)
        }
    }

    /// License indicator, exactly 0 or 1.
    #[must_use]
    pub fn license(&self) -> u8 {
        u8::from(self.license_present)
    }
}
