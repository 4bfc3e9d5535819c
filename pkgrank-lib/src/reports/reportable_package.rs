use crate::scoring::CompositeScore;
use std::sync::Arc;

/// A scored package, ready for reporting.
#[derive(Debug, Clone)]
pub struct ReportablePackage {
    pub url: Arc<str>,
    pub score: CompositeScore,
    pub qualified: bool,
}

impl ReportablePackage {
    #[must_use]
    pub fn new(url: Arc<str>, score: CompositeScore, qualification_threshold: f64) -> Self {
        Self {
            url,
            qualified: score.qualifies(qualification_threshold),
            score,
        }
    }
}
