use super::ProviderResult;
use crate::scoring::CompositeScore;
use std::sync::Arc;

/// The scoring result for one input URL.
#[derive(Debug, Clone)]
pub struct PackageOutcome {
    /// The URL exactly as it was supplied, minus surrounding whitespace
    pub url: Arc<str>,
    pub result: ProviderResult<CompositeScore>,
}
