use thiserror::Error;

/// Failures of the scoring pipeline for a single request.
///
/// A missing "Maintained" or "License" check is not an error; those are
/// recovered with defaults during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// A ratio's denominator is zero.
    #[error("cannot compute the {metric} ratio: the repository has no open issues")]
    DegenerateInput {
        /// Name of the ratio that could not be computed
        metric: &'static str,
    },

    /// The health report is not a document with a `checks` array of named checks.
    #[error("malformed health report: {reason}")]
    MalformedHealthReport { reason: String },
}
