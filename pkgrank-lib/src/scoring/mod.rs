//! Normalization and aggregation of repository quality signals
//!
//! This module turns raw, heterogeneous signals about a repository into a
//! bounded composite quality score. It is pure computation: no I/O, no shared
//! state, and nothing is retained between scoring requests.
//!
//! # Implementation Model
//!
//! Scoring is a four-stage pipeline:
//!
//! - **Normalizer** ([`normalize`]): maps an unbounded non-negative ratio to `[0, 1)`
//! - **Derived ratios** ([`DerivedRatios`]): ramp-up, correctness, and bus factor
//!   ratios computed from a [`RawMetricSet`]
//! - **Scorecard extraction** ([`HealthReport::extract`]): the maintenance sub-score
//!   and the license flag pulled from a supply-chain health report
//! - **Aggregation** ([`aggregate`]): the unweighted mean of the five dimensions,
//!   packaged with the components in a [`CompositeScore`]
//!
//! The [`score`] function runs the whole pipeline for one request. The only
//! policy decision exposed to callers is [`ZeroIssuePolicy`], which controls what
//! happens when a repository reports no open issues.

mod composite;
mod dimension;
mod health_report;
mod normalize;
mod ratios;
mod scoring_error;

pub use composite::{CompositeScore, NormalizedMetricSet, aggregate, score};
pub use dimension::Dimension;
pub use health_report::{Check, HealthReport, LICENSE_CHECK, MAINTAINED_CHECK, ScorecardValues};
pub use normalize::normalize;
pub use ratios::{DerivedRatios, REFERENCE_TEAM_SIZE, RawMetricSet, ZeroIssuePolicy};
pub use scoring_error::ScoringError;
