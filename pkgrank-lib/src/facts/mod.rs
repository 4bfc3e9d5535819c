//! Data collection for package scoring
//!
//! This module gathers the inputs of the scoring engine from external sources:
//! - **npm registry**: resolves npm packages to their GitHub repositories
//! - **GitHub**: fork, subscriber, open issue and contributor counts
//! - **OpenSSF Scorecard**: the repository health report, from the API or local files
//!
//! Each source answers with a [`ProviderResult`] which can be `Found`, `NotFound`,
//! or `Error`, so one unavailable source or package never takes down a whole batch.
//!
//! The [`Collector`] runs one pipeline per package URL. npm packages are resolved first,
//! then hosting data and the health report are fetched concurrently and scored.

mod api_client;
mod collector;
mod hosting;
mod package_outcome;
mod package_ref;
mod provider_result;
mod registry;
mod repo_spec;
mod scorecard;

pub use collector::Collector;
pub use hosting::{DEFAULT_GITHUB_API_URL, Provider as HostingProvider};
pub use package_outcome::PackageOutcome;
pub use package_ref::{PackageRef, PackageSource};
pub use provider_result::ProviderResult;
pub use registry::{DEFAULT_NPM_REGISTRY_URL, Provider as RegistryProvider};
pub use repo_spec::RepoSpec;
pub use scorecard::{DEFAULT_SCORECARD_API_URL, HealthReportSource, Provider as ScorecardProvider};
