use super::package_outcome::PackageOutcome;
use super::package_ref::{PackageRef, PackageSource};
use super::scorecard::HealthReportSource;
use super::{ProviderResult, RepoSpec};
use crate::Result;
use crate::scoring::{self, CompositeScore, ZeroIssuePolicy};
use futures_util::future::join_all;
use ohno::IntoAppError;
use std::sync::Arc;

const LOG_TARGET: &str = " collector";

/// Return early with anything other than `Found`.
macro_rules! found_or_return {
    ($expr:expr) => {
        match $expr {
            ProviderResult::Found(value) => value,
            ProviderResult::NotFound(reason) => return ProviderResult::NotFound(reason),
            ProviderResult::Error(e) => return ProviderResult::Error(e),
        }
    };
}

/// Collector for gathering package data from the different sources and scoring it
#[derive(Debug)]
pub struct Collector {
    registry_provider: super::registry::Provider,
    hosting_provider: super::hosting::Provider,
    scorecard_provider: super::scorecard::Provider,
    zero_issue_policy: ZeroIssuePolicy,
}

impl Collector {
    pub fn new(
        github_api_url: &str,
        npm_registry_url: &str,
        health_report_source: HealthReportSource,
        zero_issue_policy: ZeroIssuePolicy,
    ) -> Result<Self> {
        log::debug!(target: LOG_TARGET, "Reading health reports from {health_report_source}");

        Ok(Self {
            registry_provider: super::registry::Provider::new(npm_registry_url)?,
            hosting_provider: super::hosting::Provider::new(github_api_url)?,
            scorecard_provider: super::scorecard::Provider::new(health_report_source)?,
            zero_issue_policy,
        })
    }

    /// Score every URL, one independent pipeline per URL.
    ///
    /// Outcomes are returned in input order. A failure for one URL never affects the others.
    pub async fn collect<S: AsRef<str>>(&self, urls: &[S]) -> Vec<PackageOutcome> {
        let pipelines = urls.iter().map(|url| async move {
            let url = url.as_ref().trim();
            PackageOutcome {
                url: Arc::from(url),
                result: self.score_url(url).await,
            }
        });

        join_all(pipelines).await
    }

    async fn score_url(&self, url: &str) -> ProviderResult<CompositeScore> {
        let package = match url.parse::<PackageRef>() {
            Ok(package) => package,
            Err(e) => return ProviderResult::Error(Arc::new(e)),
        };

        let repo_spec = found_or_return!(self.resolve(&package).await);

        let (hosting_data, health_report) = tokio::join!(
            self.hosting_provider.get_hosting_data(&repo_spec),
            self.scorecard_provider.get_health_report(&repo_spec),
        );

        let raw = found_or_return!(hosting_data);

        // Without a report, maintenance and license are unknown rather than zero
        let report = found_or_return!(health_report);

        match scoring::score(&raw, &report, self.zero_issue_policy).into_app_err_with(|| format!("scoring repository '{repo_spec}'")) {
            Ok(score) => {
                log::debug!(target: LOG_TARGET, "Scored '{package}': {score:?}");
                ProviderResult::Found(score)
            }
            Err(e) => ProviderResult::Error(Arc::new(e)),
        }
    }

    async fn resolve(&self, package: &PackageRef) -> ProviderResult<RepoSpec> {
        match package.source() {
            PackageSource::GitHub(repo_spec) => ProviderResult::Found(repo_spec.clone()),
            PackageSource::Npm(name) => self.registry_provider.resolve_repository(name).await,
        }
    }
}
