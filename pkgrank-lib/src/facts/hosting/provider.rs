use crate::Result;
use crate::facts::api_client::{Client, unwrap_api_result};
use crate::facts::{ProviderResult, RepoSpec};
use crate::scoring::RawMetricSet;
use ohno::{EnrichableExt, IntoAppError};
use reqwest::StatusCode;
use reqwest::header::LINK;
use serde::Deserialize;
use url::Url;

const LOG_TARGET: &str = "   hosting";

/// Public GitHub REST API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// The subset of GitHub's repository document we need
#[derive(Debug, Deserialize)]
#[expect(clippy::struct_field_names, reason = "field names match GitHub API exactly")]
struct Repository {
    #[serde(default)]
    forks_count: Option<u64>,
    #[serde(default)]
    subscribers_count: Option<u64>,
    #[serde(default)]
    open_issues_count: Option<u64>,
}

/// Fetches repository activity counts from the GitHub REST API
#[derive(Debug, Clone)]
pub struct Provider {
    client: Client,
}

impl Provider {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(base_url)?,
        })
    }

    /// Fetch the raw counts that feed the scoring engine.
    pub async fn get_hosting_data(&self, repo_spec: &RepoSpec) -> ProviderResult<RawMetricSet> {
        if !repo_spec.is_github() {
            log::debug!(target: LOG_TARGET, "Unsupported host '{}' for '{repo_spec}'", repo_spec.host());
            return ProviderResult::NotFound(format!("unsupported hosting provider: {}", repo_spec.host()).into());
        }

        log::info!(target: LOG_TARGET, "Querying GitHub for repository '{repo_spec}'");

        ProviderResult::flatten(self.fetch(repo_spec).await)
    }

    async fn fetch(&self, repo_spec: &RepoSpec) -> Result<ProviderResult<RawMetricSet>> {
        let (repository, contributors) = tokio::join!(self.fetch_repository(repo_spec), self.fetch_contributor_count(repo_spec));

        let repository = match repository? {
            ProviderResult::Found(repository) => repository,
            ProviderResult::NotFound(reason) => return Ok(ProviderResult::NotFound(reason)),
            ProviderResult::Error(e) => return Ok(ProviderResult::Error(e)),
        };

        let contributors = match contributors? {
            ProviderResult::Found(count) => count,
            ProviderResult::NotFound(reason) => return Ok(ProviderResult::NotFound(reason)),
            ProviderResult::Error(e) => return Ok(ProviderResult::Error(e)),
        };

        let raw = RawMetricSet {
            forks: repository.forks_count.unwrap_or_default(),
            subscribers: repository.subscribers_count.unwrap_or_default(),
            open_issues: repository.open_issues_count.unwrap_or_default(),
            contributors,
        };

        log::debug!(target: LOG_TARGET, "Hosting data for '{repo_spec}': {raw:?}");
        Ok(ProviderResult::Found(raw))
    }

    async fn fetch_repository(&self, repo_spec: &RepoSpec) -> Result<ProviderResult<Repository>> {
        let url = self.client.url(["repos", repo_spec.owner(), repo_spec.repo()]);
        let resp = unwrap_api_result!(
            self.client.api_call(url).await,
            repo_spec,
            "repository information",
            format!("repository '{repo_spec}' not found on GitHub")
        );

        let repository = resp
            .json::<Repository>()
            .await
            .into_app_err_with(|| format!("parsing repository information for '{repo_spec}'"))?;

        Ok(ProviderResult::Found(repository))
    }

    async fn fetch_contributor_count(&self, repo_spec: &RepoSpec) -> Result<ProviderResult<u64>> {
        let mut url = self.client.url(["repos", repo_spec.owner(), repo_spec.repo(), "contributors"]);
        let _ = url.query_pairs_mut().append_pair("per_page", "1").append_pair("anon", "true");
        let resp = unwrap_api_result!(
            self.client.api_call(url).await,
            repo_spec,
            "contributors",
            format!("repository '{repo_spec}' not found on GitHub")
        );

        // An empty repository has no contributors list at all
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(ProviderResult::Found(0));
        }

        // With one contributor per page, the last page number is the contributor count
        if let Some(last_page) = resp
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(last_page_from_link)
        {
            return Ok(ProviderResult::Found(last_page));
        }

        let contributors = resp
            .json::<Vec<serde_json::Value>>()
            .await
            .into_app_err_with(|| format!("parsing contributors for '{repo_spec}'"))?;

        Ok(ProviderResult::Found(contributors.len() as u64))
    }
}

/// Extract the `page` parameter of the `rel="last"` entry of a `Link` header.
fn last_page_from_link(link: &str) -> Option<u64> {
    link.split(',').find_map(|entry| {
        let (target, params) = entry.split_once(';')?;
        if !params.split(';').any(|param| param.trim() == r#"rel="last""#) {
            return None;
        }

        let target = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        let url = Url::parse(target).ok()?;
        url.query_pairs().find(|(key, _)| key == "page").and_then(|(_, value)| value.parse().ok())
    })
}
