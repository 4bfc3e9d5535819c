use crate::Result;
use core::fmt::{Display, Formatter};
use ohno::bail;
use std::sync::Arc;
use url::Url;

const GITHUB_HOST: &str = "github.com";

/// A source repository identified by host, owner, and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    host: Arc<str>,
    owner: Arc<str>,
    repo: Arc<str>,
}

impl RepoSpec {
    pub fn parse(url: &Url) -> Result<Self> {
        let path_segments: Vec<_> = url.path_segments().map(Iterator::collect).unwrap_or_default();

        if path_segments.len() < 2 {
            bail!("invalid repository URL format: {url}");
        }

        if path_segments[0].is_empty() || path_segments[1].is_empty() {
            bail!("invalid repository URL: empty owner or repo name: {url}");
        }

        let host = url.host_str().unwrap_or_default();
        let host = host.strip_prefix("www.").unwrap_or(host);
        let owner = path_segments[0];
        let repo = path_segments[1].trim_end_matches(".git");

        if repo.is_empty() {
            bail!("invalid repository URL: empty repo name: {url}");
        }

        Ok(Self {
            host: Arc::from(host),
            owner: Arc::from(owner),
            repo: Arc::from(repo),
        })
    }

    /// Whether the repository lives on GitHub, the only host with activity data.
    #[must_use]
    pub fn is_github(&self) -> bool {
        &*self.host == GITHUB_HOST
    }

    /// File holding this repository's health report inside a report directory.
    #[must_use]
    pub fn health_report_file_name(&self) -> String {
        format!("{}_scorecard.json", self.repo)
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
