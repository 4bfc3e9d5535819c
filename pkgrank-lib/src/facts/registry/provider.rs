use crate::Result;
use crate::facts::api_client::{Client, unwrap_api_result};
use crate::facts::{ProviderResult, RepoSpec};
use ohno::{EnrichableExt, IntoAppError};
use serde::Deserialize;
use url::Url;

const LOG_TARGET: &str = "  registry";

/// Public npm registry
pub const DEFAULT_NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// The subset of an npm packument we need
#[derive(Debug, Deserialize)]
struct PackageDocument {
    #[serde(default)]
    repository: Option<RepositoryField>,
}

/// npm accepts both `"repository": "url"` and `"repository": { "type": "git", "url": "url" }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RepositoryField {
    Url(String),
    Object {
        #[serde(default)]
        url: Option<String>,
    },
}

impl RepositoryField {
    fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Object { url } => url.as_deref(),
        }
    }
}

/// Resolves npm packages to their source repositories
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

    /// Find the GitHub repository an npm package is developed in.
    pub async fn resolve_repository(&self, name: &str) -> ProviderResult<RepoSpec> {
        log::info!(target: LOG_TARGET, "Querying the npm registry for package '{name}'");
        ProviderResult::flatten(self.fetch(name).await)
    }

    async fn fetch(&self, name: &str) -> Result<ProviderResult<RepoSpec>> {
        let resp = unwrap_api_result!(
            self.client.api_call(self.client.url([name])).await,
            name,
            "package metadata",
            format!("package '{name}' not found in the npm registry")
        );

        let document = resp
            .json::<PackageDocument>()
            .await
            .into_app_err_with(|| format!("parsing npm metadata for package '{name}'"))?;

        let Some(raw_url) = document.repository.as_ref().and_then(RepositoryField::url) else {
            return Ok(ProviderResult::NotFound(format!("package '{name}' does not declare a repository").into()));
        };

        log::debug!(target: LOG_TARGET, "Package '{name}' declares repository '{raw_url}'");

        let Some(url) = normalize_repository_url(raw_url) else {
            return Ok(ProviderResult::NotFound(
                format!("package '{name}' declares an unrecognized repository '{raw_url}'").into(),
            ));
        };

        let repo_spec = RepoSpec::parse(&url)?;
        if !repo_spec.is_github() {
            return Ok(ProviderResult::NotFound(
                format!("repository of package '{name}' is not hosted on GitHub: {url}").into(),
            ));
        }

        Ok(ProviderResult::Found(repo_spec))
    }
}

/// Turn the many shapes of npm repository references into a browsable https URL.
fn normalize_repository_url(raw: &str) -> Option<Url> {
    let raw = raw.trim();

    let candidate = if let Some(rest) = raw.strip_prefix("github:") {
        format!("https://github.com/{rest}")
    } else if let Some(rest) = raw.strip_prefix("git@github.com:") {
        format!("https://github.com/{rest}")
    } else if let Some(rest) = raw.strip_prefix("git+ssh://git@").or_else(|| raw.strip_prefix("ssh://git@")) {
        format!("https://{rest}")
    } else if let Some(rest) = raw.strip_prefix("git+") {
        rest.to_string()
    } else if let Some(rest) = raw.strip_prefix("git://") {
        format!("https://{rest}")
    } else if !raw.contains(':') && raw.split('/').count() == 2 {
        // owner/repo shorthand
        format!("https://github.com/{raw}")
    } else {
        raw.to_string()
    };

    let candidate = match candidate.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => candidate,
    };

    Url::parse(&candidate).ok().filter(|url| url.scheme() == "https")
}
