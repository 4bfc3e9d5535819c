use super::RepoSpec;
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use ohno::{IntoAppError, bail};
use std::sync::Arc;
use url::Url;

/// Where a package's data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSource {
    /// A repository hosted on GitHub.
    GitHub(RepoSpec),

    /// An npm package, including its scope if any (e.g. `@babel/core`).
    Npm(Arc<str>),
}

/// A package URL as given by the user, parsed into its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRef {
    url: Arc<str>,
    source: PackageSource,
}

impl PackageRef {
    #[must_use]
    pub const fn source(&self) -> &PackageSource {
        &self.source
    }
}

impl FromStr for PackageRef {
    type Err = ohno::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let url = Url::parse(trimmed).into_app_err_with(|| format!("'{trimmed}' is not a valid URL"))?;

        let source = match url.host_str() {
            Some("github.com" | "www.github.com") => PackageSource::GitHub(RepoSpec::parse(&url)?),
            Some("npmjs.com" | "www.npmjs.com") => PackageSource::Npm(npm_package_name(&url)?),
            _ => bail!("unsupported package URL '{trimmed}': expected a github.com repository or an npmjs.com package"),
        };

        Ok(Self {
            url: Arc::from(trimmed),
            source,
        })
    }
}

impl Display for PackageRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// `/package/<name>` or `/package/@scope/<name>`
fn npm_package_name(url: &Url) -> crate::Result<Arc<str>> {
    let segments: Vec<_> = url.path_segments().map(|s| s.filter(|segment| !segment.is_empty()).collect()).unwrap_or_default();

    let name = match segments.as_slice() {
        ["package", scope, name, ..] if scope.starts_with('@') => format!("{scope}/{name}"),
        ["package", name, ..] if !name.starts_with('@') => (*name).to_string(),
        _ => bail!("invalid npm package URL '{url}': expected /package/<name>"),
    };

    Ok(Arc::from(name))
}
