use camino::Utf8PathBuf;
use core::fmt::{Display, Formatter};

/// Public OpenSSF Scorecard API
pub const DEFAULT_SCORECARD_API_URL: &str = "https://api.securityscorecards.dev";

/// Where health reports come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthReportSource {
    /// A directory holding one `<repo>_scorecard.json` file per repository.
    Directory(Utf8PathBuf),

    /// A single report used for every package.
    File(Utf8PathBuf),

    /// The Scorecard REST API at the given base URL.
    Api(String),
}

impl Default for HealthReportSource {
    fn default() -> Self {
        Self::Api(DEFAULT_SCORECARD_API_URL.to_string())
    }
}

impl Display for HealthReportSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Directory(dir) => write!(f, "directory '{dir}'"),
            Self::File(path) => write!(f, "file '{path}'"),
            Self::Api(url) => write!(f, "API at {url}"),
        }
    }
}
