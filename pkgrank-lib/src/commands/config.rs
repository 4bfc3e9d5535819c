use crate::Result;
use crate::scoring::ZeroIssuePolicy;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File looked up in the working directory when no configuration path is given
pub const DEFAULT_CONFIG_FILE: &str = "pkgrank.toml";

const MAX_DECIMAL_PLACES: usize = 6;

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How to score repositories without open issues
    #[serde(default)]
    pub zero_issue_policy: ZeroIssuePolicy,

    /// Precision of the decimal strings in JSON records
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,

    /// Score every computed dimension must reach for a package to qualify (0..1)
    #[serde(default = "default_qualification_threshold")]
    pub qualification_threshold: f64,

    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    #[serde(default = "default_npm_registry_url")]
    pub npm_registry_url: String,

    #[serde(default = "default_scorecard_api_url")]
    pub scorecard_api_url: String,
}

const fn default_decimal_places() -> usize {
    1
}

const fn default_qualification_threshold() -> f64 {
    0.5
}

fn default_github_api_url() -> String {
    crate::facts::DEFAULT_GITHUB_API_URL.to_string()
}

fn default_npm_registry_url() -> String {
    crate::facts::DEFAULT_NPM_REGISTRY_URL.to_string()
}

fn default_scorecard_api_url() -> String {
    crate::facts::DEFAULT_SCORECARD_API_URL.to_string()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds invalid values
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading pkgrank configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("No configuration file at '{path}', using defaults");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading pkgrank configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::debug!("Loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value is out of range or a URL does not parse
    fn validate(&self) -> Result<()> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(app_err!(
                "decimal_places must be between 0 and {MAX_DECIMAL_PLACES}, got {}",
                self.decimal_places
            ));
        }

        if !(0.0..=1.0).contains(&self.qualification_threshold) {
            return Err(app_err!(
                "qualification_threshold must be between 0 and 1, got {}",
                self.qualification_threshold
            ));
        }

        for (name, value) in [
            ("github_api_url", &self.github_api_url),
            ("npm_registry_url", &self.npm_registry_url),
            ("scorecard_api_url", &self.scorecard_api_url),
        ] {
            if let Err(e) = Url::parse(value) {
                return Err(app_err!("{name} is not a valid URL: '{value}' ({e})"));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
