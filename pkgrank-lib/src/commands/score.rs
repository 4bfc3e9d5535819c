use super::common::{ColorMode, LogLevel, ReportOptions, init_logging, report};
use super::config::Config;
use super::Host;
use crate::Result;
use crate::facts::{Collector, HealthReportSource};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser};

#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// GitHub repository or npm package URLs to score
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,

    #[command(flatten)]
    pub scorecard: ScorecardArgs,

    /// Path to configuration file (default is `pkgrank.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,

    /// Output package scores to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Output package scores to the console as a table
    #[arg(long, help_heading = "Report Output")]
    pub console: bool,

    /// Exit with status code 1 if any package fails to score or does not qualify
    #[arg(long)]
    pub error_if_disqualified: bool,
}

/// Where repository health reports come from; the Scorecard API is used when neither is given
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct ScorecardArgs {
    /// Directory holding `<repo>_scorecard.json` health reports
    #[arg(long, value_name = "DIR")]
    pub scorecard_dir: Option<Utf8PathBuf>,

    /// Single health report file used for every package
    #[arg(long, value_name = "PATH")]
    pub scorecard_file: Option<Utf8PathBuf>,
}

impl ScorecardArgs {
    fn source(&self, scorecard_api_url: &str) -> HealthReportSource {
        if let Some(dir) = &self.scorecard_dir {
            HealthReportSource::Directory(dir.clone())
        } else if let Some(path) = &self.scorecard_file {
            HealthReportSource::File(path.clone())
        } else {
            HealthReportSource::Api(scorecard_api_url.to_string())
        }
    }
}

pub async fn score_packages<H: Host>(host: &mut H, args: &ScoreArgs) -> Result<()> {
    init_logging(args.log_level);

    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;

    let collector = Collector::new(
        &config.github_api_url,
        &config.npm_registry_url,
        args.scorecard.source(&config.scorecard_api_url),
        config.zero_issue_policy,
    )?;

    let outcomes = collector.collect(&args.urls).await;

    let options = ReportOptions {
        color: args.color,
        json: args.json.clone(),
        console: args.console,
        error_if_disqualified: args.error_if_disqualified,
    };

    report(host, &config, &options, outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorecard_source_defaults_to_api() {
        let args = ScorecardArgs::default();
        assert_eq!(
            args.source("https://scorecard.example"),
            HealthReportSource::Api("https://scorecard.example".to_string())
        );
    }

    #[test]
    fn test_scorecard_source_directory() {
        let args = ScorecardArgs {
            scorecard_dir: Some(Utf8PathBuf::from("reports")),
            scorecard_file: None,
        };
        assert_eq!(args.source("unused"), HealthReportSource::Directory(Utf8PathBuf::from("reports")));
    }

    #[test]
    fn test_scorecard_source_file() {
        let args = ScorecardArgs {
            scorecard_dir: None,
            scorecard_file: Some(Utf8PathBuf::from("report.json")),
        };
        assert_eq!(args.source("unused"), HealthReportSource::File(Utf8PathBuf::from("report.json")));
    }
}
