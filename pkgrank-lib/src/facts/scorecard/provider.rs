use super::HealthReportSource;
use crate::Result;
use crate::facts::api_client::{Client, unwrap_api_result};
use crate::facts::{ProviderResult, RepoSpec};
use crate::scoring::HealthReport;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{EnrichableExt, IntoAppError};
use std::io;

const LOG_TARGET: &str = " scorecard";

#[derive(Debug, Clone)]
enum Backend {
    Directory(Utf8PathBuf),
    File(Utf8PathBuf),
    Api(Client),
}

/// Supplies repository health reports from an explicit [`HealthReportSource`]
#[derive(Debug, Clone)]
pub struct Provider {
    backend: Backend,
}

impl Provider {
    pub fn new(source: HealthReportSource) -> Result<Self> {
        let backend = match source {
            HealthReportSource::Directory(dir) => Backend::Directory(dir),
            HealthReportSource::File(path) => Backend::File(path),
            HealthReportSource::Api(base_url) => Backend::Api(Client::new(&base_url)?),
        };

        Ok(Self { backend })
    }

    pub async fn get_health_report(&self, repo_spec: &RepoSpec) -> ProviderResult<HealthReport> {
        let result = match &self.backend {
            Backend::Directory(dir) => read_report(&dir.join(repo_spec.health_report_file_name())).await,
            Backend::File(path) => read_report(path).await,
            Backend::Api(client) => fetch_report(client, repo_spec).await,
        };

        ProviderResult::flatten(result)
    }
}

async fn read_report(path: &Utf8Path) -> Result<ProviderResult<HealthReport>> {
    log::debug!(target: LOG_TARGET, "Reading health report '{path}'");

    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(ProviderResult::NotFound(format!("no health report at '{path}'").into()));
        }
        Err(e) => return Err(e).into_app_err_with(|| format!("reading health report '{path}'")),
    };

    let report = HealthReport::parse(&text).into_app_err_with(|| format!("parsing health report '{path}'"))?;
    Ok(ProviderResult::Found(report))
}

async fn fetch_report(client: &Client, repo_spec: &RepoSpec) -> Result<ProviderResult<HealthReport>> {
    log::info!(target: LOG_TARGET, "Querying the Scorecard API for repository '{repo_spec}'");

    let url = client.url(["projects", repo_spec.host(), repo_spec.owner(), repo_spec.repo()]);
    let resp = unwrap_api_result!(
        client.api_call(url).await,
        repo_spec,
        "health report",
        format!("no published health report for '{repo_spec}'")
    );

    let text = resp
        .text()
        .await
        .into_app_err_with(|| format!("reading health report for '{repo_spec}'"))?;

    let report = HealthReport::parse(&text).into_app_err_with(|| format!("parsing health report for '{repo_spec}'"))?;
    Ok(ProviderResult::Found(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use url::Url;

    fn spec() -> RepoSpec {
        RepoSpec::parse(&Url::parse("https://github.com/owner/widget").unwrap()).unwrap()
    }

    fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        (tmp, path)
    }

    #[tokio::test]
    async fn test_directory_source_reads_repo_file() {
        let (_tmp, dir) = temp_dir();
        fs::write(
            dir.join("widget_scorecard.json"),
            r#"{"checks": [{"name": "Maintained", "score": 8}, {"name": "License", "score": 10}]}"#,
        )
        .unwrap();

        let provider = Provider::new(HealthReportSource::Directory(dir)).unwrap();
        let report = provider.get_health_report(&spec()).await;

        let values = report.as_ref().unwrap().extract();
        assert!(values.license_present);
        assert!((values.maintenance_raw - 8.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_directory_source_missing_file_is_not_found() {
        let (_tmp, dir) = temp_dir();
        let provider = Provider::new(HealthReportSource::Directory(dir)).unwrap();

        match provider.get_health_report(&spec()).await {
            ProviderResult::NotFound(reason) => assert!(reason.contains("widget_scorecard.json")),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_file_source_malformed_is_error() {
        let (_tmp, dir) = temp_dir();
        let path = dir.join("report.json");
        fs::write(&path, r#"{"checks": "nope"}"#).unwrap();

        let provider = Provider::new(HealthReportSource::File(path)).unwrap();
        match provider.get_health_report(&spec()).await {
            ProviderResult::Error(_) => {}
            other => panic!("Expected Error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_file_source_ignores_repository() {
        let (_tmp, dir) = temp_dir();
        let path = dir.join("shared.json");
        fs::write(&path, r#"{"checks": []}"#).unwrap();

        let provider = Provider::new(HealthReportSource::File(path)).unwrap();
        let report = provider.get_health_report(&spec()).await;
        assert_eq!(report.as_ref(), Some(&HealthReport::default()));
    }
}
