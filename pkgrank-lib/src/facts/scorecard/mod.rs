mod health_report_source;
mod provider;

pub use health_report_source::{DEFAULT_SCORECARD_API_URL, HealthReportSource};
pub use provider::Provider;
