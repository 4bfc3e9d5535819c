mod provider;

pub use provider::{DEFAULT_GITHUB_API_URL, Provider};
