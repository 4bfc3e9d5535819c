mod provider;

pub use provider::{DEFAULT_NPM_REGISTRY_URL, Provider};
