//! Minimal JSON-over-HTTP client shared by the remote providers.
//!
//! Every call is classified into success, rate limiting, not found, or failure so that
//! providers can turn the outcome into a [`ProviderResult`](super::ProviderResult).

use chrono::{DateTime, Utc};
use ohno::{app_err, bail};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use url::Url;

const USER_AGENT: &str = "pkgrank";

/// Rate limit information from response headers
#[derive(Debug, Clone, Copy)]
pub struct RateLimitInfo {
    pub remaining: usize,
    pub reset_at: DateTime<Utc>,
}

/// Result of an API call
#[derive(Debug)]
pub enum ApiResult<T> {
    /// Request succeeded
    Success(T),

    /// Rate limited until the reset time
    RateLimited(RateLimitInfo),

    /// The requested resource was not found (404)
    NotFound,

    /// Request failed permanently
    Failed(ohno::AppError),
}

/// Unwrap an [`ApiResult`] inside a function returning `Result<ProviderResult<_>>`,
/// returning early with the matching `ProviderResult` for anything but success.
///
/// The caller's module must define `LOG_TARGET` and import `ohno::EnrichableExt`.
macro_rules! unwrap_api_result {
    ($expr:expr, $subject:expr, $operation:expr, $not_found:expr) => {
        match $expr {
            $crate::facts::api_client::ApiResult::Success(data) => data,
            $crate::facts::api_client::ApiResult::RateLimited(rate_limit) => {
                log::warn!(target: LOG_TARGET, "Rate limited while fetching {} for '{}'", $operation, $subject);
                return Err(ohno::app_err!(
                    "rate limited while fetching {} for '{}' ({} requests remaining, resets at {})",
                    $operation,
                    $subject,
                    rate_limit.remaining,
                    rate_limit.reset_at
                ));
            }
            $crate::facts::api_client::ApiResult::NotFound => {
                log::debug!(target: LOG_TARGET, "No {} for '{}'", $operation, $subject);
                return Ok($crate::facts::ProviderResult::NotFound(::std::sync::Arc::from($not_found)));
            }
            $crate::facts::api_client::ApiResult::Failed(e) => {
                return Err(e.enrich_with(|| format!("fetching {} for '{}'", $operation, $subject)));
            }
        }
    };
}

pub(crate) use unwrap_api_result;

/// API client bound to one base URL
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Create a new client for the given base URL, without credentials
    pub fn new(base_url: &str) -> crate::Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            bail!("'{base_url}' cannot be used as an API base URL");
        }

        Ok(Self {
            client: reqwest::Client::builder().user_agent(USER_AGENT).build()?,
            base_url,
        })
    }

    /// Full URL of an API endpoint below the base URL, each segment percent-encoded
    #[must_use]
    pub fn url(&self, segments: impl IntoIterator<Item = impl AsRef<str>>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            let _ = path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Make an API call and classify the result
    pub async fn api_call(&self, url: Url) -> ApiResult<reqwest::Response> {
        log::trace!("GET {url}");

        let resp = match self.client.get(url.clone()).header(reqwest::header::ACCEPT, "application/json").send().await {
            Ok(r) => r,
            Err(e) => return ApiResult::Failed(e.into()),
        };

        // Extract rate limit info from response headers before checking status
        let rate_limit = extract_rate_limit_from_headers(resp.headers());

        let status = resp.status();
        if status.is_success() {
            return ApiResult::Success(resp);
        }

        // A 403 is only a rate limit once the quota is exhausted
        match (status, rate_limit) {
            (StatusCode::TOO_MANY_REQUESTS, rate_limit) => ApiResult::RateLimited(rate_limit.unwrap_or_else(|| RateLimitInfo {
                remaining: 0,
                reset_at: default_reset_time(),
            })),
            (StatusCode::FORBIDDEN, Some(rate_limit)) if rate_limit.remaining == 0 => ApiResult::RateLimited(rate_limit),
            (StatusCode::NOT_FOUND, _) => ApiResult::NotFound,
            _ => ApiResult::Failed(app_err!("HTTP status {status} from {url}")),
        }
    }
}

/// Extract rate limit information from API response headers
fn extract_rate_limit_from_headers(headers: &HeaderMap) -> Option<RateLimitInfo> {
    let remaining = headers.get("x-ratelimit-remaining")?.to_str().ok()?.parse::<usize>().ok()?;

    let reset_at = headers
        .get("x-ratelimit-reset")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<i64>().ok())
        .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
        .unwrap_or_else(default_reset_time);

    Some(RateLimitInfo { remaining, reset_at })
}

/// Without a reset header, assume the limit resets within the hour
fn default_reset_time() -> DateTime<Utc> {
    Utc::now() + chrono::Duration::hours(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_extract_rate_limit_from_headers() {
        let mut headers = HeaderMap::new();
        let _ = headers.insert("x-ratelimit-remaining", HeaderValue::from_static("59"));
        let _ = headers.insert("x-ratelimit-reset", HeaderValue::from_static("1704067200"));

        let rate_limit = extract_rate_limit_from_headers(&headers).unwrap();

        assert_eq!(rate_limit.remaining, 59);
        assert_eq!(rate_limit.reset_at.timestamp(), 1_704_067_200);
    }

    #[test]
    fn test_extract_rate_limit_missing_headers() {
        let headers = HeaderMap::new();
        assert!(extract_rate_limit_from_headers(&headers).is_none());
    }

    #[test]
    fn test_extract_rate_limit_invalid_remaining() {
        let mut headers = HeaderMap::new();
        let _ = headers.insert("x-ratelimit-remaining", HeaderValue::from_static("invalid"));
        let _ = headers.insert("x-ratelimit-reset", HeaderValue::from_static("1704067200"));

        assert!(extract_rate_limit_from_headers(&headers).is_none());
    }

    #[test]
    fn test_extract_rate_limit_invalid_reset() {
        let mut headers = HeaderMap::new();
        let _ = headers.insert("x-ratelimit-remaining", HeaderValue::from_static("59"));
        let _ = headers.insert("x-ratelimit-reset", HeaderValue::from_static("soon"));

        let rate_limit = extract_rate_limit_from_headers(&headers).unwrap();
        assert_eq!(rate_limit.remaining, 59);
        assert!(rate_limit.reset_at > Utc::now());
    }

    #[test]
    fn test_client_trims_trailing_slashes() {
        let client = Client::new("https://api.github.com//").unwrap();
        assert_eq!(client.url(["repos", "a", "b"]).as_str(), "https://api.github.com/repos/a/b");
    }

    #[test]
    fn test_client_url_keeps_base_path() {
        let client = Client::new("https://example.com/api/v3/").unwrap();
        assert_eq!(client.url(["repos", "a", "b"]).as_str(), "https://example.com/api/v3/repos/a/b");
    }

    #[test]
    fn test_client_url_escapes_segments() {
        let client = Client::new("https://registry.npmjs.org").unwrap();
        assert_eq!(client.url(["lodash"]).as_str(), "https://registry.npmjs.org/lodash");
        assert_eq!(client.url(["@babel/core"]).as_str(), "https://registry.npmjs.org/@babel%2Fcore");
    }

    #[test]
    fn test_client_rejects_opaque_base() {
        let _ = Client::new("mailto:someone@example.com").unwrap_err();
        let _ = Client::new("not a url").unwrap_err();
    }
}
