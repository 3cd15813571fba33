//! Endpoint and client-identification configuration.
//!
//! The Bring! API expects a fixed set of client-identification header
//! values on every call. They are a compatibility contract with the remote
//! service, not a secret, so they live in named fields rather than hidden
//! literals and can be overridden in tests along with the base URL.

use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Production API base URL.
const DEFAULT_BASE_URL: &str = "https://api.getbring.com/rest/v2";

/// Default cache TTL (10 minutes).
const DEFAULT_CACHE_TTL_SECS: u64 = 600;

/// Client identification announced to the service.
const DEFAULT_CLIENT: &str = "webApp";

/// Client source announced to the service.
const DEFAULT_CLIENT_SOURCE: &str = "webApp";

/// Country code announced to the service.
const DEFAULT_COUNTRY: &str = "DE";

/// API key of the public web client.
const DEFAULT_API_KEY: &str = "cof4Nc6D8saplXjE3h3HXqHH8m7VU2i1Gs0g85Sp";

/// Instance id of the public web client.
const DEFAULT_CLIENT_INSTANCE_ID: &str = "Web-dbwoh1VmlMaGf7RyIcPnLUnGbyd8iwn2";

// ============================================================================
// Config
// ============================================================================

/// Remote endpoint configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL, without trailing slash.
    pub base_url: String,

    /// `X-BRING-CLIENT` header value.
    pub client: String,

    /// `X-BRING-CLIENT-SOURCE` header value.
    pub client_source: String,

    /// `X-BRING-COUNTRY` header value.
    pub country: String,

    /// `X-BRING-API-KEY` header value.
    pub api_key: String,

    /// `X-BRING-CLIENT-INSTANCE-ID` header value.
    pub client_instance_id: String,

    /// Maximum age before cached list data must be re-fetched.
    pub cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client: DEFAULT_CLIENT.to_string(),
            client_source: DEFAULT_CLIENT_SOURCE.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            client_instance_id: DEFAULT_CLIENT_INSTANCE_ID.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl Config {
    /// Sets the API base URL (trailing slash stripped).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// URL of the auth endpoint.
    pub fn auth_url(&self) -> String {
        format!("{}/bringauth", self.base_url)
    }

    /// URL of the list-of-lists endpoint for a user.
    pub fn lists_url(&self, user_uuid: &str) -> String {
        format!("{}/bringusers/{}/lists", self.base_url, user_uuid)
    }

    /// URL of the detail/mutation endpoint for a list.
    pub fn list_url(&self, list_uuid: &str) -> String {
        format!("{}/bringlists/{}", self.base_url, list_uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production() {
        let config = Config::default();
        assert_eq!(config.auth_url(), "https://api.getbring.com/rest/v2/bringauth");
        assert_eq!(config.cache_ttl, Duration::from_secs(600));
    }

    #[test]
    fn url_patterns_embed_uuids() {
        let config = Config::default().with_base_url("http://localhost:1234/");
        assert_eq!(
            config.lists_url("user-1"),
            "http://localhost:1234/bringusers/user-1/lists"
        );
        assert_eq!(
            config.list_url("list-9"),
            "http://localhost:1234/bringlists/list-9"
        );
    }
}
