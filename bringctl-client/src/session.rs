//! Authenticated session and raw remote calls.

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use bringctl_core::{BringError, ListDetail, ListService, ListSummary};

use crate::config::Config;
use crate::list::ShoppingList;

/// Request timeout in seconds.
const TIMEOUT_SECS: u64 = 30;

// ============================================================================
// API Response Types
// ============================================================================

/// Response from the auth endpoint.
#[derive(Debug, Deserialize)]
struct AuthResponse {
    uuid: String,
    access_token: String,
}

/// Envelope of the list-of-lists endpoint.
#[derive(Debug, Deserialize)]
struct ListsResponse {
    lists: Vec<ListSummary>,
}

// ============================================================================
// Session
// ============================================================================

/// Authenticated identity plus the raw remote operations.
///
/// Holds the user uuid and access token for the whole process run (token
/// refresh is out of scope) and performs blocking HTTP round trips. No
/// caching and no retries live here; a single failed call surfaces as an
/// error.
#[derive(Debug)]
pub struct Session {
    http: Client,
    config: Config,
    user_uuid: String,
    access_token: String,
}

impl Session {
    /// Creates a session from an already-known identity.
    ///
    /// # Errors
    ///
    /// Returns [`BringError::Remote`] if the HTTP client cannot be built.
    pub fn new(
        config: Config,
        user_uuid: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, BringError> {
        let http = build_http_client().map_err(|e| BringError::Remote(e.to_string()))?;

        Ok(Self {
            http,
            config,
            user_uuid: user_uuid.into(),
            access_token: access_token.into(),
        })
    }

    /// Authenticates against the auth endpoint and constructs a session.
    ///
    /// # Errors
    ///
    /// Returns [`BringError::Authentication`] when the auth round trip
    /// fails for any reason; wrong-password and network failures are not
    /// distinguished beyond what the transport reports.
    pub fn authenticate(config: Config, email: &str, password: &str) -> Result<Self, BringError> {
        debug!(url = %config.auth_url(), "Authenticating");

        let http = build_http_client().map_err(|e| BringError::Authentication(e.to_string()))?;

        let headers = client_headers(&config).map_err(BringError::Authentication)?;
        let response = http
            .post(config.auth_url())
            .headers(headers)
            .form(&[("email", email), ("password", password)])
            .send()
            .map_err(|e| BringError::Authentication(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BringError::Authentication(format!("HTTP {status}")));
        }

        let auth: AuthResponse = response
            .json()
            .map_err(|e| BringError::Authentication(e.to_string()))?;

        debug!(user_uuid = %auth.uuid, "Authenticated");
        Ok(Self {
            http,
            config,
            user_uuid: auth.uuid,
            access_token: auth.access_token,
        })
    }

    /// Fetches the user's list summaries, in remote order.
    ///
    /// # Errors
    ///
    /// Returns [`BringError::Remote`] on any failure.
    pub fn list_summaries(&self) -> Result<Vec<ListSummary>, BringError> {
        let response = self.get(&self.config.lists_url(&self.user_uuid))?;
        let payload: ListsResponse = response
            .json()
            .map_err(|e| BringError::Remote(e.to_string()))?;
        Ok(payload.lists)
    }

    /// Fetches the user's lists and wraps each in a never-fetched handle.
    ///
    /// # Errors
    ///
    /// Returns [`BringError::Remote`] on any failure.
    pub fn lists(&self) -> Result<Vec<ShoppingList<'_, Self>>, BringError> {
        Ok(self
            .list_summaries()?
            .into_iter()
            .map(|summary| ShoppingList::new(summary, self))
            .collect())
    }

    /// The authenticated user's uuid.
    pub fn user_uuid(&self) -> &str {
        &self.user_uuid
    }

    /// The endpoint configuration this session was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Performs an authorized GET and checks for a success status.
    fn get(&self, url: &str) -> Result<Response, BringError> {
        debug!(url = %url, "GET");
        let response = self
            .http
            .get(url)
            .headers(self.authorized_headers()?)
            .send()
            .map_err(|e| BringError::Remote(e.to_string()))?;
        check_status(response)
    }

    /// Performs an authorized form PUT and checks for a success status.
    fn put_form(&self, url: &str, form: &[(&str, &str)]) -> Result<(), BringError> {
        debug!(url = %url, "PUT");
        let response = self
            .http
            .put(url)
            .headers(self.authorized_headers()?)
            .form(form)
            .send()
            .map_err(|e| BringError::Remote(e.to_string()))?;
        check_status(response)?;
        Ok(())
    }

    /// Client headers plus bearer token and user-identifier header.
    fn authorized_headers(&self) -> Result<HeaderMap, BringError> {
        let mut headers = client_headers(&self.config).map_err(BringError::Remote)?;

        let bearer = format!("Bearer {}", self.access_token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer).map_err(|e| BringError::Remote(e.to_string()))?,
        );
        headers.insert(
            HeaderName::from_static("x-bring-user-uuid"),
            HeaderValue::from_str(&self.user_uuid)
                .map_err(|e| BringError::Remote(e.to_string()))?,
        );

        Ok(headers)
    }
}

impl ListService for Session {
    fn fetch_list(&self, list_uuid: &str) -> Result<ListDetail, BringError> {
        let response = self.get(&self.config.list_url(list_uuid))?;
        response.json().map_err(|e| BringError::Remote(e.to_string()))
    }

    fn add_item(
        &self,
        list_uuid: &str,
        name: &str,
        specification: &str,
    ) -> Result<(), BringError> {
        self.put_form(
            &self.config.list_url(list_uuid),
            &[
                ("uuid", list_uuid),
                ("purchase", name),
                ("specification", specification),
            ],
        )
    }

    fn mark_purchased(&self, list_uuid: &str, name: &str) -> Result<(), BringError> {
        self.put_form(
            &self.config.list_url(list_uuid),
            &[("uuid", list_uuid), ("recently", name)],
        )
    }

    fn cache_ttl(&self) -> Duration {
        self.config.cache_ttl
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .user_agent(concat!("bringctl/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Maps a non-success status to `BringError::Remote`.
fn check_status(response: Response) -> Result<Response, BringError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(BringError::Remote(format!("HTTP {status}")))
    }
}

/// Builds the fixed client-identification headers.
///
/// Errors as a plain string so call sites can pick the error kind.
fn client_headers(config: &Config) -> Result<HeaderMap, String> {
    let mut headers = HeaderMap::new();

    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );

    let fields = [
        ("x-bring-client", &config.client),
        ("x-bring-client-source", &config.client_source),
        ("x-bring-country", &config.country),
        ("x-bring-api-key", &config.api_key),
        ("x-bring-client-instance-id", &config.client_instance_id),
    ];
    for (name, value) in fields {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_str(value).map_err(|e| format!("invalid {name} header: {e}"))?,
        );
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_headers_carry_the_contract() {
        let headers = client_headers(&Config::default()).unwrap();
        assert_eq!(
            headers.get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(headers.get("x-bring-client").unwrap(), "webApp");
        assert!(headers.get("x-bring-api-key").is_some());
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn session_from_known_identity() {
        let session = Session::new(Config::default(), "user-1", "tok").unwrap();
        assert_eq!(session.user_uuid(), "user-1");
        assert_eq!(session.cache_ttl(), Duration::from_secs(600));
    }
}
