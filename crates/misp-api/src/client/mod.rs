// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

mod events;
mod helpers;

use crate::error::MispApiError;
use reqwest::Client;
use url::Url;

/// Client for interacting with the MISP REST API.
///
/// Holds the HTTP client, the normalized base URL and the authorization
/// key. It is immutable after construction; clone it or share it by
/// reference to run requests concurrently.
///
/// # Examples
///
/// ```rust,no_run
/// use misp_api::{ApiClient, EventQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ApiClient::new("https://misp.example.org/", "my-auth-key")?;
///
///     let query = EventQuery {
///         event_id: "1488",
///         ..Default::default()
///     };
///     let events = client.search_events(&query).await?;
///     println!("Found {} events", events.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("auth", &"<redacted>")
            .finish()
    }
}

impl ApiClient {
    /// Creates a new client with its own HTTP client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The MISP instance, e.g. `misp.example.org`. `https://` is assumed if no
    ///   scheme is given, a trailing `/` is removed.
    /// * `auth` - The authorization key, sent verbatim in the `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns a `MispApiError` if the `reqwest` client cannot be built
    /// or if the provided base URL is invalid.
    pub fn new(base_url: &str, auth: impl Into<String>) -> Result<Self, MispApiError> {
        let client = Client::builder()
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .build()?;
        Self::new_with_client(client, base_url, auth)
    }

    /// Creates a new client using a caller supplied HTTP client.
    ///
    /// Timeouts, proxies, TLS roots and connection pooling are all taken
    /// from `client`.
    ///
    /// # Errors
    ///
    /// Returns a `MispApiError` if the provided base URL is invalid.
    pub fn new_with_client(
        client: Client,
        base_url: &str,
        auth: impl Into<String>,
    ) -> Result<Self, MispApiError> {
        let base_url = normalize_base_url(base_url);
        Url::parse(&base_url)?;

        Ok(ApiClient {
            client,
            base_url,
            auth: auth.into(),
        })
    }

    /// The normalized base URL, without trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Defaults the scheme to `https://` and strips one trailing `/`.
fn normalize_base_url(base_url: &str) -> String {
    let base_url = if base_url.starts_with("http://") || base_url.starts_with("https://") {
        base_url.to_string()
    } else {
        format!("https://{base_url}")
    };
    match base_url.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => base_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_defaults_to_https() {
        assert_eq!(
            normalize_base_url("misp.example.org"),
            "https://misp.example.org"
        );
        assert_eq!(
            normalize_base_url("http://localhost:8080"),
            "http://localhost:8080"
        );
        assert_eq!(
            normalize_base_url("https://misp.example.org"),
            "https://misp.example.org"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        assert_eq!(
            normalize_base_url("misp.example.org/"),
            "https://misp.example.org"
        );
        assert_eq!(
            normalize_base_url("https://misp.example.org/misp/"),
            "https://misp.example.org/misp"
        );
    }

    #[test]
    fn invalid_base_url() {
        let err = ApiClient::new("http://[::1", "key").unwrap_err();
        assert!(matches!(err, MispApiError::UrlParse(_)));
    }

    #[test]
    fn debug_hides_auth() {
        let client = ApiClient::new("misp.example.org/", "secret-key").unwrap();
        assert_eq!(client.base_url(), "https://misp.example.org");
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-key"));
    }
}
