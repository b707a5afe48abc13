// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP access to the published-version registry.
//!
//! ```text
//! RegistryClient::new()
//!   .url() .header()
//!        |
//!        v
//!   fetch_string() --> body (2xx) | HttpError
//!
//! Global client: OnceLock, connection pool, keep-alive
//! No timeout, no retry: the first failure is final.
//! ```

use crate::error::{BwcResult, NetworkError};
use reqwest::Client;
use std::sync::OnceLock;
use tracing::debug;

/// Global HTTP client - initialized once, reused across requests.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("bwc-rs/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Fetches registry documents over HTTP.
///
/// # Example
/// ```ignore
/// use bwc_rs::net::RegistryClient;
///
/// let xml = RegistryClient::new()
///     .url("https://repo1.maven.org/maven2/org/example/app/maven-metadata.xml")
///     .fetch_string()
///     .await?;
/// ```
pub struct RegistryClient {
    client: Client,
    url: Option<String>,
    headers: Vec<(String, String)>,
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryClient {
    /// Create a client sharing the global connection pool.
    /// User-Agent is set to "bwc-rs/VERSION".
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: global_client().clone(),
            url: None,
            headers: Vec::new(),
        }
    }

    /// Set the URL to fetch.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Add a custom header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Fetch the document body as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if no URL is set, the URL is malformed, the request
    /// fails, or the server answers with a non-success status.
    pub async fn fetch_string(&self) -> BwcResult<String> {
        let url = self
            .url
            .as_ref()
            .ok_or_else(|| NetworkError::InvalidUrl("no URL provided".to_string()))?;

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(NetworkError::InvalidUrl(url.clone()).into());
        }

        let mut request = self.client.get(url);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        debug!(url = %url, "Fetching registry document");
        let response = request.send().await.map_err(NetworkError::Reqwest)?;

        if !response.status().is_success() {
            return Err(NetworkError::HttpError {
                status: response.status().as_u16(),
                url: url.clone(),
            }
            .into());
        }

        let text = response.text().await.map_err(NetworkError::Reqwest)?;
        debug!(url = %url, bytes = text.len(), "Fetched registry document");
        Ok(text)
    }
}
