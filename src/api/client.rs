//! HTTP client for the Current catalog API.
//!
//! One blocking GET per operation, JSON body decode, no retries and no
//! caching. Failures map onto [`CurrentError`] so commands can tell a dead
//! network from a bad payload from a missing stack.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{CurrentError, Result};

use super::types::{SearchResponse, StackDetails, StacksResponse, TrendingResponse, TrendingSort};

/// Blocking client over the four catalog endpoints.
///
/// Cloning is cheap; the underlying connection pool is shared, which is how
/// the live search loop hands a client to its fetch thread.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    /// Build a client for the configured API base.
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_timeout(config, config.timeout)
    }

    /// Build a client with an explicit request timeout.
    pub fn with_timeout(config: &ApiConfig, timeout: Duration) -> Self {
        Self {
            base_url: config.base_url.clone(),
            client: reqwest::blocking::Client::builder()
                .user_agent(concat!("current/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /stacks`: the full catalog.
    pub fn stacks(&self) -> Result<StacksResponse> {
        let url = self.endpoint("stacks");
        self.get_json(self.client.get(&url), &url)
    }

    /// `GET /stacks/{name}`: one stack with detail fields.
    ///
    /// A 404 maps to [`CurrentError::StackNotFound`] so callers can render
    /// the dedicated not-found view.
    pub fn stack(&self, name: &str) -> Result<StackDetails> {
        let url = self.endpoint(&format!("stacks/{}", name));
        match self.get_json(self.client.get(&url), &url) {
            Err(CurrentError::Status { status: 404, .. }) => Err(CurrentError::StackNotFound {
                name: name.to_string(),
            }),
            other => other,
        }
    }

    /// `GET /stacks/search?q=`: server-side name/language search.
    pub fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = self.endpoint("stacks/search");
        self.get_json(self.client.get(&url).query(&[("q", query)]), &url)
    }

    /// `GET /stacks/trending?sort_by=&limit=`: server-ranked top stacks.
    pub fn trending(&self, sort_by: TrendingSort, limit: u32) -> Result<TrendingResponse> {
        let url = self.endpoint("stacks/trending");
        let request = self
            .client
            .get(&url)
            .query(&[("sort_by", sort_by.as_str().to_string()), ("limit", limit.to_string())]);
        self.get_json(request, &url)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::blocking::RequestBuilder,
        url: &str,
    ) -> Result<T> {
        debug!(url, "issuing GET");
        let response = request.send().map_err(|source| CurrentError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CurrentError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| CurrentError::Transport {
            url: url.to_string(),
            source,
        })?;
        debug!(url, bytes = body.len(), "response received");

        serde_json::from_str(&body).map_err(|err| CurrentError::MalformedResponse {
            url: url.to_string(),
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ApiConfig::new(server.base_url()))
    }

    const REACT: &str = r#"{
        "name": "React",
        "language": "JavaScript",
        "latest_version": "19.1.0",
        "release_date": "2025-03-28",
        "docs_url": "https://react.dev",
        "install": {"npm": "npm install react"},
        "github_stars": 230000,
        "category": "frontend"
    }"#;

    #[test]
    fn stacks_decodes_catalog_payload() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/stacks");
            then.status(200).body(format!(
                r#"{{"stacks": {{"React": {REACT}}}, "total_count": 1}}"#
            ));
        });

        let response = client_for(&server).stacks().unwrap();
        assert_eq!(response.total_count, 1);
        assert_eq!(response.stacks["React"].stars(), 230000);
    }

    #[test]
    fn stack_sends_name_in_path() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/stacks/React");
            then.status(200).body(REACT);
        });

        let details = client_for(&server).stack("React").unwrap();
        assert_eq!(details.stack.name, "React");
        mock.assert();
    }

    #[test]
    fn missing_stack_maps_to_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/stacks/Svelte");
            then.status(404)
                .body(r#"{"detail": "Stack 'Svelte' not found"}"#);
        });

        let err = client_for(&server).stack("Svelte").unwrap_err();
        assert!(matches!(err, CurrentError::StackNotFound { ref name } if name == "Svelte"));
    }

    #[test]
    fn search_sends_query_parameter() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/stacks/search").query_param("q", "rea");
            then.status(200).body(format!(
                r#"{{"query": "rea", "stacks": {{"React": {REACT}}}, "total_count": 1}}"#
            ));
        });

        let response = client_for(&server).search("rea").unwrap();
        assert_eq!(response.query, "rea");
        assert_eq!(response.total_count, 1);
        mock.assert();
    }

    #[test]
    fn trending_sends_sort_and_limit() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/stacks/trending")
                .query_param("sort_by", "combined")
                .query_param("limit", "10");
            then.status(200).body(format!(
                r#"{{"stacks": [{REACT}], "sort_by": "combined", "total_count": 1}}"#
            ));
        });

        let response = client_for(&server)
            .trending(TrendingSort::Combined, 10)
            .unwrap();
        assert_eq!(response.sort_by, "combined");
        assert_eq!(response.stacks.len(), 1);
        mock.assert();
    }

    #[test]
    fn server_error_maps_to_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/stacks");
            then.status(500).body("Internal Server Error");
        });

        let err = client_for(&server).stacks().unwrap_err();
        assert!(matches!(err, CurrentError::Status { status: 500, .. }));
    }

    #[test]
    fn non_json_body_maps_to_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/stacks");
            then.status(200).body("<html>definitely not json</html>");
        });

        let err = client_for(&server).stacks().unwrap_err();
        assert!(matches!(err, CurrentError::MalformedResponse { .. }));
    }

    #[test]
    fn unreachable_host_maps_to_transport() {
        // Port 1 refuses connections without a long wait.
        let config = ApiConfig::new("http://127.0.0.1:1").with_timeout(Duration::from_secs(2));
        let client = ApiClient::new(&config);
        let err = client.stacks().unwrap_err();
        assert!(matches!(err, CurrentError::Transport { .. }));
    }
}
