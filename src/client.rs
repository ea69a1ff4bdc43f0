// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! REST client implementation
//!
//! Thin glue over `reqwest::blocking`: resolves the request endpoint against
//! the configured base URL, applies method, headers and timeout, and runs
//! the attached body processor. Connection lifecycle, TLS, DNS and redirect
//! handling all stay inside reqwest.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Method;
use tracing::debug;
use url::Url;

use crate::body::BodyProcessor;
use crate::error::{Error, Result};
use crate::request::RestRequest;
use crate::response::Response;
use crate::DEFAULT_USER_AGENT;

/// REST client configuration
#[derive(Debug, Clone)]
pub struct RestClientConfig {
    /// Base address every endpoint is resolved against
    pub base_url: String,
    /// User agent string
    pub user_agent: String,
    /// Client-level timeout, applied when a request sets none
    pub timeout: Duration,
    /// Headers applied to every request (request headers win on collision)
    pub default_headers: HashMap<String, String>,
}

impl RestClientConfig {
    /// Create a configuration for the given base URL
    ///
    /// A trailing slash on the base URL is stripped so endpoint resolution
    /// always joins with exactly one slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
        }
    }
}

/// Blocking REST client
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    config: RestClientConfig,
}

impl RestClient {
    /// Create a client for the given base URL with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(RestClientConfig::new(base_url))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: RestClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Get client configuration
    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    /// Resolve an endpoint against the base URL
    pub fn resolve(&self, endpoint: &str) -> Result<Url> {
        let full = if endpoint.starts_with('/') {
            format!("{}{}", self.config.base_url, endpoint)
        } else {
            format!("{}/{}", self.config.base_url, endpoint)
        };
        Ok(Url::parse(&full)?)
    }

    /// Execute a request and read the full response
    pub fn execute(&self, request: RestRequest) -> Result<Response> {
        let start = Instant::now();

        let url = self.resolve(request.endpoint())?;
        let method = Method::from_bytes(request.method().as_bytes()).map_err(|_| {
            Error::invalid_argument(format!("invalid HTTP method: {:?}", request.method()))
        })?;

        // Default headers first, request headers win, then the body
        // processor's transport headers on top.
        let mut headers = self.config.default_headers.clone();
        for (name, value) in request.headers() {
            headers.insert(name.clone(), value.clone());
        }

        let body = match request.body() {
            Some(processor) => {
                processor.prepare_transport(&mut headers);
                let mut buf = Vec::new();
                processor.write_content(&mut buf)?;
                Some(buf)
            }
            None => None,
        };

        let mut builder = self.client.request(method.clone(), url.clone());
        for (name, value) in &headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|_| Error::invalid_argument(format!("invalid header name: {name:?}")))?;
            let value = HeaderValue::try_from(value.as_str()).map_err(|_| {
                Error::invalid_argument(format!("invalid header value for {name:?}"))
            })?;
            builder = builder.header(name, value);
        }
        if let Some(timeout) = request.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        debug!(%method, %url, "sending request");
        let response = builder.send()?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let status = response.status();
        let response_headers = response.headers().clone();
        let body = response.bytes()?;
        debug!(status = status.as_u16(), elapsed_ms, "request complete");

        Ok(Response::new(status, response_headers, body, elapsed_ms))
    }

    /// Execute a GET request against an endpoint
    pub fn get(&self, endpoint: impl Into<String>) -> Result<Response> {
        self.execute(RestRequest::builder(endpoint).build())
    }

    /// Execute a POST request carrying the given body
    pub fn post(&self, endpoint: impl Into<String>, body: BodyProcessor) -> Result<Response> {
        self.execute(RestRequest::builder(endpoint).post().body(body).build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RestClient::new("https://api.example.com").unwrap();
        assert_eq!(client.config().user_agent, DEFAULT_USER_AGENT);
        assert_eq!(client.config().base_url, "https://api.example.com");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = RestClient::new("https://api.example.com/").unwrap();
        let url = client.resolve("/todos").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/todos");
    }

    #[test]
    fn test_resolve_inserts_missing_slash() {
        let client = RestClient::new("https://api.example.com").unwrap();
        let url = client.resolve("todos").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/todos");
    }

    #[test]
    fn test_resolve_keeps_query_string() {
        let client = RestClient::new("https://api.example.com").unwrap();
        let request = RestRequest::builder("/search")
            .parameter("q", "widget")
            .parameter("page", 2)
            .build();
        let url = client.resolve(request.endpoint()).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/search?q=widget&page=2");
    }

    #[test]
    fn test_invalid_method_is_rejected_before_send() {
        let client = RestClient::new("https://api.example.com").unwrap();
        let request = RestRequest::builder("/x").method("NOT A METHOD").build();
        let err = client.execute(request).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_unparseable_base_url_is_rejected_before_send() {
        let client = RestClient::new("not a url").unwrap();
        let err = client.execute(RestRequest::builder("/x").build()).unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }
}
