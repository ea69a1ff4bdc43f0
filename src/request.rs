// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! REST request value object and builder
//!
//! `RestRequest` is an immutable snapshot produced by `RestRequestBuilder`.
//! The builder accumulates headers, query parameters, method, timeout and an
//! optional body processor; `build()` bakes the query string into the
//! endpoint and freezes the header map.

use std::collections::HashMap;
use std::time::Duration;

use crate::body::BodyProcessor;
use crate::error::{Error, Result};
use crate::headers::{ACCEPT, CONTENT_TYPE};

/// MIME type set by the JSON convenience setters
pub const APPLICATION_JSON: &str = "application/json";

/// Immutable descriptor of an outgoing REST request
///
/// The endpoint carries any query string baked in at build time. Query
/// parameter values are rendered with `ToString` and are **not**
/// URL-escaped; callers that need escaping must pre-encode values.
#[derive(Debug)]
pub struct RestRequest {
    endpoint: String,
    headers: HashMap<String, String>,
    method: String,
    timeout: Option<Duration>,
    body: Option<BodyProcessor>,
}

impl RestRequest {
    /// Start building a request for the given endpoint
    pub fn builder(endpoint: impl Into<String>) -> RestRequestBuilder {
        RestRequestBuilder::new(endpoint)
    }

    /// Request target, including the rendered query string
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Read-only view of the request headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// HTTP method token
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Per-request timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Whether this request carries an outgoing payload
    pub fn has_output(&self) -> bool {
        self.body.is_some()
    }

    /// The attached body processor, if any
    pub fn body(&self) -> Option<&BodyProcessor> {
        self.body.as_ref()
    }
}

/// Mutable accumulator for request configuration
///
/// Consumed by `build()`. Every setter is last-write-wins; query parameters
/// keep their insertion order, with a re-set key keeping its original slot.
#[derive(Debug)]
pub struct RestRequestBuilder {
    endpoint: String,
    method: String,
    headers: HashMap<String, String>,
    parameters: Vec<(String, String)>,
    timeout: Option<Duration>,
    body: Option<BodyProcessor>,
}

impl RestRequestBuilder {
    /// Create a builder for the given endpoint; the method defaults to GET
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: "GET".to_string(),
            headers: HashMap::new(),
            parameters: Vec::new(),
            timeout: None,
            body: None,
        }
    }

    /// Set the HTTP method token (any string is accepted)
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Use the GET method
    pub fn get(self) -> Self {
        self.method("GET")
    }

    /// Use the POST method
    pub fn post(self) -> Self {
        self.method("POST")
    }

    /// Use the PUT method
    pub fn put(self) -> Self {
        self.method("PUT")
    }

    /// Use the PATCH method
    pub fn patch(self) -> Self {
        self.method("PATCH")
    }

    /// Use the DELETE method
    pub fn delete(self) -> Self {
        self.method("DELETE")
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Clear the per-request timeout
    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Upsert a single header; last write wins for duplicate names
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Bulk-upsert headers from any (name, value) iterator
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.headers.insert(name.into(), value.into());
        }
        self
    }

    /// Upsert headers from a flat name/value list
    ///
    /// Fails if the list length is odd.
    pub fn header_pairs(mut self, pairs: &[&str]) -> Result<Self> {
        if pairs.len() % 2 != 0 {
            return Err(Error::invalid_argument(
                "header pair list has an odd number of entries",
            ));
        }
        for pair in pairs.chunks_exact(2) {
            self.headers.insert(pair[0].to_string(), pair[1].to_string());
        }
        Ok(self)
    }

    /// Set `Content-Type: application/json`
    pub fn json_body(self) -> Self {
        self.header(CONTENT_TYPE, APPLICATION_JSON)
    }

    /// Set `Accept: application/json`
    pub fn accept_json(self) -> Self {
        self.header(ACCEPT, APPLICATION_JSON)
    }

    /// Set both `Content-Type` and `Accept` to `application/json`
    pub fn json(self) -> Self {
        self.json_body().accept_json()
    }

    /// Accumulate a query parameter
    ///
    /// Keys are unique: setting an existing key replaces its value in place,
    /// keeping the original insertion slot. The value is rendered with
    /// `ToString` and not escaped.
    pub fn parameter(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        let name = name.into();
        let value = value.to_string();
        match self.parameters.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.parameters.push((name, value)),
        }
        self
    }

    /// Accumulate query parameters from any (name, value) iterator
    pub fn parameters<I, K, V>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        for (name, value) in parameters {
            self = self.parameter(name, value);
        }
        self
    }

    /// Attach a body processor
    pub fn body(mut self, processor: BodyProcessor) -> Self {
        self.body = Some(processor);
        self
    }

    /// Detach any previously attached body processor
    pub fn clear_body(mut self) -> Self {
        self.body = None;
        self
    }

    /// Produce the immutable request snapshot
    ///
    /// Renders the final endpoint as `endpoint?k=v&...` when parameters were
    /// accumulated, in insertion order.
    pub fn build(self) -> RestRequest {
        let endpoint = if self.parameters.is_empty() {
            self.endpoint
        } else {
            let query = self
                .parameters
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&");
            format!("{}?{}", self.endpoint, query)
        };

        RestRequest {
            endpoint,
            headers: self.headers,
            method: self.method,
            timeout: self.timeout,
            body: self.body,
        }
    }
}
