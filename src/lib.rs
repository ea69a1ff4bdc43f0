// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Remora - Small REST Request Library
//!
//! A thin client-side library for constructing and sending HTTP requests to
//! REST services. Network I/O, TLS, DNS and redirect handling are delegated
//! to reqwest; remora owns the request/body abstraction on top of it.
//!
//! ## Features
//!
//! - Fluent builder: method, headers, query parameters, timeout, body
//! - Body strategies: text, bytes, file, stream, multipart form-data
//! - Re-enterable stream bodies via a fresh-stream supplier
//! - Blocking, synchronous execution with per-request timeouts
//!
//! ## Example
//!
//! ```rust,no_run
//! use remora::{BodyProcessor, RestClient, RestRequest};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestClient::new("https://api.example.com")?;
//!
//!     let request = RestRequest::builder("/reports")
//!         .post()
//!         .accept_json()
//!         .parameter("notify", true)
//!         .body(BodyProcessor::multipart_file("./report.pdf", None, None))
//!         .build();
//!
//!     let response = client.execute(request)?;
//!     println!("{}", response.status_code());
//!
//!     Ok(())
//! }
//! ```

pub mod body;
pub mod client;
pub mod error;
pub mod request;
pub mod response;

// Re-exports for convenience

// Request construction
pub use request::{RestRequest, RestRequestBuilder, APPLICATION_JSON};

// Body processors
pub use body::{BodyProcessor, MultipartBody, StreamSupplier, DEFAULT_BUFFER_SIZE, MULTIPART_BOUNDARY};

// Client
pub use client::{RestClient, RestClientConfig};

// Response
pub use response::Response;

// Errors
pub use error::{Error, Result};

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("remora/", env!("CARGO_PKG_VERSION"));

/// Common HTTP headers
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const CACHE_CONTROL: &str = "cache-control";
    pub const CONNECTION: &str = "connection";
    pub const CONTENT_LENGTH: &str = "content-length";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const USER_AGENT: &str = "user-agent";
}

/// Remora version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
