//! HTTP client utilities for the storefront.
//!
//! Provides a small builder API over `reqwest` with automatic JSON handling,
//! a base URL, default headers and optional timeouts.
//!
//! # Example
//!
//! ```rust,no_run
//! use shop_data::FetchClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Listing {
//!     products: Vec<serde_json::Value>,
//! }
//!
//! # async fn run() -> Result<(), shop_data::FetchError> {
//! let client = FetchClient::new()?
//!     .with_base_url("https://api.example.com")
//!     .with_default_header("Accept", "application/json");
//!
//! let listing: Listing = client
//!     .get("/v1/products")
//!     .bearer_auth("pk_test_123")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! # Ok(())
//! # }
//! ```

mod error;
mod request;
mod response;
mod timeout;

pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use timeout::TimeoutConfig;

use std::collections::HashMap;

use tracing::debug;

/// HTTP client for making outbound requests.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl FetchClient {
    /// Create a new HTTP client without timeouts.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeouts(TimeoutConfig::none())
    }

    /// Create a new HTTP client with the given timeouts.
    pub fn with_timeouts(timeouts: TimeoutConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(connect) = timeouts.connect {
            builder = builder.connect_timeout(connect);
        }
        if let Some(total) = timeouts.total {
            builder = builder.timeout(total);
        }
        let http = builder
            .build()
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        Ok(Self {
            http,
            base_url: None,
            default_headers: HashMap::new(),
        })
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let full_url = self.resolve(url.into());

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            http: self.http.clone(),
            builder,
        }
    }

    fn resolve(&self, url: String) -> String {
        match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
            _ => url,
        }
    }
}

/// A request builder bound to a client.
#[derive(Debug)]
pub struct ClientRequestBuilder {
    http: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// The request as it will be sent.
    pub fn request(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and return the response.
    ///
    /// Non-2xx statuses are returned as a normal [`Response`]; call
    /// [`Response::error_for_status`] to turn them into errors.
    pub async fn send(self) -> Result<Response, FetchError> {
        let RequestBuilder {
            method,
            url,
            headers,
            body,
        } = self.builder;

        let parsed = url::Url::parse(&url)?;
        debug!(method = method.as_str(), url = %parsed, "sending request");

        let mut request = self.http.request(method.to_reqwest(), parsed);
        for (key, value) in &headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?.to_vec();

        debug!(status, bytes = body.len(), "received response");
        Ok(Response::new(status, headers, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Method, Response, TimeoutConfig};
}
