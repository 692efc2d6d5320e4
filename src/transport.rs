//! The transport seam between endpoints and the network.
//!
//! Endpoints never talk to reqwest directly. They hand a method, a path
//! relative to the API root, an optional JSON body and a query map to a
//! [`Transport`], and get back a [`RawResponse`] or a transport error.
//! [`HttpTransport`](crate::http::HttpTransport) is the production
//! implementation.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

use crate::error::TetherError;

/// A single query-string value. ConnectWise only ever takes integers or strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Integer value, e.g. `page=2`.
    Int(i64),
    /// String value, e.g. `conditions=status/name="Open"`.
    Str(String),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Int(value) => write!(f, "{}", value),
            QueryValue::Str(value) => f.write_str(value),
        }
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

/// Query parameters for one request. Ordered so requests are reproducible.
pub type QueryParams = BTreeMap<String, QueryValue>;

/// Renders query parameters as string pairs for the wire.
pub fn query_pairs(query: &QueryParams) -> Vec<(String, String)> {
    query
        .iter()
        .map(|(key, value)| (key.clone(), value.to_string()))
        .collect()
}

/// A successful HTTP response, before any parsing.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status (always 2xx when returned by a transport).
    pub status: StatusCode,
    /// Response headers; pagination reads `Link` from here.
    pub headers: HeaderMap,
    /// Response body as text. May be empty.
    pub body: String,
}

impl RawResponse {
    /// Creates a `200 OK` response with the given body and no headers.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Adds a header, ignoring values that are not valid header text.
    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(value) = reqwest::header::HeaderValue::from_str(value) {
            self.headers.append(name, value);
        }
        self
    }
}

/// Issues one HTTP request against the API root.
///
/// Implementations must return `Err` for network failures and for every
/// non-2xx status; a returned `RawResponse` is always a success.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues `method` against `path` (relative to the API root, no leading slash).
    async fn issue(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        query: &QueryParams,
    ) -> Result<RawResponse, TetherError>;
}
