//! Request descriptors for Admin REST endpoints.
//!
//! A [`Request`] captures everything one API call needs: the HTTP
//! [`Method`], the resource path, the root key under which the response
//! payload is wrapped, and optional query parameters or a JSON body.
//! Service methods build a descriptor and hand it to
//! [`ApiClient::execute`](crate::ApiClient::execute); they never touch the
//! HTTP stack directly.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::client::{Method, Request};
//!
//! let request = Request::builder(Method::Get, "products/123/variants/count")
//!     .root_key("count")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.path, "products/123/variants/count.json");
//! assert_eq!(request.root_key, Some("count"));
//! ```

use std::fmt;

use crate::error::Error;

/// HTTP methods used by the Admin REST API.
///
/// Verb selection follows REST convention: GET for reads, POST for
/// creates, PUT for updates, DELETE for deletes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET for retrieving resources and counts.
    Get,
    /// HTTP POST for creating resources.
    Post,
    /// HTTP PUT for updating resources.
    Put,
    /// HTTP DELETE for removing resources.
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
            Self::Put => f.write_str("PUT"),
            Self::Delete => f.write_str("DELETE"),
        }
    }
}

/// A fully described API request, ready for execution.
///
/// Construct via [`Request::builder`]. The path is normalized to carry a
/// single trailing `.json`, matching the Admin REST URL convention.
#[derive(Clone, Debug)]
pub struct Request {
    /// The HTTP method.
    pub method: Method,
    /// Normalized resource path relative to the versioned base
    /// (e.g., `variants/123.json`).
    pub path: String,
    /// The JSON property the response payload is wrapped under
    /// (e.g., `"variant"`, `"variants"`, `"count"`). `None` means the
    /// body is not unwrapped (DELETE responses).
    pub root_key: Option<&'static str>,
    /// Query parameters appended to the URL.
    pub query: Vec<(String, String)>,
    /// JSON body, already wrapped under its envelope key.
    pub body: Option<serde_json::Value>,
}

impl Request {
    /// Creates a builder for the given method and resource path.
    ///
    /// The path may be given with or without the `.json` suffix.
    #[must_use]
    pub fn builder(method: Method, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder {
            method,
            path: path.into(),
            root_key: None,
            query: Vec::new(),
            body: None,
        }
    }
}

/// Builder for [`Request`] descriptors.
#[derive(Debug)]
pub struct RequestBuilder {
    method: Method,
    path: String,
    root_key: Option<&'static str>,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl RequestBuilder {
    /// Names the JSON property the response payload is nested under.
    #[must_use]
    pub const fn root_key(mut self, key: &'static str) -> Self {
        self.root_key = Some(key);
        self
    }

    /// Sets the query parameters, replacing any previously set.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets the JSON body. The value must already be wrapped under its
    /// envelope key (e.g., `{"variant": {...}}`).
    #[must_use]
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the request, normalizing the path and validating the
    /// method/body combination.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the path is empty or a
    /// POST/PUT request has no body.
    pub fn build(self) -> Result<Request, Error> {
        let path = normalize_path(&self.path)?;

        if matches!(self.method, Method::Post | Method::Put) && self.body.is_none() {
            return Err(Error::InvalidRequest {
                reason: format!("{} requests require a body", self.method),
            });
        }

        Ok(Request {
            method: self.method,
            path,
            root_key: self.root_key,
            query: self.query,
            body: self.body,
        })
    }
}

/// Normalizes a resource path: strips leading slashes, ensures exactly one
/// trailing `.json`, and rejects empty paths.
fn normalize_path(path: &str) -> Result<String, Error> {
    let path = path.trim_start_matches('/');
    let path = path.strip_suffix(".json").unwrap_or(path);

    if path.is_empty() {
        return Err(Error::InvalidRequest {
            reason: "path cannot be empty".to_string(),
        });
    }

    Ok(format!("{path}.json"))
}
