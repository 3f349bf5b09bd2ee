//! Shared request execution for all services.
//!
//! [`ApiClient`] is the single collaborator every service delegates to:
//! it owns the `reqwest` client, the shop's base URL, and the default
//! headers, and turns a [`Request`] descriptor into exactly one outbound
//! HTTP call. There is no retry loop, no caching, and no interpretation
//! of failures beyond mapping them onto [`Error`](crate::Error).
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{ApiClient, Credentials};
//! use shopify_rest::client::{Method, Request};
//!
//! let client = ApiClient::new(&credentials);
//!
//! let request = Request::builder(Method::Get, "variants/123")
//!     .root_key("variant")
//!     .build()?;
//!
//! let variant: Variant = client.execute(request).await?;
//! ```

mod request;

pub use request::{Method, Request, RequestBuilder};

use serde::de::DeserializeOwned;

use crate::config::Credentials;
use crate::error::Error;

/// Client version reported in the `User-Agent` header.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The shared HTTP execution helper.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference-counted,
/// so each service can own its own copy.
///
/// # Thread safety
///
/// `ApiClient` is `Send + Sync` and can be shared across async tasks.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
    user_agent: String,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a client for the given shop credentials.
    ///
    /// The base URL is `https://{shop}/admin/api/{version}`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest` client cannot be created, which
    /// only happens on TLS initialization failure.
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        let base_url = format!(
            "https://{}/admin/api/{}",
            credentials.shop().as_ref(),
            credentials.api_version()
        );

        Self::build(
            base_url,
            Some(credentials.access_token().as_ref().to_string()),
            credentials.user_agent_suffix(),
        )
    }

    /// Creates a client against an explicit base URL.
    ///
    /// Intended for tests against a local mock server and for proxy
    /// setups where the shop is not addressed directly. The access token
    /// header is attached only when `access_token` is non-empty.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        let token = access_token.into();
        let token = if token.is_empty() { None } else { Some(token) };
        Self::build(base_url.into(), token, None)
    }

    fn build(base_url: String, access_token: Option<String>, suffix: Option<&str>) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = suffix.map_or_else(
            || format!("shopify-rest/{CLIENT_VERSION} | Rust {rust_version}"),
            |s| format!("shopify-rest/{CLIENT_VERSION} | Rust {rust_version} | {s}"),
        );

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
            user_agent,
        }
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Executes a request and deserializes the payload under the
    /// request's root key into `T`.
    ///
    /// Requests without a root key deserialize the entire response body.
    ///
    /// # Errors
    ///
    /// - [`Error::Network`] on connection failures
    /// - [`Error::Status`] on non-2xx responses
    /// - [`Error::MissingKey`] when the root key is absent from the body
    /// - [`Error::Deserialize`] when the payload does not match `T`
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, Error> {
        let root_key = request.root_key;
        let body = self.send(request).await?;

        match root_key {
            Some(key) => {
                let value = body.get(key).ok_or_else(|| Error::MissingKey {
                    key: key.to_string(),
                })?;
                serde_json::from_value(value.clone()).map_err(|source| Error::Deserialize {
                    key: key.to_string(),
                    source,
                })
            }
            None => serde_json::from_value(body).map_err(|source| Error::Deserialize {
                key: String::new(),
                source,
            }),
        }
    }

    /// Executes a request whose response body is discarded (DELETE).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] or [`Error::Status`] as [`execute`](Self::execute).
    pub async fn execute_empty(&self, request: Request) -> Result<(), Error> {
        self.send(request).await.map(|_| ())
    }

    /// Sends the request and returns the parsed response body.
    async fn send(&self, request: Request) -> Result<serde_json::Value, Error> {
        let url = format!("{}/{}", self.base_url, request.path);

        tracing::debug!(method = %request.method, %url, "sending Admin API request");

        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Delete => self.http.delete(&url),
        };

        builder = builder
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent);

        if let Some(token) = &self.access_token {
            builder = builder.header("X-Shopify-Access-Token", token);
        }

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let response = builder.send().await?;

        let code = response.status().as_u16();
        let request_id = header_value(response.headers(), "x-request-id");

        if let Some(reason) = header_value(response.headers(), "x-shopify-api-deprecated-reason") {
            tracing::warn!(path = %request.path, %reason, "deprecated Admin API request");
        }

        let text = response.text().await.unwrap_or_default();
        let body: serde_json::Value = if text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&text).unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
        };

        if !(200..=299).contains(&code) {
            return Err(Error::Status {
                code,
                message: serialize_error_body(&body),
                request_id,
            });
        }

        Ok(body)
    }
}

fn header_value(headers: &reqwest::header::HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// Serializes the error-bearing properties of a failure body into a
/// compact JSON string for the error message.
fn serialize_error_body(body: &serde_json::Value) -> String {
    let mut error_body = serde_json::Map::new();

    for key in ["errors", "error", "error_description", "raw_body"] {
        if let Some(value) = body.get(key) {
            error_body.insert(key.to_string(), value.clone());
        }
    }

    serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
}
