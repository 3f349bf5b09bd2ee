//! Error types for the Shopify REST client.
//!
//! Every failure a service method can produce is surfaced through [`Error`]
//! without local interpretation: the client performs no retries and no
//! recovery, so non-2xx statuses, malformed bodies, and deserialization
//! mismatches all propagate to the caller as-is.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::Error;
//!
//! match variants.get(123).await {
//!     Ok(variant) => println!("{:?}", variant.sku),
//!     Err(Error::Status { code: 404, .. }) => println!("no such variant"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use thiserror::Error;

/// Errors produced while constructing credentials or configuration values.
///
/// All configuration newtypes validate on construction and fail fast with
/// one of these variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Provide a valid Admin API access token.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The domain that was rejected.
        domain: String,
    },

    /// API version string is invalid.
    #[error("Invalid API version '{version}'. Expected 'YYYY-MM' (e.g., '2025-10').")]
    InvalidApiVersion {
        /// The version string that was rejected.
        version: String,
    },
}

/// Errors produced while building or executing an API request.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or connection failure from the underlying HTTP stack.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-2xx status code.
    ///
    /// `message` is the serialized error body (the `errors`/`error` JSON
    /// properties Shopify returns); `request_id` is the `X-Request-Id`
    /// header when present, useful in support tickets.
    #[error("HTTP {code}: {message}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// Serialized error payload from the response body.
        message: String,
        /// The `X-Request-Id` response header, if present.
        request_id: Option<String>,
    },

    /// The response body did not contain the expected root key.
    #[error("Response body is missing expected key '{key}'")]
    MissingKey {
        /// The root key that was expected.
        key: String,
    },

    /// The value under the root key could not be deserialized.
    #[error("Failed to deserialize '{key}': {source}")]
    Deserialize {
        /// The root key whose value failed to deserialize.
        key: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A request failed validation before it was sent.
    #[error("Invalid request: {reason}")]
    InvalidRequest {
        /// Why the request was rejected.
        reason: String,
    },

    /// An update was requested for an entity whose id is not set.
    #[error("Cannot update a {resource} without an id")]
    MissingId {
        /// The entity type name (e.g., "variant").
        resource: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages_name_the_problem() {
        let error = ConfigError::InvalidShopDomain {
            domain: "bad domain!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad domain!"));
        assert!(message.contains("Expected"));

        assert!(ConfigError::EmptyAccessToken
            .to_string()
            .contains("cannot be empty"));
    }

    #[test]
    fn test_status_error_includes_code_and_body() {
        let error = Error::Status {
            code: 404,
            message: r#"{"errors":"Not Found"}"#.to_string(),
            request_id: Some("abc-123".to_string()),
        };
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("Not Found"));
    }

    #[test]
    fn test_missing_id_error_names_resource() {
        let error = Error::MissingId { resource: "variant" };
        assert_eq!(error.to_string(), "Cannot update a variant without an id");
    }

    #[test]
    fn test_errors_implement_std_error() {
        let _: &dyn std::error::Error = &ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &Error::MissingKey {
            key: "variant".to_string(),
        };
    }
}
