//! Credentials and configuration newtypes.
//!
//! Every value needed to talk to a shop is validated on construction:
//! a [`ShopDomain`] normalized to the full `*.myshopify.com` form, a
//! non-empty [`AccessToken`] whose `Debug` output is masked, and an
//! [`ApiVersion`] in `YYYY-MM` form. [`Credentials`] bundles them and is
//! all a service needs to start issuing requests.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{Credentials, ShopDomain, AccessToken};
//!
//! let credentials = Credentials::new(
//!     ShopDomain::new("my-store").unwrap(),
//!     AccessToken::new("shpat_example").unwrap(),
//! );
//! assert_eq!(credentials.shop().as_ref(), "my-store.myshopify.com");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// A validated Shopify shop domain, normalized to `shop-name.myshopify.com`.
///
/// # Accepted formats
///
/// - `shop-name` - normalized to `shop-name.myshopify.com`
/// - `shop-name.myshopify.com` - used as-is
///
/// Shop names may contain lowercase letters, digits, and hyphens, and may
/// not start or end with a hyphen.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ShopDomain;
///
/// let domain = ShopDomain::new("my-store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is empty,
    /// carries a foreign suffix, or contains invalid characters.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into();
        let domain = domain.trim().to_lowercase();

        if domain.is_empty() {
            return Err(ConfigError::InvalidShopDomain { domain });
        }

        let (shop_name, full_domain) = if let Some(shop_name) = domain.strip_suffix(Self::SUFFIX) {
            (shop_name.to_string(), domain)
        } else if domain.contains('.') {
            return Err(ConfigError::InvalidShopDomain { domain });
        } else {
            (domain.clone(), format!("{}{}", domain, Self::SUFFIX))
        };

        if !Self::is_valid_shop_name(&shop_name) {
            return Err(ConfigError::InvalidShopDomain {
                domain: full_domain,
            });
        }

        Ok(Self {
            shop_name_end: shop_name.len(),
            full_domain,
        })
    }

    /// Returns the shop name portion of the domain.
    ///
    /// For `my-store.myshopify.com`, this returns `my-store`.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.full_domain[..self.shop_name_end]
    }

    fn is_valid_shop_name(name: &str) -> bool {
        if name.is_empty() || name.starts_with('-') || name.ends_with('-') {
            return false;
        }

        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_domain)
    }
}

/// A validated Admin API access token.
///
/// The `Debug` implementation masks the token value so it cannot leak
/// through logs.
///
/// # Example
///
/// ```rust
/// use shopify_rest::AccessToken;
///
/// let token = AccessToken::new("shpat_example").unwrap();
/// assert_eq!(format!("{token:?}"), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A dated Admin API version.
///
/// Shopify releases a new stable version each quarter, named `YYYY-MM`.
/// The version appears in every request path (`/admin/api/{version}/...`).
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiVersion;
///
/// let version: ApiVersion = "2025-10".parse().unwrap();
/// assert_eq!(version.to_string(), "2025-10");
/// assert_eq!(ApiVersion::latest(), ApiVersion::V2025_10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2025-01 (January 2025)
    V2025_01,
    /// API version 2025-04 (April 2025)
    V2025_04,
    /// API version 2025-07 (July 2025)
    V2025_07,
    /// API version 2025-10 (October 2025)
    V2025_10,
    /// Custom version string for future or unrecognized dated versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    fn as_str(&self) -> &str {
        match self {
            Self::V2025_01 => "2025-01",
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::V2025_10 => "2025-10",
            Self::Custom(s) => s,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2025-01" => Ok(Self::V2025_01),
            "2025-04" => Ok(Self::V2025_04),
            "2025-07" => Ok(Self::V2025_07),
            "2025-10" => Ok(Self::V2025_10),
            other => {
                // Accept unknown but well-formed YYYY-MM strings
                let bytes = other.as_bytes();
                let well_formed = bytes.len() == 7
                    && bytes[4] == b'-'
                    && other[..4].chars().all(|c| c.is_ascii_digit())
                    && other[5..].chars().all(|c| c.is_ascii_digit());
                if well_formed {
                    Ok(Self::Custom(other.to_string()))
                } else {
                    Err(ConfigError::InvalidApiVersion {
                        version: other.to_string(),
                    })
                }
            }
        }
    }
}

/// Credentials for one shop: domain, access token, and API version.
///
/// Services are constructed from a `Credentials` value, mirroring the
/// platform's model where a shop URL and an access token are all that is
/// needed to call the Admin API.
#[derive(Clone, Debug)]
pub struct Credentials {
    shop: ShopDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    user_agent_suffix: Option<String>,
}

impl Credentials {
    /// Creates credentials using the latest stable API version.
    #[must_use]
    pub const fn new(shop: ShopDomain, access_token: AccessToken) -> Self {
        Self {
            shop,
            access_token,
            api_version: ApiVersion::latest(),
            user_agent_suffix: None,
        }
    }

    /// Overrides the API version used in request paths.
    #[must_use]
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Appends an application identifier to the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user-agent suffix, if set.
    #[must_use]
    pub fn user_agent_suffix(&self) -> Option<&str> {
        self.user_agent_suffix.as_deref()
    }
}
