//! Client configuration.
//!
//! # Overview
//!
//! - [`ClientConfig`]: everything a [`RestClient`](crate::RestClient) needs, fixed at construction
//! - [`ClientConfigBuilder`]: fluent builder with required-field checks
//! - [`Credentials`]: how requests are authenticated
//! - [`ShopDomain`], [`AccessToken`], [`ApiKey`], [`ApiPassword`], [`HostUrl`]: validated newtypes
//! - [`ApiVersion`]: the Admin API version used in request paths
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{AccessToken, ApiVersion, ClientConfig, Credentials, ShopDomain};
//!
//! let config = ClientConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .credentials(Credentials::AccessToken(AccessToken::new("shpat_123").unwrap()))
//!     .api_version(ApiVersion::V2024_10)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ApiKey, ApiPassword, HostUrl, ShopDomain};
pub use version::ApiVersion;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::ConfigError;

/// How requests to the shop are authenticated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// An OAuth or custom app access token, sent as `X-Shopify-Access-Token`.
    AccessToken(AccessToken),
    /// Private app key and password, sent as HTTP basic auth.
    Basic {
        /// The private app API key.
        api_key: ApiKey,
        /// The private app password.
        password: ApiPassword,
    },
}

impl Credentials {
    /// Returns the header name and value that authenticate a request.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::{AccessToken, Credentials};
    ///
    /// let credentials = Credentials::AccessToken(AccessToken::new("token").unwrap());
    /// assert_eq!(
    ///     credentials.header(),
    ///     ("X-Shopify-Access-Token", "token".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn header(&self) -> (&'static str, String) {
        match self {
            Self::AccessToken(token) => ("X-Shopify-Access-Token", token.as_ref().to_string()),
            Self::Basic { api_key, password } => {
                let encoded =
                    STANDARD.encode(format!("{}:{}", api_key.as_ref(), password.as_ref()));
                ("Authorization", format!("Basic {encoded}"))
            }
        }
    }
}

/// Settings for talking to one shop.
///
/// `ClientConfig` is `Clone`, `Send` and `Sync`; nothing in it changes after
/// [`ClientConfigBuilder::build`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    shop: ShopDomain,
    credentials: Credentials,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the alternate API host, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the origin every request URL starts with.
    ///
    /// This is the configured API host when set, otherwise
    /// `https://{shop}`.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://{}", self.shop.as_ref()),
            HostUrl::origin,
        )
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for [`ClientConfig`].
///
/// `shop` and `credentials` are required.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `api_host`: `None` (requests go to the shop domain)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    shop: Option<ShopDomain>,
    credentials: Option<Credentials>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Shorthand for [`Credentials::AccessToken`].
    #[must_use]
    pub fn access_token(self, token: AccessToken) -> Self {
        self.credentials(Credentials::AccessToken(token))
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sends requests to this host instead of the shop domain.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Prepends `prefix | ` to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `credentials` was never set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let credentials = self
            .credentials
            .ok_or(ConfigError::MissingRequiredField {
                field: "credentials",
            })?;

        Ok(ClientConfig {
            shop,
            credentials,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
