//! # Shopify REST Admin API client
//!
//! A typed client for the Shopify REST Admin API: validated configuration,
//! an authenticated transport with typed errors, `Link` header pagination
//! and resource services for access scopes, articles, orders and variants.
//!
//! ## Overview
//!
//! - [`ClientConfig`] and [`ClientConfigBuilder`]: shop, credentials, API
//!   version and host override
//! - [`RestClient`]: path normalization plus `get`/`post`/`put`/`delete`
//! - [`rest::pagination`]: single pages with cursors, or every page at once
//! - [`rest::resources`]: resource types and their service traits
//! - [`HttpError`]: transport failures, error statuses, rate limiting and
//!   decoding problems, each as its own variant
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_rest::{AccessToken, ApiVersion, ClientConfig, RestClient, ShopDomain};
//!
//! let config = ClientConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::V2024_10)
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config).unwrap();
//! assert_eq!(
//!     client.resolve_path("orders").unwrap(),
//!     "admin/api/2024-10/orders.json"
//! );
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{OrderService, VariantService};
//! use shopify_rest::HttpError;
//!
//! match client.orders().get(450_789_469, None).await {
//!     Ok(order) => println!("{:?}", order.name),
//!     Err(HttpError::Response(e)) if e.status == 404 => println!("no such order"),
//!     Err(HttpError::RateLimit(e)) => e.wait().await,
//!     Err(e) => return Err(e.into()),
//! }
//!
//! let all = match client.orders().list_all(None).await {
//!     Ok(orders) => orders,
//!     // keep what was fetched before the failure
//!     Err(partial) => partial.into_items(),
//! };
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is passed to each client explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: clients are `Send + Sync` and read-only after construction
//! - **No hidden retries**: a 429 surfaces as [`RateLimitError`] for the caller
//!   to act on

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiKey, ApiPassword, ApiVersion, ClientConfig, ClientConfigBuilder, Credentials,
    HostUrl, ShopDomain,
};
pub use error::ConfigError;

pub use clients::{
    ApiCallLimit, DecodeError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, PageCursor, Pagination, RateLimitError, RequestError,
    ResponseError, RestClient,
};

pub use rest::{Page, PartialListError, RestResource};
