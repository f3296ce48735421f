//! HTTP transport for the Shopify Admin API.
//!
//! This module turns a [`ClientConfig`](crate::ClientConfig) into an
//! authenticated client and classifies every outcome into a typed result.
//!
//! # Overview
//!
//! - [`HttpClient`]: sends one request, no retries
//! - [`HttpRequest`]: a request to be sent
//! - [`HttpResponse`]: a response with parsed `Link`, call limit and `Retry-After` headers
//! - [`HttpError`]: every way a call can fail
//! - [`rest::RestClient`]: path normalization and JSON verbs on top of [`HttpClient`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "admin/api/2024-10/orders.json")
//!     .query_param("limit", "50")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! if let Some(next) = response.pagination.next {
//!     println!("more orders at page_info={:?}", next.page_info());
//! }
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    DecodeError, HttpError, InvalidHttpRequestError, RateLimitError, RequestError, ResponseError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse, PageCursor, Pagination};

pub use rest::RestClient;
