//! REST client for the Shopify Admin API.
//!
//! [`RestClient`] sits on top of [`HttpClient`](crate::clients::HttpClient)
//! and offers `get`, `post`, `put` and `delete` over normalized paths.
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/orders` -> `orders`
//! - A trailing `.json` is stripped and re-added: `orders.json` -> `orders.json`
//! - Paths starting with `admin/` skip the `admin/api/{version}/` prefix
//!
//! # Retry Behavior
//!
//! Requests are attempted once. A 429 surfaces as
//! [`HttpError::RateLimit`](crate::clients::HttpError::RateLimit) carrying the
//! server's wait time; retrying is left to the caller.

mod client;

pub use client::RestClient;
pub(crate) use client::to_body;
