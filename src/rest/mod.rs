//! Typed access to Admin API resources.
//!
//! This module layers resource semantics over [`RestClient`](crate::RestClient):
//!
//! - [`envelope`]: the single named top-level field around every payload
//! - [`flexible`]: serde adapters for fields whose JSON type varies
//! - [`pagination`]: `Link` header cursors, single pages and full listings
//! - [`RestResource`]: envelope keys plus generic fetch/create/update helpers
//! - [`resources`]: the resource types and their services
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{ListOptions, OrderListOptions, OrderService};
//!
//! let options = OrderListOptions {
//!     list: ListOptions { limit: Some(50), ..Default::default() },
//!     ..Default::default()
//! };
//! let page = client.orders().list_with_pagination(Some(&options)).await?;
//!
//! for order in &page.items {
//!     println!("{:?} {:?}", order.name, order.total_price);
//! }
//!
//! if let Some(cursor) = page.next_cursor() {
//!     let next = client.orders().list_page(cursor).await?;
//! }
//! ```

pub mod envelope;
pub mod flexible;
pub mod pagination;
mod resource;
pub mod resources;

pub use pagination::{list_all, list_page, Page, PartialListError};
pub use resource::{serialize_to_query, RestResource};
pub(crate) use resource::{send, to_query};
