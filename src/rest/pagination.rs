//! Cursor-based pagination.
//!
//! Listing endpoints return one page per call plus a `Link` header that
//! points at the neighbouring pages. [`list_page`] fetches one page and
//! exposes its cursors; [`list_all`] follows `next` cursors until the last
//! page.
//!
//! A cursor is used verbatim: the query of a follow-up request is exactly
//! the cursor's parameters, nothing from the original query is merged in.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use serde::de::DeserializeOwned;

use crate::clients::{ApiCallLimit, HttpError, PageCursor, Pagination, RestClient};
use crate::rest::envelope::unwrap_envelope;

/// One page of a listing.
#[derive(Clone, Debug)]
pub struct Page<T> {
    /// Records in the order the server returned them.
    pub items: Vec<T>,
    /// Cursors for the neighbouring pages.
    pub pagination: Pagination,
    /// Call bucket usage reported with this page.
    pub api_call_limit: Option<ApiCallLimit>,
}

impl<T> Page<T> {
    /// Returns the cursor for the following page.
    #[must_use]
    pub const fn next_cursor(&self) -> Option<&PageCursor> {
        self.pagination.next.as_ref()
    }

    /// Returns the cursor for the preceding page.
    #[must_use]
    pub const fn previous_cursor(&self) -> Option<&PageCursor> {
        self.pagination.previous.as_ref()
    }

    /// Returns `true` if a following page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.pagination.has_next()
    }

    /// Consumes the page, returning its records.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// A full listing that stopped part-way.
///
/// Carries every record fetched before the failing page so callers can keep
/// or discard partial results.
#[derive(Debug)]
pub struct PartialListError<T> {
    /// Records from the pages fetched successfully, in order.
    pub items: Vec<T>,
    /// The error that stopped the listing.
    pub source: HttpError,
}

impl<T> PartialListError<T> {
    /// Consumes the error, returning the records fetched so far.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> fmt::Display for PartialListError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Listing stopped after {} records: {}",
            self.items.len(),
            self.source
        )
    }
}

impl<T: fmt::Debug> Error for PartialListError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl<T> From<PartialListError<T>> for HttpError {
    fn from(error: PartialListError<T>) -> Self {
        error.source
    }
}

/// Fetches one page from `path`, decoding the records under `key`.
///
/// # Errors
///
/// Returns any [`HttpError`] from the request, or [`HttpError::Decode`] if
/// the body has no `key` envelope.
///
/// # Example
///
/// ```rust,ignore
/// let page: Page<Order> = list_page(&client, "orders", "orders", None).await?;
/// if let Some(next) = page.next_cursor() {
///     let following: Page<Order> =
///         list_page(&client, "orders", "orders", Some(next.params().clone())).await?;
/// }
/// ```
pub async fn list_page<T: DeserializeOwned>(
    client: &RestClient,
    path: &str,
    key: &str,
    query: Option<HashMap<String, String>>,
) -> Result<Page<T>, HttpError> {
    let response = client.get_response(path, query).await?;
    let items = unwrap_envelope(response.body, key)?;
    Ok(Page {
        items,
        pagination: response.pagination,
        api_call_limit: response.api_call_limit,
    })
}

/// Fetches every page from `path`, one request at a time.
///
/// The first request uses `query`; each later request uses exactly the
/// previous page's `next` cursor. The walk ends at the first page without a
/// `next` cursor.
///
/// # Errors
///
/// Returns [`PartialListError`] with the records gathered so far when any
/// page fails.
pub async fn list_all<T: DeserializeOwned>(
    client: &RestClient,
    path: &str,
    key: &str,
    query: Option<HashMap<String, String>>,
) -> Result<Vec<T>, PartialListError<T>> {
    let mut items = Vec::new();
    let mut query = query;
    let mut pages = 0_usize;

    loop {
        let page = match list_page::<T>(client, path, key, query.take()).await {
            Ok(page) => page,
            Err(source) => {
                tracing::warn!(path, pages, records = items.len(), "listing stopped early");
                return Err(PartialListError { items, source });
            }
        };
        pages += 1;
        items.extend(page.items);

        match page.pagination.next {
            Some(cursor) => query = Some(cursor.into_params()),
            None => break,
        }
    }

    tracing::debug!(path, pages, records = items.len(), "listing complete");
    Ok(items)
}

/// Fetches a `{"count": n}` endpoint.
///
/// # Errors
///
/// Returns any [`HttpError`] from the request, or [`HttpError::Decode`] if
/// the body has no `count` field.
pub async fn count(
    client: &RestClient,
    path: &str,
    query: Option<HashMap<String, String>>,
) -> Result<u64, HttpError> {
    let response = client.get_response(path, query).await?;
    Ok(unwrap_envelope(response.body, "count")?)
}
