//! Response types and header parsing.
//!
//! Three response headers carry state the caller needs:
//!
//! - `X-Shopify-Shop-Api-Call-Limit: used/limit` -> [`ApiCallLimit`]
//! - `Link: <url>; rel="next", <url>; rel="previous"` -> [`Pagination`]
//! - `Retry-After: seconds` -> [`HttpResponse::retry_after`]
//!
//! All of it is parsed fresh from each response; nothing is carried over
//! between calls.

use std::collections::HashMap;
use std::time::Duration;

/// Call bucket usage from the `X-Shopify-Shop-Api-Call-Limit` header.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("32/40").unwrap();
/// assert_eq!(limit.request_count, 32);
/// assert_eq!(limit.bucket_size, 40);
/// assert_eq!(limit.remaining(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Calls currently in the bucket.
    pub request_count: u32,
    /// Bucket capacity.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses a `used/limit` header value.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (used, limit) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: used.trim().parse().ok()?,
            bucket_size: limit.trim().parse().ok()?,
        })
    }

    /// Calls left before the bucket is full.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// Where to resume a paginated listing.
///
/// A cursor holds every query parameter of one `Link` header URL and is sent
/// back verbatim as the query of the next request. Cursors only come from
/// responses; there is no public constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageCursor {
    params: HashMap<String, String>,
}

impl PageCursor {
    /// Builds a cursor from the query string of a link URL.
    ///
    /// Returns `None` when the URL has no query parameters.
    pub(crate) fn from_url(url: &str) -> Option<Self> {
        let (_, query) = url.split_once('?')?;
        let query = query.split('#').next().unwrap_or_default();

        let params: HashMap<String, String> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (percent_decode(key), percent_decode(value))
            })
            .collect();

        if params.is_empty() {
            None
        } else {
            Some(Self { params })
        }
    }

    /// Returns the query parameters for the next request.
    #[must_use]
    pub const fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Returns the `page_info` token, if the cursor carries one.
    #[must_use]
    pub fn page_info(&self) -> Option<&str> {
        self.params.get("page_info").map(String::as_str)
    }

    /// Consumes the cursor, returning its query parameters.
    #[must_use]
    pub fn into_params(self) -> HashMap<String, String> {
        self.params
    }
}

fn percent_decode(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_string(), |decoded| decoded.into_owned())
}

/// Next and previous cursors parsed from a `Link` header.
///
/// A missing header, or a header without a given relation, leaves that
/// cursor as `None`.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::Pagination;
///
/// let pagination = Pagination::parse_link_header(
///     r#"<https://shop.myshopify.com/admin/api/2024-10/orders.json?limit=2&page_info=abc>; rel="next""#,
/// );
///
/// let next = pagination.next.unwrap();
/// assert_eq!(next.page_info(), Some("abc"));
/// assert_eq!(next.params().get("limit").map(String::as_str), Some("2"));
/// assert!(pagination.previous.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Cursor for the following page.
    pub next: Option<PageCursor>,
    /// Cursor for the preceding page.
    pub previous: Option<PageCursor>,
}

impl Pagination {
    /// Parses a `Link` header value.
    ///
    /// Entries are located by their `<...>` brackets rather than by splitting
    /// on commas, since a URL may itself contain one.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();
        let mut rest = header_value;

        while let Some(open) = rest.find('<') {
            let Some(close) = rest[open..].find('>').map(|i| open + i) else {
                break;
            };
            let url = &rest[open + 1..close];
            let params_end = rest[close..].find('<').map_or(rest.len(), |i| close + i);
            let params = &rest[close + 1..params_end];
            rest = &rest[params_end..];

            let rel = params.split(';').find_map(|param| {
                let (key, value) = param.split_once('=')?;
                (key.trim().eq_ignore_ascii_case("rel"))
                    .then(|| value.trim().trim_end_matches(',').trim().trim_matches('"'))
            });

            match rel {
                Some("next") => result.next = PageCursor::from_url(url),
                Some("previous" | "prev") => result.previous = PageCursor::from_url(url),
                _ => {}
            }
        }

        result
    }

    /// Returns `true` if a following page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if a preceding page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

/// A response from the API.
///
/// Header names are lowercased. A response with an empty body (such as a
/// `204 No Content`) has a [`serde_json::Value::Null`] body.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers; a header may repeat.
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded JSON body.
    pub body: serde_json::Value,
    /// Cursors from the `Link` header.
    pub pagination: Pagination,
    /// Call bucket usage.
    pub api_call_limit: Option<ApiCallLimit>,
    /// Seconds from the `Retry-After` header.
    pub retry_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a response and parses the `Link`, call limit and
    /// `Retry-After` headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let first = |name: &str| headers.get(name).and_then(|values| values.first());

        let pagination = headers
            .get("link")
            .map(|values| Pagination::parse_link_header(&values.join(", ")))
            .unwrap_or_default();
        let api_call_limit = first("x-shopify-shop-api-call-limit")
            .map(String::as_str)
            .and_then(ApiCallLimit::parse);
        let retry_after = first("retry-after")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|seconds| Duration::try_from_secs_f64(*seconds).is_ok());

        Self {
            code,
            headers,
            body,
            pagination,
            api_call_limit,
            retry_after,
        }
    }

    /// Returns `true` for a 2xx status.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` when the body was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_null()
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }
}
