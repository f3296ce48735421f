//! Error types for the HTTP layer.
//!
//! Every failure a request can run into maps onto one [`HttpError`] variant:
//!
//! - [`RequestError`]: the request never produced a response (DNS, TLS, connection, timeout)
//! - [`ResponseError`]: a 4xx/5xx response other than 429, with the decoded error body
//! - [`RateLimitError`]: a 429 response, with the server's retry hint
//! - [`DecodeError`]: a 2xx response whose body did not have the expected shape
//! - [`InvalidHttpRequestError`]: the request was rejected before it was sent
//!
//! None of these are retried by the client. A caller that wants to retry a
//! rate-limited call can wait on [`RateLimitError::wait`] and issue it again.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::HttpError;
//!
//! match client.orders().get(450789469, None).await {
//!     Ok(order) => println!("{:?}", order.name),
//!     Err(HttpError::RateLimit(e)) => e.wait().await,
//!     Err(HttpError::Response(e)) if e.status == 404 => println!("gone"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::clients::http_response::ApiCallLimit;

/// The request failed before a response arrived.
#[derive(Debug, Error)]
#[error("Request failed: {source}")]
pub struct RequestError {
    /// The underlying transport error.
    #[from]
    pub source: reqwest::Error,
}

impl RequestError {
    /// Returns `true` if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.source.is_timeout()
    }

    /// Returns `true` if the connection could not be established.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        self.source.is_connect()
    }
}

/// A non-2xx response, other than 429.
///
/// The platform reports errors in a handful of shapes, all of which are
/// folded into `errors` (field name to messages) and a flat `message`:
///
/// | Body | `errors` | `message` |
/// |------|----------|-----------|
/// | `{"errors": "Not Found"}` | empty | `Not Found` |
/// | `{"errors": {"title": ["can't be blank"]}}` | `title => [can't be blank]` | `title: can't be blank` |
/// | `{"errors": ["a", "b"]}` | `base => [a, b]` | `a; b` |
/// | `{"error": "x", "error_description": "y"}` | empty | `x: y` |
/// | non-JSON text | empty | the text |
///
/// # Example
///
/// ```rust
/// use shopify_rest::ResponseError;
///
/// let error = ResponseError::from_body(422, r#"{"errors":{"title":["can't be blank"]}}"#, None);
/// assert_eq!(error.status, 422);
/// assert_eq!(error.errors["title"], vec!["can't be blank".to_string()]);
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Response error {status}: {message}")]
pub struct ResponseError {
    /// The HTTP status code.
    pub status: u16,
    /// A single human-readable summary of the error body.
    pub message: String,
    /// Field-level messages. General messages are filed under `base`.
    pub errors: HashMap<String, Vec<String>>,
    /// The `X-Request-Id` header, for support requests.
    pub request_id: Option<String>,
}

impl ResponseError {
    /// Decodes an error response body.
    #[must_use]
    pub fn from_body(status: u16, body: &str, request_id: Option<&str>) -> Self {
        let request_id = request_id.map(ToString::to_string);

        let parsed = serde_json::from_str::<Value>(body).ok();
        let (message, errors) = match parsed.as_ref() {
            Some(Value::Object(map)) if map.contains_key("errors") => {
                parse_errors_field(&map["errors"])
            }
            Some(Value::Object(map)) if map.contains_key("error") => {
                let error = value_text(&map["error"]);
                let message = match map.get("error_description") {
                    Some(description) => format!("{error}: {}", value_text(description)),
                    None => error,
                };
                (message, HashMap::new())
            }
            _ => (body.trim().to_string(), HashMap::new()),
        };

        let message = if message.is_empty() {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            message
        };

        Self {
            status,
            message,
            errors,
            request_id,
        }
    }
}

fn parse_errors_field(errors: &Value) -> (String, HashMap<String, Vec<String>>) {
    match errors {
        Value::Object(fields) => {
            let mut map: HashMap<String, Vec<String>> = HashMap::new();
            for (field, messages) in fields {
                let messages = match messages {
                    Value::Array(items) => items.iter().map(value_text).collect(),
                    other => vec![value_text(other)],
                };
                map.insert(field.clone(), messages);
            }

            let mut fields: Vec<&String> = map.keys().collect();
            fields.sort();
            let message = fields
                .into_iter()
                .map(|field| {
                    let joined = map[field].join(", ");
                    if field == "base" {
                        joined
                    } else {
                        format!("{field}: {joined}")
                    }
                })
                .collect::<Vec<_>>()
                .join("; ");
            (message, map)
        }
        Value::Array(items) => {
            let messages: Vec<String> = items.iter().map(value_text).collect();
            let message = messages.join("; ");
            (message, HashMap::from([("base".to_string(), messages)]))
        }
        other => (value_text(other), HashMap::new()),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// The shop's API call bucket is full (HTTP 429).
///
/// The client never retries on its own. `retry_after` comes from the
/// `Retry-After` header, or one second when the header is absent.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Exceeded API rate limit, retry after {:.1}s", .retry_after.as_secs_f64())]
pub struct RateLimitError {
    /// How long the server asked the caller to wait.
    pub retry_after: Duration,
    /// The call bucket reported on the 429 response, if any.
    pub api_call_limit: Option<ApiCallLimit>,
    /// The `X-Request-Id` header.
    pub request_id: Option<String>,
}

impl RateLimitError {
    /// Wait used when a 429 carries no `Retry-After` header.
    pub const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(1);

    /// Sleeps for [`retry_after`](Self::retry_after).
    pub async fn wait(&self) {
        tokio::time::sleep(self.retry_after).await;
    }
}

/// A successful response body did not have the expected shape.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body was not valid JSON, or did not match the target type.
    #[error("Failed to decode response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The body lacked the top-level field wrapping the payload.
    #[error("Response body is missing the '{key}' field")]
    MissingField {
        /// The expected envelope key.
        key: String,
    },
}

/// The request was rejected before it was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The path is empty after normalization.
    #[error("Invalid REST API path: '{path}'")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },

    /// An update was requested for a record that has no ID.
    #[error("Cannot update a {resource} without an id")]
    MissingId {
        /// The resource's envelope key.
        resource: &'static str,
    },

    /// The body or query parameters could not be serialized.
    #[error("Failed to serialize request: {reason}")]
    Serialize {
        /// The serializer's message.
        reason: String,
    },
}

/// Any error produced while making an API call.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Connection or timeout failure.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Non-2xx response other than 429.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// 429 response.
    #[error(transparent)]
    RateLimit(#[from] RateLimitError),

    /// Malformed or unexpected success body.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl From<reqwest::Error> for HttpError {
    fn from(source: reqwest::Error) -> Self {
        Self::Request(RequestError { source })
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode(DecodeError::Json(source))
    }
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.status),
            Self::RateLimit(_) => Some(429),
            Self::Request(e) => e.source.status().map(|s| s.as_u16()),
            Self::Decode(_) | Self::InvalidRequest(_) => None,
        }
    }

    /// Returns the `X-Request-Id` of the failed response, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.request_id.as_deref(),
            Self::RateLimit(e) => e.request_id.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_are_decoded() {
        let error = ResponseError::from_body(
            422,
            r#"{"errors":{"title":["can't be blank"],"price":["must be a number"]}}"#,
            Some("req-1"),
        );

        assert_eq!(error.status, 422);
        assert_eq!(error.errors.len(), 2);
        assert_eq!(error.errors["title"], vec!["can't be blank".to_string()]);
        assert_eq!(error.message, "price: must be a number; title: can't be blank");
        assert_eq!(error.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn test_string_errors_become_message() {
        let error = ResponseError::from_body(404, r#"{"errors":"Not Found"}"#, None);
        assert_eq!(error.message, "Not Found");
        assert!(error.errors.is_empty());
        assert_eq!(error.to_string(), "Response error 404: Not Found");
    }

    #[test]
    fn test_array_errors_are_filed_under_base() {
        let error = ResponseError::from_body(400, r#"{"errors":["one","two"]}"#, None);
        assert_eq!(error.errors["base"], vec!["one".to_string(), "two".to_string()]);
        assert_eq!(error.message, "one; two");
    }

    #[test]
    fn test_single_string_field_error() {
        let error = ResponseError::from_body(422, r#"{"errors":{"base":"Order is closed"}}"#, None);
        assert_eq!(error.errors["base"], vec!["Order is closed".to_string()]);
        assert_eq!(error.message, "Order is closed");
    }

    #[test]
    fn test_oauth_style_error() {
        let error = ResponseError::from_body(
            401,
            r#"{"error":"invalid_token","error_description":"expired"}"#,
            None,
        );
        assert_eq!(error.message, "invalid_token: expired");
    }

    #[test]
    fn test_non_json_body_is_kept_as_text() {
        let error = ResponseError::from_body(502, "<html>Bad Gateway</html>\n", None);
        assert_eq!(error.message, "<html>Bad Gateway</html>");
    }

    #[test]
    fn test_empty_body_uses_reason_phrase() {
        let error = ResponseError::from_body(503, "", None);
        assert_eq!(error.message, "Service Unavailable");
    }

    #[test]
    fn test_rate_limit_display() {
        let error = RateLimitError {
            retry_after: Duration::from_millis(2500),
            api_call_limit: None,
            request_id: None,
        };
        assert_eq!(error.to_string(), "Exceeded API rate limit, retry after 2.5s");
    }

    #[test]
    fn test_http_error_status_and_request_id() {
        let error: HttpError = ResponseError::from_body(404, "", Some("abc")).into();
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.request_id(), Some("abc"));

        let error: HttpError = RateLimitError {
            retry_after: RateLimitError::DEFAULT_RETRY_AFTER,
            api_call_limit: None,
            request_id: Some("rl".to_string()),
        }
        .into();
        assert_eq!(error.status(), Some(429));
        assert_eq!(error.request_id(), Some("rl"));

        let error: HttpError = DecodeError::MissingField {
            key: "orders".to_string(),
        }
        .into();
        assert_eq!(error.status(), None);
        assert_eq!(
            error.to_string(),
            "Response body is missing the 'orders' field"
        );
    }

    #[test]
    fn test_invalid_request_error_messages() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[tokio::test]
    async fn test_rate_limit_wait_sleeps() {
        let error = RateLimitError {
            retry_after: Duration::from_millis(10),
            api_call_limit: None,
            request_id: None,
        };
        let start = std::time::Instant::now();
        error.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
