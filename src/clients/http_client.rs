//! Authenticated transport for the Admin API.
//!
//! [`HttpClient`] sends one [`HttpRequest`] and turns the outcome into either
//! an [`HttpResponse`] or a typed [`HttpError`]. It does not retry.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, RateLimitError, ResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::ClientConfig;

/// Crate version, reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sends requests to one shop.
///
/// Every request carries:
/// - `User-Agent`, with the configured prefix if any
/// - `Accept: application/json`
/// - `Content-Type: application/json` when there is a body
/// - the authentication header from the configured [`Credentials`](crate::Credentials)
///
/// Status codes map to results as follows:
/// - 2xx: `Ok(HttpResponse)`, empty bodies decode to `Value::Null`
/// - 429: [`HttpError::RateLimit`]
/// - other 4xx/5xx: [`HttpError::Response`]
/// - no response at all: [`HttpError::Request`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Its state is read-only after construction,
/// so one client can serve concurrent calls.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for the shop described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Request`] if the TLS backend cannot be initialized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::{AccessToken, ClientConfig, ShopDomain};
    /// use shopify_rest::clients::HttpClient;
    ///
    /// let config = ClientConfig::builder()
    ///     .shop(ShopDomain::new("my-store").unwrap())
    ///     .access_token(AccessToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config).unwrap();
    /// assert_eq!(client.base_uri(), "https://my-store.myshopify.com");
    /// ```
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shopify REST Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let (auth_name, auth_value) = config.credentials().header();
        default_headers.insert(auth_name.to_string(), auth_value);

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: config.base_uri(),
            default_headers,
        })
    }

    /// Returns the origin requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if the request fails validation,
    /// [`HttpError::Request`] on a transport failure,
    /// [`HttpError::RateLimit`] on a 429,
    /// [`HttpError::Response`] on any other non-2xx status and
    /// [`HttpError::Decode`] if a 2xx body is not JSON.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_uri, request.path.trim_start_matches('/'));
        tracing::debug!(method = %request.http_method, path = %request.path, "sending request");

        let mut builder = self.client.request(request.http_method.as_reqwest(), &url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                builder = builder.header(key, value);
            }
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        if let Some(body) = &request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let text = res.text().await?;

        let request_id = headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .cloned();

        if !(200..=299).contains(&code) {
            let response = HttpResponse::new(code, headers, serde_json::Value::Null);
            return Err(Self::classify_error(&request, &response, &text, request_id));
        }

        let body = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text)?
        };
        let response = HttpResponse::new(code, headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                path = %request.path,
                reason,
                "deprecated API call"
            );
        }
        if let Some(limit) = response.api_call_limit {
            tracing::debug!(
                status = code,
                used = limit.request_count,
                bucket = limit.bucket_size,
                "received response"
            );
        } else {
            tracing::debug!(status = code, "received response");
        }

        Ok(response)
    }

    fn classify_error(
        request: &HttpRequest,
        response: &HttpResponse,
        text: &str,
        request_id: Option<String>,
    ) -> HttpError {
        if response.code == 429 {
            let retry_after = response
                .retry_after
                .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok())
                .unwrap_or(RateLimitError::DEFAULT_RETRY_AFTER);
            tracing::warn!(
                path = %request.path,
                retry_after = retry_after.as_secs_f64(),
                "rate limited"
            );
            return HttpError::RateLimit(RateLimitError {
                retry_after,
                api_call_limit: response.api_call_limit,
                request_id,
            });
        }

        let error = ResponseError::from_body(response.code, text, request_id.as_deref());
        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = error.status,
            error = %error.message,
            "request failed"
        );
        HttpError::Response(error)
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(name.as_str().to_lowercase()).or_default().push(value);
        }
        result
    }
}
