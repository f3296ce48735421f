//! REST client for the Admin API.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, InvalidHttpRequestError};
use crate::config::{ApiVersion, ClientConfig};

/// REST client for one shop.
///
/// Provides generic verbs (`get`, `post`, `put`, `delete`) that normalize
/// the path, send the request and decode the JSON body. Resource services
/// are reached through accessors such as [`orders`](Self::orders).
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`; share it behind an `Arc` or by reference.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::{AccessToken, ClientConfig, RestClient, ShopDomain};
///
/// let config = ClientConfig::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("shpat_123").unwrap())
///     .build()?;
/// let client = RestClient::new(&config)?;
///
/// // Raw JSON
/// let shop: serde_json::Value = client.get("shop", None).await?;
///
/// // Typed services
/// let count = client.orders().count(None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Request`] if the HTTP backend cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            api_version: config.api_version().clone(),
        })
    }

    /// Returns the API version used in request paths.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Turns a resource path into the path sent on the wire.
    ///
    /// Leading slashes are dropped and a single `.json` suffix is ensured.
    /// Paths that start with `admin/` are used as-is; all others are placed
    /// under `admin/api/{version}/`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidPath`] if nothing is left
    /// after normalization.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// assert_eq!(client.resolve_path("/orders")?, "admin/api/2024-10/orders.json");
    /// assert_eq!(client.resolve_path("admin/oauth/access_scopes")?, "admin/oauth/access_scopes.json");
    /// ```
    pub fn resolve_path(&self, path: &str) -> Result<String, InvalidHttpRequestError> {
        let path = normalize_path(path)?;
        if has_admin_prefix(&path) {
            Ok(path)
        } else {
            Ok(format!("admin/api/{}/{path}", self.api_version))
        }
    }

    /// Sends a request and returns the raw response.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<HashMap<String, String>>,
        body: Option<Value>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(method, self.resolve_path(path)?);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.http_client.request(builder.build()?).await
    }

    /// Sends a GET request and returns the raw response, headers included.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get_response(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        self.request(HttpMethod::Get, path, query, None).await
    }

    /// Sends a GET request and decodes the whole body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body does not match `T`, plus
    /// everything [`HttpClient::request`] can return.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<T, HttpError> {
        let response = self.get_response(path, query).await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Sends a POST request with a JSON body and decodes the response body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::Serialize`] if `body` cannot be
    /// serialized, plus everything [`get`](Self::get) can return.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .request(HttpMethod::Post, path, None, Some(to_body(body)?))
            .await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Sends a PUT request with a JSON body and decodes the response body.
    ///
    /// # Errors
    ///
    /// Same as [`post`](Self::post).
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .request(HttpMethod::Put, path, None, Some(to_body(body)?))
            .await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Sends a DELETE request. Any response body is ignored.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn delete(&self, path: &str) -> Result<(), HttpError> {
        self.request(HttpMethod::Delete, path, None, None).await?;
        Ok(())
    }
}

pub(crate) fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, InvalidHttpRequestError> {
    serde_json::to_value(body).map_err(|e| InvalidHttpRequestError::Serialize {
        reason: e.to_string(),
    })
}

/// Strips leading slashes and ensures exactly one `.json` suffix.
fn normalize_path(path: &str) -> Result<String, InvalidHttpRequestError> {
    let trimmed = path.trim().trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(InvalidHttpRequestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{trimmed}.json"))
}

fn has_admin_prefix(path: &str) -> bool {
    path.starts_with("admin/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ShopDomain};

    fn client(version: ApiVersion) -> RestClient {
        let config = ClientConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .api_version(version)
            .build()
            .unwrap();
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_normalize_path_variants() {
        assert_eq!(normalize_path("orders").unwrap(), "orders.json");
        assert_eq!(normalize_path("/orders").unwrap(), "orders.json");
        assert_eq!(normalize_path("orders.json").unwrap(), "orders.json");
        assert_eq!(normalize_path("//orders/1.json").unwrap(), "orders/1.json");
    }

    #[test]
    fn test_normalize_path_rejects_empty() {
        for path in ["", "/", "/.json", "  "] {
            assert!(matches!(
                normalize_path(path),
                Err(InvalidHttpRequestError::InvalidPath { .. })
            ));
        }
    }

    #[test]
    fn test_resolve_path_adds_versioned_prefix() {
        let client = client(ApiVersion::V2024_10);
        assert_eq!(
            client.resolve_path("blogs/1/articles").unwrap(),
            "admin/api/2024-10/blogs/1/articles.json"
        );
    }

    #[test]
    fn test_resolve_path_keeps_admin_paths() {
        let client = client(ApiVersion::V2024_10);
        assert_eq!(
            client.resolve_path("admin/oauth/access_scopes.json").unwrap(),
            "admin/oauth/access_scopes.json"
        );
        assert_eq!(
            client.resolve_path("/admin/oauth/access_scopes").unwrap(),
            "admin/oauth/access_scopes.json"
        );
    }

    #[test]
    fn test_api_version_comes_from_config() {
        assert_eq!(client(ApiVersion::Unstable).api_version(), &ApiVersion::Unstable);
    }

    #[test]
    fn test_to_body_serializes() {
        let body = to_body(&serde_json::json!({"order": {"id": 1}})).unwrap();
        assert_eq!(body["order"]["id"], 1);
    }
}
