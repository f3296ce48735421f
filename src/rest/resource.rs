//! The [`RestResource`] trait shared by every resource type.
//!
//! A resource names its JSON envelope keys and in return gets generic
//! helpers for the request shapes the Admin API uses everywhere:
//!
//! | Helper | Request | Envelope |
//! |--------|---------|----------|
//! | [`fetch`](RestResource::fetch) | `GET {path}` | `{NAME: {...}}` |
//! | [`fetch_page`](RestResource::fetch_page) | `GET {path}` | `{PLURAL: [...]}` |
//! | [`fetch_all`](RestResource::fetch_all) | `GET {path}` for every page | `{PLURAL: [...]}` |
//! | [`create_at`](RestResource::create_at) | `POST {path}` | `{NAME: {...}}` both ways |
//! | [`update_at`](RestResource::update_at) | `PUT {path}` | `{NAME: {...}}` both ways |
//!
//! Services build the path; the helpers handle envelopes and decoding.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use shopify_rest::rest::RestResource;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Redirect {
//!     pub id: Option<u64>,
//!     pub path: Option<String>,
//! }
//!
//! impl RestResource for Redirect {
//!     const NAME: &'static str = "redirect";
//!     const PLURAL: &'static str = "redirects";
//! }
//!
//! let redirect = Redirect::fetch(&client, "redirects/7", None).await?;
//! let all = Redirect::fetch_all(&client, "redirects", None).await?;
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpError, HttpMethod, InvalidHttpRequestError, RestClient};
use crate::rest::envelope::{unwrap_envelope, wrap};
use crate::rest::pagination::{self, Page, PartialListError};

/// A resource with a singular and a plural JSON envelope.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Send + Sync + Sized {
    /// Envelope key for one record (e.g. `"order"`).
    const NAME: &'static str;

    /// Envelope key for a list (e.g. `"orders"`).
    const PLURAL: &'static str;

    /// Fetches one record.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`]; a body without the `NAME` envelope is
    /// [`HttpError::Decode`].
    async fn fetch(
        client: &RestClient,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Self, HttpError> {
        let response = client.get_response(path, query).await?;
        Ok(unwrap_envelope(response.body, Self::NAME)?)
    }

    /// Fetches one page of records.
    ///
    /// # Errors
    ///
    /// See [`pagination::list_page`].
    async fn fetch_page(
        client: &RestClient,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Page<Self>, HttpError> {
        pagination::list_page(client, path, Self::PLURAL, query).await
    }

    /// Fetches every page of records.
    ///
    /// # Errors
    ///
    /// See [`pagination::list_all`].
    async fn fetch_all(
        client: &RestClient,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Vec<Self>, PartialListError<Self>> {
        pagination::list_all(client, path, Self::PLURAL, query).await
    }

    /// Sends `self` wrapped in its envelope with POST and decodes the result.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`], including 422 validation failures as
    /// [`HttpError::Response`].
    async fn create_at(&self, client: &RestClient, path: &str) -> Result<Self, HttpError> {
        send(client, HttpMethod::Post, path, wrap(Self::NAME, self)?).await
    }

    /// Sends `self` wrapped in its envelope with PUT and decodes the result.
    ///
    /// # Errors
    ///
    /// Same as [`create_at`](Self::create_at).
    async fn update_at(&self, client: &RestClient, path: &str) -> Result<Self, HttpError> {
        send(client, HttpMethod::Put, path, wrap(Self::NAME, self)?).await
    }
}

/// Sends `body` with `method` and decodes the `R::NAME` envelope of the reply.
///
/// Used directly for action endpoints (`cancel`, `close`, `complete` ...)
/// whose request body is not the resource itself.
pub(crate) async fn send<R: RestResource>(
    client: &RestClient,
    method: HttpMethod,
    path: &str,
    body: Value,
) -> Result<R, HttpError> {
    let response = client.request(method, path, None, Some(body)).await?;
    Ok(unwrap_envelope(response.body, R::NAME)?)
}

/// Serializes an options struct to query parameters.
///
/// `None` fields are skipped, arrays become comma-separated lists and
/// nested objects are sent as JSON text.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::Serialize`] if `params` does not
/// serialize to a JSON object.
pub fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, InvalidHttpRequestError> {
    let value = serde_json::to_value(params).map_err(|e| InvalidHttpRequestError::Serialize {
        reason: e.to_string(),
    })?;

    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(HashMap::new()),
        other => {
            return Err(InvalidHttpRequestError::Serialize {
                reason: format!("query parameters must be an object, got {other}"),
            })
        }
    };

    let mut query = HashMap::new();
    for (key, val) in map {
        match val {
            Value::Null => {}
            Value::String(s) => {
                query.insert(key, s);
            }
            Value::Number(n) => {
                query.insert(key, n.to_string());
            }
            Value::Bool(b) => {
                query.insert(key, b.to_string());
            }
            Value::Array(arr) => {
                let values: Vec<String> = arr
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                if !values.is_empty() {
                    query.insert(key, values.join(","));
                }
            }
            Value::Object(_) => {
                query.insert(key, val.to_string());
            }
        }
    }

    Ok(query)
}

/// Serializes optional options into an optional query, dropping empty maps.
pub(crate) fn to_query<T: Serialize>(
    options: Option<&T>,
) -> Result<Option<HashMap<String, String>>, InvalidHttpRequestError> {
    Ok(options
        .map(serialize_to_query)
        .transpose()?
        .filter(|query| !query.is_empty()))
}
