//! Metafields attached to another resource.
//!
//! Metafields are not reached on their own: every call goes through an
//! owner, e.g. `orders/{order_id}/metafields.json`. [`MetafieldServiceOp`]
//! captures the owner once so the same service serves orders, variants and
//! any other owner kind.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{Metafield, MetafieldService};
//!
//! let metafields = client.orders().metafields(450_789_469);
//!
//! let created = metafields
//!     .create(&Metafield {
//!         namespace: Some("warehouse".to_string()),
//!         key: Some("bin".to_string()),
//!         value: Some("A-15".to_string()),
//!         metafield_type: Some("single_line_text_field".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let count = metafields.count(None).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpError, InvalidHttpRequestError, RestClient};
use crate::rest::pagination;
use crate::rest::resources::common::{CountOptions, FieldsOptions};
use crate::rest::{to_query, RestResource};

/// A custom field stored on a resource.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Metafield {
    /// The unique identifier of the metafield.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Groups related metafields; use your app's namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Identifies the metafield within its namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The stored value, formatted according to `metafield_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// The value type (e.g. `single_line_text_field`, `number_integer`, `json`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    /// A description of the stored information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The ID of the owning resource.
    #[serde(skip_serializing)]
    pub owner_id: Option<u64>,

    /// The kind of the owning resource (e.g. `order`).
    #[serde(skip_serializing)]
    pub owner_resource: Option<String>,

    /// When the metafield was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the metafield was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The admin GraphQL API ID.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Metafield {
    const NAME: &'static str = "metafield";
    const PLURAL: &'static str = "metafields";
}

/// Filters for listing metafields.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct MetafieldListOptions {
    /// Maximum records per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Only metafields with an ID greater than this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Only metafields created at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Only metafields created at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Only metafields updated at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Only metafields updated at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Only metafields in this namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Only metafields with this key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Only metafields of this type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    /// Only these fields are returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// Metafield operations for one owner.
#[allow(async_fn_in_trait)]
pub trait MetafieldService {
    /// Lists the owner's metafields.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn list(&self, options: Option<&MetafieldListOptions>) -> Result<Vec<Metafield>, HttpError>;

    /// Counts the owner's metafields.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, HttpError>;

    /// Fetches one metafield.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with status 404 if it does not exist.
    async fn get(&self, metafield_id: u64, options: Option<&FieldsOptions>) -> Result<Metafield, HttpError>;

    /// Creates a metafield on the owner.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with status 422 on validation failure.
    async fn create(&self, metafield: &Metafield) -> Result<Metafield, HttpError>;

    /// Updates a metafield, addressed by `metafield.id`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingId`] if `metafield.id` is
    /// `None`, plus any [`HttpError`] from the request.
    async fn update(&self, metafield: &Metafield) -> Result<Metafield, HttpError>;

    /// Deletes a metafield.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn delete(&self, metafield_id: u64) -> Result<(), HttpError>;
}

/// [`MetafieldService`] bound to one owner, such as `orders/450789469`.
#[derive(Debug, Clone, Copy)]
pub struct MetafieldServiceOp<'a> {
    client: &'a RestClient,
    owner: &'static str,
    owner_id: u64,
}

impl<'a> MetafieldServiceOp<'a> {
    /// Creates a service for metafields under `{owner}/{owner_id}`.
    ///
    /// `owner` is the plural path segment of the owning resource, e.g.
    /// `"orders"` or `"variants"`.
    #[must_use]
    pub const fn new(client: &'a RestClient, owner: &'static str, owner_id: u64) -> Self {
        Self {
            client,
            owner,
            owner_id,
        }
    }

    /// Returns the owner's path segment.
    #[must_use]
    pub const fn owner(&self) -> &'static str {
        self.owner
    }

    /// Returns the owner's ID.
    #[must_use]
    pub const fn owner_id(&self) -> u64 {
        self.owner_id
    }

    fn collection_path(&self) -> String {
        format!("{}/{}/metafields", self.owner, self.owner_id)
    }

    fn member_path(&self, metafield_id: u64) -> String {
        format!("{}/{metafield_id}", self.collection_path())
    }
}

impl MetafieldService for MetafieldServiceOp<'_> {
    async fn list(&self, options: Option<&MetafieldListOptions>) -> Result<Vec<Metafield>, HttpError> {
        let page = Metafield::fetch_page(self.client, &self.collection_path(), to_query(options)?).await?;
        Ok(page.items)
    }

    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, HttpError> {
        let path = format!("{}/count", self.collection_path());
        pagination::count(self.client, &path, to_query(options)?).await
    }

    async fn get(&self, metafield_id: u64, options: Option<&FieldsOptions>) -> Result<Metafield, HttpError> {
        Metafield::fetch(self.client, &self.member_path(metafield_id), to_query(options)?).await
    }

    async fn create(&self, metafield: &Metafield) -> Result<Metafield, HttpError> {
        metafield.create_at(self.client, &self.collection_path()).await
    }

    async fn update(&self, metafield: &Metafield) -> Result<Metafield, HttpError> {
        let id = metafield.id.ok_or(InvalidHttpRequestError::MissingId {
            resource: Metafield::NAME,
        })?;
        metafield.update_at(self.client, &self.member_path(id)).await
    }

    async fn delete(&self, metafield_id: u64) -> Result<(), HttpError> {
        self.client.delete(&self.member_path(metafield_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ClientConfig, ShopDomain};
    use serde_json::json;

    fn client() -> RestClient {
        let config = ClientConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_paths_follow_owner() {
        let client = client();
        let service = MetafieldServiceOp::new(&client, "variants", 808);

        assert_eq!(service.owner(), "variants");
        assert_eq!(service.owner_id(), 808);
        assert_eq!(service.collection_path(), "variants/808/metafields");
        assert_eq!(service.member_path(5), "variants/808/metafields/5");
    }

    #[test]
    fn test_read_only_fields_are_not_sent() {
        let metafield: Metafield = serde_json::from_value(json!({
            "id": 721,
            "namespace": "inventory",
            "key": "warehouse",
            "value": "25",
            "type": "number_integer",
            "owner_id": 450_789_469,
            "owner_resource": "order",
            "created_at": "2024-01-15T10:30:00Z"
        }))
        .unwrap();

        assert_eq!(metafield.metafield_type.as_deref(), Some("number_integer"));
        assert_eq!(metafield.owner_resource.as_deref(), Some("order"));

        let body = serde_json::to_value(&metafield).unwrap();
        assert_eq!(body["id"], 721);
        assert_eq!(body["type"], "number_integer");
        assert!(body.get("owner_id").is_none());
        assert!(body.get("created_at").is_none());
    }

    #[tokio::test]
    async fn test_update_without_id_is_rejected_before_sending() {
        let client = client();
        let service = MetafieldServiceOp::new(&client, "orders", 1);
        let result = service.update(&Metafield::default()).await;

        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(InvalidHttpRequestError::MissingId { resource: "metafield" }))
        ));
    }
}
