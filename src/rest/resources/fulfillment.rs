//! Fulfillments of an order.
//!
//! Like metafields, fulfillments live under their owner:
//! `orders/{order_id}/fulfillments.json`. [`FulfillmentServiceOp`] captures
//! the owner and adds the lifecycle actions `complete`, `transition` (reopen)
//! and `cancel`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::{HttpError, HttpMethod, InvalidHttpRequestError, RestClient};
use crate::rest::pagination;
use crate::rest::resources::common::{Address, CountOptions, FieldsOptions, LineItem, ListOptions};
use crate::rest::{send, to_query, RestResource};

/// The state of a fulfillment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    /// Created, not yet processed.
    Pending,
    /// Being processed.
    Open,
    /// Completed.
    Success,
    /// Cancelled.
    Cancelled,
    /// Failed with an error.
    Error,
    /// Failed.
    Failure,
    /// A value this client does not list.
    #[serde(other)]
    Unknown,
}

/// Carrier-reported shipment progress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    /// Label printed.
    LabelPrinted,
    /// Label purchased.
    LabelPurchased,
    /// Delivery attempted.
    AttemptedDelivery,
    /// Waiting for pickup.
    ReadyForPickup,
    /// Carrier confirmed.
    Confirmed,
    /// In transit.
    InTransit,
    /// Out for delivery.
    OutForDelivery,
    /// Delivered.
    Delivered,
    /// Failed.
    Failure,
    /// A value this client does not list.
    #[serde(other)]
    Unknown,
}

/// A shipment of some or all of an order's line items.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Fulfillment {
    /// The unique identifier of the fulfillment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The owning order.
    #[serde(skip_serializing)]
    pub order_id: Option<u64>,

    /// Display name, e.g. `#1001.1`.
    #[serde(skip_serializing)]
    pub name: Option<String>,

    /// Fulfillment state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FulfillmentStatus>,

    /// Handle of the fulfillment service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Location the items ship from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    /// Carrier-reported progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_status: Option<ShipmentStatus>,

    /// Carrier name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_company: Option<String>,

    /// Primary tracking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    /// All tracking numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_numbers: Option<Vec<String>>,

    /// Primary tracking URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,

    /// All tracking URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_urls: Option<Vec<String>>,

    /// Gateway receipt, shape depends on the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<serde_json::Value>,

    /// Items in this shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    /// Whether the buyer is emailed about this shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_customer: Option<bool>,

    /// Ship-from address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_address: Option<Address>,

    /// Inventory tracker of the fulfilled variants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_inventory_management: Option<String>,

    /// When the fulfillment was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the fulfillment was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The admin GraphQL API ID.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Fulfillment {
    const NAME: &'static str = "fulfillment";
    const PLURAL: &'static str = "fulfillments";
}

/// Fulfillment operations for one owner.
#[allow(async_fn_in_trait)]
pub trait FulfillmentService {
    /// Lists the owner's fulfillments.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Fulfillment>, HttpError>;

    /// Counts the owner's fulfillments.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, HttpError>;

    /// Fetches one fulfillment.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with status 404 if it does not exist.
    async fn get(&self, fulfillment_id: u64, options: Option<&FieldsOptions>) -> Result<Fulfillment, HttpError>;

    /// Creates a fulfillment.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with status 422 on validation failure.
    async fn create(&self, fulfillment: &Fulfillment) -> Result<Fulfillment, HttpError>;

    /// Updates a fulfillment, addressed by `fulfillment.id`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingId`] if `fulfillment.id` is
    /// `None`, plus any [`HttpError`] from the request.
    async fn update(&self, fulfillment: &Fulfillment) -> Result<Fulfillment, HttpError>;

    /// Marks a pending fulfillment as complete.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn complete(&self, fulfillment_id: u64) -> Result<Fulfillment, HttpError>;

    /// Moves a fulfillment back to the open state.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn transition(&self, fulfillment_id: u64) -> Result<Fulfillment, HttpError>;

    /// Cancels a fulfillment.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn cancel(&self, fulfillment_id: u64) -> Result<Fulfillment, HttpError>;
}

/// [`FulfillmentService`] bound to one owner, such as `orders/450789469`.
#[derive(Debug, Clone, Copy)]
pub struct FulfillmentServiceOp<'a> {
    client: &'a RestClient,
    owner: &'static str,
    owner_id: u64,
}

impl<'a> FulfillmentServiceOp<'a> {
    /// Creates a service for fulfillments under `{owner}/{owner_id}`.
    #[must_use]
    pub const fn new(client: &'a RestClient, owner: &'static str, owner_id: u64) -> Self {
        Self {
            client,
            owner,
            owner_id,
        }
    }

    /// Returns the owner's ID.
    #[must_use]
    pub const fn owner_id(&self) -> u64 {
        self.owner_id
    }

    fn collection_path(&self) -> String {
        format!("{}/{}/fulfillments", self.owner, self.owner_id)
    }

    fn member_path(&self, fulfillment_id: u64) -> String {
        format!("{}/{fulfillment_id}", self.collection_path())
    }

    async fn action(&self, fulfillment_id: u64, action: &str) -> Result<Fulfillment, HttpError> {
        let path = format!("{}/{action}", self.member_path(fulfillment_id));
        send(self.client, HttpMethod::Post, &path, json!({})).await
    }
}

impl FulfillmentService for FulfillmentServiceOp<'_> {
    async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Fulfillment>, HttpError> {
        let page = Fulfillment::fetch_page(self.client, &self.collection_path(), to_query(options)?).await?;
        Ok(page.items)
    }

    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, HttpError> {
        let path = format!("{}/count", self.collection_path());
        pagination::count(self.client, &path, to_query(options)?).await
    }

    async fn get(&self, fulfillment_id: u64, options: Option<&FieldsOptions>) -> Result<Fulfillment, HttpError> {
        Fulfillment::fetch(self.client, &self.member_path(fulfillment_id), to_query(options)?).await
    }

    async fn create(&self, fulfillment: &Fulfillment) -> Result<Fulfillment, HttpError> {
        fulfillment.create_at(self.client, &self.collection_path()).await
    }

    async fn update(&self, fulfillment: &Fulfillment) -> Result<Fulfillment, HttpError> {
        let id = fulfillment.id.ok_or(InvalidHttpRequestError::MissingId {
            resource: Fulfillment::NAME,
        })?;
        fulfillment.update_at(self.client, &self.member_path(id)).await
    }

    async fn complete(&self, fulfillment_id: u64) -> Result<Fulfillment, HttpError> {
        self.action(fulfillment_id, "complete").await
    }

    async fn transition(&self, fulfillment_id: u64) -> Result<Fulfillment, HttpError> {
        self.action(fulfillment_id, "open").await
    }

    async fn cancel(&self, fulfillment_id: u64) -> Result<Fulfillment, HttpError> {
        self.action(fulfillment_id, "cancel").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fulfillment_deserialization() {
        let fulfillment: Fulfillment = serde_json::from_value(json!({
            "id": 255_858_046,
            "order_id": 450_789_469,
            "status": "success",
            "shipment_status": "in_transit",
            "tracking_numbers": ["1Z2345"],
            "line_items": [{"id": 466_157_049, "quantity": 1, "properties": {}}],
            "created_at": "2024-01-15T10:30:00-05:00"
        }))
        .unwrap();

        assert_eq!(fulfillment.status, Some(FulfillmentStatus::Success));
        assert_eq!(fulfillment.shipment_status, Some(ShipmentStatus::InTransit));
        let line_items = fulfillment.line_items.unwrap();
        assert!(line_items[0].properties.is_empty());
        assert!(fulfillment.created_at.is_some());
    }

    #[test]
    fn test_unlisted_statuses_decode_as_unknown() {
        let fulfillment: Fulfillment = serde_json::from_value(json!({
            "id": 1,
            "status": "on_hold",
            "shipment_status": "carrier_picked_up"
        }))
        .unwrap();

        assert_eq!(fulfillment.status, Some(FulfillmentStatus::Unknown));
        assert_eq!(fulfillment.shipment_status, Some(ShipmentStatus::Unknown));
    }

    #[test]
    fn test_read_only_fields_are_not_sent() {
        let fulfillment = Fulfillment {
            id: Some(1),
            order_id: Some(2),
            name: Some("#1001.1".to_string()),
            tracking_number: Some("1Z".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&fulfillment).unwrap();
        assert_eq!(body, json!({"id": 1, "tracking_number": "1Z"}));
    }
}
