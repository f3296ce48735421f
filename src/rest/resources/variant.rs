//! Product variants.
//!
//! Variants are created, listed and deleted through their product
//! (`products/{product_id}/variants.json`) but fetched and updated on their
//! own (`variants/{id}.json`).
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{InventoryPolicy, Variant, VariantService};
//!
//! let variants = client.variants();
//! let variant = variants
//!     .create(632_910_392, &Variant {
//!         option1: Some("Yellow".to_string()),
//!         price: Some("1.00".to_string()),
//!         inventory_policy: Some(InventoryPolicy::Continue),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let bins = variants.metafields(variant.id.unwrap_or_default()).list(None).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpError, InvalidHttpRequestError, RestClient};
use crate::rest::pagination;
use crate::rest::resources::common::{CountOptions, FieldsOptions, ListOptions, Money};
use crate::rest::resources::metafield::{Metafield, MetafieldServiceOp};
use crate::rest::{to_query, RestResource};

const OWNER: &str = "variants";

/// Whether a variant can be sold when out of stock.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InventoryPolicy {
    /// Stop selling at zero stock.
    Deny,
    /// Keep selling at zero stock.
    Continue,
    /// A value this client does not list.
    #[serde(other)]
    Unknown,
}

/// A variant's price in one presentment currency.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PresentmentPrice {
    /// Price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,

    /// Compare-at price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<Money>,
}

/// A purchasable version of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Variant {
    /// The unique identifier of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The owning product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Title, derived from the option values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Position in the product's variant list, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Weight in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,

    /// Out-of-stock behaviour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_policy: Option<InventoryPolicy>,

    /// Price as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Original price, shown struck through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<String>,

    /// Fulfillment service handle, `manual` by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,

    /// Inventory tracker, `shopify` or `null` for untracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_management: Option<String>,

    /// Linked inventory item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,

    /// First option value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,

    /// Second option value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,

    /// Third option value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,

    /// Whether tax is charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    /// Avalara tax code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,

    /// Barcode, UPC or ISBN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Product image shown for this variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u64>,

    /// Stock level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,

    /// Weight in `weight_unit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// `g`, `kg`, `oz` or `lb`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,

    /// Stock level before the last change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_inventory_quantity: Option<i64>,

    /// Whether the variant ships.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,

    /// Metafields to attach on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields: Option<Vec<Metafield>>,

    /// Prices in every enabled presentment currency.
    #[serde(skip_serializing)]
    pub presentment_prices: Option<Vec<PresentmentPrice>>,

    /// When the variant was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the variant was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The admin GraphQL API ID.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Variant {
    const NAME: &'static str = "variant";
    const PLURAL: &'static str = "variants";
}

/// Variant operations.
#[allow(async_fn_in_trait)]
pub trait VariantService {
    /// Lists a product's variants.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn list(&self, product_id: u64, options: Option<&ListOptions>) -> Result<Vec<Variant>, HttpError>;

    /// Counts a product's variants.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn count(&self, product_id: u64, options: Option<&CountOptions>) -> Result<u64, HttpError>;

    /// Fetches one variant.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with status 404 if it does not exist.
    async fn get(&self, variant_id: u64, options: Option<&FieldsOptions>) -> Result<Variant, HttpError>;

    /// Adds a variant to a product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with status 422 on validation failure,
    /// e.g. a duplicate option combination.
    async fn create(&self, product_id: u64, variant: &Variant) -> Result<Variant, HttpError>;

    /// Updates a variant, addressed by `variant.id`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingId`] if `variant.id` is
    /// `None`, plus any [`HttpError`] from the request.
    async fn update(&self, variant: &Variant) -> Result<Variant, HttpError>;

    /// Removes a variant from a product.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn delete(&self, product_id: u64, variant_id: u64) -> Result<(), HttpError>;
}

/// [`VariantService`] backed by a [`RestClient`].
#[derive(Debug, Clone, Copy)]
pub struct VariantServiceOp<'a> {
    client: &'a RestClient,
}

impl<'a> VariantServiceOp<'a> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Metafields of one variant.
    #[must_use]
    pub const fn metafields(&self, variant_id: u64) -> MetafieldServiceOp<'a> {
        MetafieldServiceOp::new(self.client, OWNER, variant_id)
    }
}

fn product_variants_path(product_id: u64) -> String {
    format!("products/{product_id}/variants")
}

fn variant_path(variant_id: u64) -> String {
    format!("{OWNER}/{variant_id}")
}

impl VariantService for VariantServiceOp<'_> {
    async fn list(&self, product_id: u64, options: Option<&ListOptions>) -> Result<Vec<Variant>, HttpError> {
        let page =
            Variant::fetch_page(self.client, &product_variants_path(product_id), to_query(options)?).await?;
        Ok(page.items)
    }

    async fn count(&self, product_id: u64, options: Option<&CountOptions>) -> Result<u64, HttpError> {
        let path = format!("{}/count", product_variants_path(product_id));
        pagination::count(self.client, &path, to_query(options)?).await
    }

    async fn get(&self, variant_id: u64, options: Option<&FieldsOptions>) -> Result<Variant, HttpError> {
        Variant::fetch(self.client, &variant_path(variant_id), to_query(options)?).await
    }

    async fn create(&self, product_id: u64, variant: &Variant) -> Result<Variant, HttpError> {
        variant.create_at(self.client, &product_variants_path(product_id)).await
    }

    async fn update(&self, variant: &Variant) -> Result<Variant, HttpError> {
        let id = variant.id.ok_or(InvalidHttpRequestError::MissingId {
            resource: Variant::NAME,
        })?;
        variant.update_at(self.client, &variant_path(id)).await
    }

    async fn delete(&self, product_id: u64, variant_id: u64) -> Result<(), HttpError> {
        let path = format!("{}/{variant_id}", product_variants_path(product_id));
        self.client.delete(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paths() {
        assert_eq!(product_variants_path(632), "products/632/variants");
        assert_eq!(variant_path(808), "variants/808");
    }

    #[test]
    fn test_variant_deserialization() {
        let variant: Variant = serde_json::from_value(json!({
            "id": 808_950_810,
            "product_id": 632_910_392,
            "title": "Pink",
            "price": "199.00",
            "sku": "IPOD2008PINK",
            "position": 1,
            "inventory_policy": "continue",
            "inventory_management": "shopify",
            "option1": "Pink",
            "option2": null,
            "weight": 1.25,
            "weight_unit": "lb",
            "presentment_prices": [{
                "price": {"amount": "199.00", "currency_code": "USD"},
                "compare_at_price": null
            }],
            "created_at": "2024-01-02T09:28:43-05:00"
        }))
        .unwrap();

        assert_eq!(variant.id, Some(808_950_810));
        assert_eq!(variant.inventory_policy, Some(InventoryPolicy::Continue));
        assert!(variant.option2.is_none());
        assert_eq!(variant.weight, Some(1.25));
        let prices = variant.presentment_prices.unwrap();
        assert_eq!(
            prices[0].price.as_ref().and_then(|m| m.amount.as_deref()),
            Some("199.00")
        );
        assert!(prices[0].compare_at_price.is_none());
    }

    #[test]
    fn test_update_body_keeps_id_and_drops_read_only_fields() {
        let variant = Variant {
            id: Some(808_950_810),
            price: Some("99.00".to_string()),
            admin_graphql_api_id: Some("gid://shopify/ProductVariant/808950810".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&variant).unwrap(),
            json!({"id": 808_950_810, "price": "99.00"})
        );
    }
}
