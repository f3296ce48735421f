//! Line items, shipping lines, taxes and discounts.
//!
//! Two fields here have more than one wire shape:
//!
//! - [`LineItem::properties`] is usually an array, but older orders send a
//!   single object (or an empty `{}`)
//! - [`ShippingLine::requested_fulfillment_service_id`] may be a string, a
//!   number or null
//!
//! Both are normalized by [`flexible`](crate::rest::flexible).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::money::AmountSet;
use crate::rest::flexible::{self, EmptyRecord};

/// A tax charged on an order, line item or shipping line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaxLine {
    /// The name of the tax (e.g. "VAT").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The tax amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The rate as a fraction (0.08 for 8%).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,

    /// The tax amount in both currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_set: Option<AmountSet>,
}

/// A discount code entered at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountCode {
    /// The code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The discount amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// `fixed_amount`, `percentage` or `shipping`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
}

/// How a discount's value is spread over its target lines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountAllocationMethod {
    /// Spread across all entitled lines.
    Across,
    /// Applied to every entitled line.
    Each,
    /// Applied to a single line.
    One,
    /// A value this client does not list.
    #[serde(other)]
    Unknown,
}

/// Which lines a discount is allocated over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTargetSelection {
    /// Every line.
    All,
    /// Only lines the discount is entitled to.
    Entitled,
    /// Explicitly selected lines.
    Explicit,
    /// A value this client does not list.
    #[serde(other)]
    Unknown,
}

/// The kind of line a discount applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTargetType {
    /// Line items.
    LineItem,
    /// Shipping lines.
    ShippingLine,
    /// A value this client does not list.
    #[serde(other)]
    Unknown,
}

/// How a discount came to be applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// Applied automatically.
    Automatic,
    /// Applied with a discount code.
    DiscountCode,
    /// Applied by the merchant.
    Manual,
    /// Applied by a script.
    Script,
    /// A value this client does not list.
    #[serde(other)]
    Unknown,
}

/// The unit of a discount's value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscountValueType {
    /// A fixed amount in the order currency.
    FixedAmount,
    /// A percentage.
    Percentage,
    /// A value this client does not list.
    #[serde(other)]
    Unknown,
}

/// A discount applied to an order.
///
/// Line items refer to applications by index through
/// [`DiscountAllocation::discount_application_index`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountApplication {
    /// How the discount was applied.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,

    /// The discount value, in units of `value_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// The unit of `value`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<DiscountValueType>,

    /// How the value is spread over lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_method: Option<DiscountAllocationMethod>,

    /// Which lines are selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_selection: Option<DiscountTargetSelection>,

    /// The kind of line targeted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<DiscountTargetType>,

    /// The discount code, for code discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The title, for manual and script discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The description, for manual and script discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The share of a discount allocated to one line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountAllocation {
    /// The allocated amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Index into the order's `discount_applications`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_application_index: Option<u32>,

    /// The allocated amount in both currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_set: Option<AmountSet>,
}

/// A name/value pair attached to an order or line item.
///
/// `value` is kept as raw JSON because stores send strings, numbers and
/// booleans alike.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NoteAttribute {
    /// The attribute name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The attribute value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl EmptyRecord for NoteAttribute {
    fn is_empty_record(&self) -> bool {
        self.name.is_empty() && self.value.is_none()
    }
}

/// A product variant being bought.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::LineItem;
///
/// let item: LineItem = serde_json::from_str(
///     r#"{"id": 1, "quantity": 2, "properties": {"name": "engraving", "value": "AB"}}"#,
/// ).unwrap();
/// assert_eq!(item.properties.len(), 1);
///
/// let item: LineItem = serde_json::from_str(r#"{"id": 2, "properties": {}}"#).unwrap();
/// assert!(item.properties.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItem {
    /// The unique identifier of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The product ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The variant ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    /// Quantity ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// Quantity after removals and refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_quantity: Option<i64>,

    /// Unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Unit price in both currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_set: Option<AmountSet>,

    /// Total discount on this line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<String>,

    /// Total discount in both currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount_set: Option<AmountSet>,

    /// Product title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Variant title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,

    /// Product and variant title combined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Product vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Whether this is a gift card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_card: Option<bool>,

    /// Whether tax is charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    /// Handle of the fulfillment service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,

    /// Whether the item must be shipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,

    /// Inventory tracker of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_inventory_management: Option<String>,

    /// Price before tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_tax_price: Option<String>,

    /// Custom properties such as engraving text.
    #[serde(
        default,
        deserialize_with = "flexible::one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub properties: Vec<NoteAttribute>,

    /// Whether the product still exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_exists: Option<bool>,

    /// Quantity that can still be fulfilled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillable_quantity: Option<i64>,

    /// Weight in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,

    /// `fulfilled`, `partial` or `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    /// Taxes on this line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,

    /// Discount shares on this line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_allocations: Option<Vec<DiscountAllocation>>,

    /// The admin GraphQL API ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

/// A shipping method on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingLine {
    /// The unique identifier of the shipping line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Title of the shipping method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Shipping price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Shipping price in both currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_set: Option<AmountSet>,

    /// Price after discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<String>,

    /// Price after discounts in both currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price_set: Option<AmountSet>,

    /// Code of the shipping rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Source of the shipping rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Phone number given for the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Fulfillment service requested for the shipment; `""` when none.
    #[serde(
        default,
        deserialize_with = "flexible::string_or_number",
        skip_serializing_if = "String::is_empty"
    )]
    pub requested_fulfillment_service_id: String,

    /// Carrier service that provided the rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_identifier: Option<String>,

    /// Taxes on shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,

    /// Discount shares on shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_allocations: Option<Vec<DiscountAllocation>>,

    /// Handle of the shipping rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_item_properties_as_array() {
        let item: LineItem = serde_json::from_value(json!({
            "id": 1,
            "properties": [
                {"name": "engraving", "value": "Happy birthday"},
                {"name": "gift", "value": true}
            ]
        }))
        .unwrap();

        assert_eq!(item.properties.len(), 2);
        assert_eq!(item.properties[0].name, "engraving");
        assert_eq!(item.properties[1].value, Some(json!(true)));
    }

    #[test]
    fn test_line_item_properties_as_single_object() {
        let item: LineItem = serde_json::from_value(json!({
            "properties": {"name": "size", "value": "L"}
        }))
        .unwrap();
        assert_eq!(
            item.properties,
            vec![NoteAttribute {
                name: "size".to_string(),
                value: Some(json!("L")),
            }]
        );
    }

    #[test]
    fn test_line_item_properties_empty_shapes() {
        for properties in [json!({}), json!({"name": "", "value": null}), json!(null)] {
            let item: LineItem = serde_json::from_value(json!({"properties": properties})).unwrap();
            assert!(item.properties.is_empty());
        }
        let item: LineItem = serde_json::from_value(json!({"id": 3})).unwrap();
        assert!(item.properties.is_empty());
    }

    #[test]
    fn test_line_item_round_trip_is_stable() {
        let first: LineItem = serde_json::from_value(json!({
            "id": 5,
            "properties": {"name": "note", "value": 12}
        }))
        .unwrap();
        let encoded = serde_json::to_value(&first).unwrap();
        assert!(encoded["properties"].is_array());

        let second: LineItem = serde_json::from_value(encoded).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shipping_line_service_id_shapes() {
        let cases = [
            (json!(null), ""),
            (json!(123_456), "123456"),
            (json!("7788"), "7788"),
        ];
        for (raw, expected) in cases {
            let line: ShippingLine =
                serde_json::from_value(json!({"requested_fulfillment_service_id": raw})).unwrap();
            assert_eq!(line.requested_fulfillment_service_id, expected);
        }

        let line: ShippingLine = serde_json::from_value(json!({"title": "Ground"})).unwrap();
        assert_eq!(line.requested_fulfillment_service_id, "");
    }

    #[test]
    fn test_shipping_line_round_trip_is_stable() {
        let first: ShippingLine =
            serde_json::from_value(json!({"id": 1, "requested_fulfillment_service_id": 42}))
                .unwrap();
        let encoded = serde_json::to_value(&first).unwrap();
        assert_eq!(encoded["requested_fulfillment_service_id"], "42");

        let second: ShippingLine = serde_json::from_value(encoded).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_discount_application_enums() {
        let application: DiscountApplication = serde_json::from_value(json!({
            "type": "discount_code",
            "value": "10.0",
            "value_type": "percentage",
            "allocation_method": "across",
            "target_selection": "all",
            "target_type": "line_item",
            "code": "SAVE10"
        }))
        .unwrap();

        assert_eq!(application.discount_type, Some(DiscountType::DiscountCode));
        assert_eq!(application.value_type, Some(DiscountValueType::Percentage));
        assert_eq!(application.target_type, Some(DiscountTargetType::LineItem));
        assert_eq!(
            serde_json::to_value(&application).unwrap()["type"],
            "discount_code"
        );
    }
}
