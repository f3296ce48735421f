//! Orders, plus their metafield and fulfillment sub-services.
//!
//! # Listing
//!
//! Four listing calls cover the usual needs:
//!
//! - [`list`](OrderService::list): the first page only
//! - [`list_with_pagination`](OrderService::list_with_pagination): one page
//!   with its cursors
//! - [`list_page`](OrderService::list_page): the page a cursor points at
//! - [`list_all`](OrderService::list_all): every page; on failure the error
//!   still carries the orders fetched so far
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{
//!     CancelReason, OrderCancelOptions, OrderListOptions, OrderService, OrderStatus,
//! };
//!
//! let orders = client.orders();
//!
//! let mut page = orders
//!     .list_with_pagination(Some(&OrderListOptions {
//!         status: Some(OrderStatus::Any),
//!         ..Default::default()
//!     }))
//!     .await?;
//! while let Some(cursor) = page.next_cursor().cloned() {
//!     page = orders.list_page(&cursor).await?;
//! }
//!
//! orders
//!     .cancel(450_789_469, Some(&OrderCancelOptions {
//!         reason: Some(CancelReason::Customer),
//!         email: Some(true),
//!         ..Default::default()
//!     }))
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::rest::to_body;
use crate::clients::{HttpError, HttpMethod, InvalidHttpRequestError, PageCursor, RestClient};
use crate::rest::pagination::{self, Page, PartialListError};
use crate::rest::resources::common::{
    Address, AmountSet, CountOptions, DiscountApplication, DiscountCode, FieldsOptions, LineItem,
    ListOptions, NoteAttribute, ShippingLine, TaxLine,
};
use crate::rest::resources::fulfillment::{Fulfillment, FulfillmentServiceOp};
use crate::rest::resources::metafield::{Metafield, MetafieldServiceOp};
use crate::rest::{send, to_query, RestResource};

const OWNER: &str = "orders";

/// Filter on the open/closed state of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Open orders only (the API default).
    Open,
    /// Closed orders only.
    Closed,
    /// Cancelled orders only.
    Cancelled,
    /// Orders in any state, archived included.
    Any,
}

/// Payment status of an order, also usable as a listing filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinancialStatus {
    /// Payment has been authorized but not captured.
    Authorized,
    /// Payment is pending.
    Pending,
    /// Payment has been captured.
    Paid,
    /// Payment has been partially captured.
    PartiallyPaid,
    /// Payment has been fully refunded.
    Refunded,
    /// Authorization has been voided.
    Voided,
    /// Payment has been partially refunded.
    PartiallyRefunded,
    /// Filter only: any status.
    Any,
    /// Filter only: authorized and partially paid orders.
    Unpaid,
    /// A value this client does not list.
    #[serde(other)]
    Unknown,
}

/// Shipping state of an order, also usable as a listing filter.
///
/// Orders report `fulfilled`, `partial`, `restocked` or `null`; the other
/// values are only meaningful as filters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderFulfillmentStatus {
    /// Filter: orders that have shipped.
    Shipped,
    /// Some line items have been fulfilled.
    Partial,
    /// Filter: orders that have not shipped.
    Unshipped,
    /// Filter: any fulfillment state.
    Any,
    /// Filter: orders that are unfulfilled or partially fulfilled.
    Unfulfilled,
    /// Every line item has been fulfilled.
    Fulfilled,
    /// Items were restocked.
    Restocked,
    /// A value this client does not list.
    #[serde(other)]
    Unknown,
}

/// Why an order was cancelled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// The customer cancelled the order.
    Customer,
    /// The order was fraudulent.
    Fraud,
    /// Items were out of stock.
    Inventory,
    /// Payment was declined.
    Declined,
    /// Cancelled by staff.
    Staff,
    /// Any other reason.
    Other,
    /// A value this client does not list.
    #[serde(other)]
    Unknown,
}

/// How creating an order claims inventory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InventoryBehaviour {
    /// Do not claim inventory.
    Bypass,
    /// Claim inventory regardless of the product's policy.
    DecrementIgnoringPolicy,
    /// Claim inventory when the product's policy allows it.
    DecrementObeyingPolicy,
}

/// Kind of a refund's order adjustment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderAdjustmentKind {
    /// Refunded shipping costs.
    ShippingRefund,
    /// Difference between the calculated and the actual refund.
    RefundDiscrepancy,
    /// A value this client does not list.
    #[serde(other)]
    Unknown,
}

/// The customer embedded in an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Customer {
    /// The unique identifier of the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Phone number in E.164 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// The customer's default address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_address: Option<Address>,

    /// When the customer was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the customer was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Card details of a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentDetails {
    /// Address verification result code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_result_code: Option<String>,

    /// Issuer identification number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_bin: Option<String>,

    /// Card verification result code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv_result_code: Option<String>,

    /// Masked card number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_number: Option<String>,

    /// Card brand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_company: Option<String>,
}

/// A money movement on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Transaction {
    /// The unique identifier of the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The order the transaction belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// Amount as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// `authorization`, `capture`, `sale`, `void` or `refund`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Payment gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    /// `pending`, `failure`, `success` or `error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Gateway message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Whether this was a test transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Gateway authorization code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Location where the transaction was processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    /// Staff member who processed the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// Parent transaction, e.g. the authorization a capture belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    /// POS device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<u64>,

    /// Standardized error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    /// Origin of the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    /// Set to `external` for transactions recorded outside the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Card details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetails>,

    /// When the transaction was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Details of the browser that placed an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClientDetails {
    /// The `Accept-Language` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,

    /// Browser viewport height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_height: Option<i64>,

    /// Browser IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_ip: Option<String>,

    /// Browser viewport width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_width: Option<i64>,

    /// Session hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_hash: Option<String>,

    /// The `User-Agent` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// A refunded line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RefundLineItem {
    /// The unique identifier of the refund line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Quantity refunded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// The refunded line item's ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item_id: Option<u64>,

    /// The refunded line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item: Option<LineItem>,

    /// Subtotal, excluding tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<String>,

    /// Tax refunded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,

    /// Subtotal in shop and presentment currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_set: Option<AmountSet>,

    /// Tax in shop and presentment currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_set: Option<AmountSet>,
}

/// An adjustment made by a refund, such as a shipping refund.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderAdjustment {
    /// The unique identifier of the adjustment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// The refund that made the adjustment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_id: Option<u64>,

    /// Amount, excluding tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Tax amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<String>,

    /// What was adjusted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<OrderAdjustmentKind>,

    /// Free-text reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Amount in shop and presentment currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_set: Option<AmountSet>,

    /// Tax amount in shop and presentment currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount_set: Option<AmountSet>,
}

/// A refund on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Refund {
    /// The unique identifier of the refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The refunded order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// Staff note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Whether the refunded items went back into stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restock: Option<bool>,

    /// Staff member who created the refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// Refunded line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_line_items: Option<Vec<RefundLineItem>>,

    /// Transactions that moved the refunded money.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,

    /// Adjustments such as shipping refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_adjustments: Option<Vec<OrderAdjustment>>,

    /// When the refund was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

/// An order.
///
/// Prices are decimal strings exactly as the API sends them. Fields
/// computed by the platform (`number`, `token`, timestamps and the like)
/// are read-only and never sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    /// The unique identifier of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Order name, e.g. `#1001`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Customer email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    /// Customer phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// When the order was processed; settable on create for imports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,

    /// The customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,

    /// Billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    /// Shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    /// Shop currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Currency the customer saw.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_currency: Option<String>,

    /// Total price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<String>,

    /// Total price in shop and presentment currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price_set: Option<AmountSet>,

    /// Total shipping in shop and presentment currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_shipping_price_set: Option<AmountSet>,

    /// Total price after edits and refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_price: Option<String>,

    /// Subtotal, after discounts and before shipping and tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<String>,

    /// Subtotal after edits and refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_subtotal_price: Option<String>,

    /// Total discounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounts: Option<String>,

    /// Total discounts in shop and presentment currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounts_set: Option<AmountSet>,

    /// Total discounts after edits and refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_discounts: Option<String>,

    /// Current total discounts in shop and presentment currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_discounts_set: Option<AmountSet>,

    /// Sum of line item prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_line_items_price: Option<String>,

    /// Whether prices include tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,

    /// Total tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,

    /// Total tax in shop and presentment currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_set: Option<AmountSet>,

    /// Total tax after edits and refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_tax: Option<String>,

    /// Current total tax in shop and presentment currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_tax_set: Option<AmountSet>,

    /// Order-level tax lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,

    /// Total weight in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<i64>,

    /// Tips received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tip_received: Option<String>,

    /// Payment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<FinancialStatus>,

    /// Shipping status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<OrderFulfillmentStatus>,

    /// Fulfillments of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillments: Option<Vec<Fulfillment>>,

    /// Staff note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Extra cart attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_attributes: Option<Vec<NoteAttribute>>,

    /// Whether this is a test order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// Browser IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_ip: Option<String>,

    /// Whether the customer opted into marketing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_accepts_marketing: Option<bool>,

    /// Why the order was cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<CancelReason>,

    /// Discount codes entered at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_codes: Option<Vec<DiscountCode>>,

    /// Discounts applied to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_applications: Option<Vec<DiscountApplication>>,

    /// Ordered items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    /// Shipping methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<ShippingLine>>,

    /// Transactions; only sent when creating an order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,

    /// Customer locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_locale: Option<String>,

    /// Landing page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_site: Option<String>,

    /// Landing page reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_site_ref: Option<String>,

    /// Referring site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referring_site: Option<String>,

    /// Where the order originated, e.g. `web` or `pos`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    /// External identifier of the order source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_identifier: Option<String>,

    /// URL of the order in the external source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// External reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Browser details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_details: Option<ClientDetails>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// Location that processed the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    /// POS device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<u64>,

    /// Payment gateways used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_gateway_names: Option<Vec<String>>,

    /// How the payment was processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_method: Option<String>,

    /// Refunds issued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Vec<Refund>>,

    /// Payment gateway (deprecated by the API in favour of transactions).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    /// Whether inventory has been reserved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,

    /// Metafields to attach on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields: Option<Vec<Metafield>>,

    /// Send the order confirmation on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_receipt: Option<bool>,

    /// Send the shipping confirmation on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_fulfillment_receipt: Option<bool>,

    /// How the order claims inventory on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_behaviour: Option<InventoryBehaviour>,

    /// Shop-wide sequential number, starting at 1.
    #[serde(skip_serializing)]
    pub number: Option<u64>,

    /// Number shown to the customer, starting at 1001.
    #[serde(skip_serializing)]
    pub order_number: Option<u64>,

    /// Unique token.
    #[serde(skip_serializing)]
    pub token: Option<String>,

    /// Cart token.
    #[serde(skip_serializing)]
    pub cart_token: Option<String>,

    /// Checkout token.
    #[serde(skip_serializing)]
    pub checkout_token: Option<String>,

    /// Checkout ID.
    #[serde(skip_serializing)]
    pub checkout_id: Option<u64>,

    /// App that created the order.
    #[serde(skip_serializing)]
    pub app_id: Option<u64>,

    /// Staff member who created the order.
    #[serde(skip_serializing)]
    pub user_id: Option<u64>,

    /// Customer-facing status page.
    #[serde(skip_serializing)]
    pub order_status_url: Option<String>,

    /// When the order was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the order was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the order was cancelled.
    #[serde(skip_serializing)]
    pub cancelled_at: Option<DateTime<Utc>>,

    /// When the order was closed.
    #[serde(skip_serializing)]
    pub closed_at: Option<DateTime<Utc>>,

    /// The admin GraphQL API ID.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Order {
    const NAME: &'static str = "order";
    const PLURAL: &'static str = "orders";
}

/// Filters for listing orders.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct OrderListOptions {
    /// Paging, ID and time filters.
    #[serde(flatten)]
    pub list: ListOptions,

    /// Open/closed state; the API defaults to `open`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    /// Payment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<FinancialStatus>,

    /// Shipping status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<OrderFulfillmentStatus>,

    /// Only orders processed at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_min: Option<DateTime<Utc>>,

    /// Only orders processed at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_max: Option<DateTime<Utc>>,
}

/// Filters for counting orders.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct OrderCountOptions {
    /// Time filters.
    #[serde(flatten)]
    pub count: CountOptions,

    /// Open/closed state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    /// Payment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<FinancialStatus>,

    /// Shipping status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<OrderFulfillmentStatus>,
}

/// Body of a cancel request.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct OrderCancelOptions {
    /// Amount to refund, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Currency of `amount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Return the items to stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restock: Option<bool>,

    /// Why the order is cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CancelReason>,

    /// Notify the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,

    /// Refund to issue with the cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund: Option<Refund>,
}

/// Order operations.
#[allow(async_fn_in_trait)]
pub trait OrderService {
    /// Lists the first page of orders.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn list(&self, options: Option<&OrderListOptions>) -> Result<Vec<Order>, HttpError>;

    /// Lists every order, following `next` cursors until the last page.
    ///
    /// # Errors
    ///
    /// Returns [`PartialListError`] holding the orders fetched before the
    /// failing page.
    async fn list_all(&self, options: Option<&OrderListOptions>) -> Result<Vec<Order>, PartialListError<Order>>;

    /// Lists one page of orders along with its cursors.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn list_with_pagination(&self, options: Option<&OrderListOptions>) -> Result<Page<Order>, HttpError>;

    /// Fetches the page a cursor points at.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn list_page(&self, cursor: &PageCursor) -> Result<Page<Order>, HttpError>;

    /// Counts orders.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn count(&self, options: Option<&OrderCountOptions>) -> Result<u64, HttpError>;

    /// Fetches one order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with status 404 if it does not exist.
    async fn get(&self, order_id: u64, options: Option<&FieldsOptions>) -> Result<Order, HttpError>;

    /// Creates an order.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with status 422 on validation failure.
    async fn create(&self, order: &Order) -> Result<Order, HttpError>;

    /// Updates an order, addressed by `order.id`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingId`] if `order.id` is
    /// `None`, plus any [`HttpError`] from the request.
    async fn update(&self, order: &Order) -> Result<Order, HttpError>;

    /// Cancels an order. `options` is sent as the request body.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn cancel(&self, order_id: u64, options: Option<&OrderCancelOptions>) -> Result<Order, HttpError>;

    /// Closes an order.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn close(&self, order_id: u64) -> Result<Order, HttpError>;

    /// Re-opens a closed order.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn open(&self, order_id: u64) -> Result<Order, HttpError>;

    /// Deletes an order.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn delete(&self, order_id: u64) -> Result<(), HttpError>;
}

/// [`OrderService`] backed by a [`RestClient`].
#[derive(Debug, Clone, Copy)]
pub struct OrderServiceOp<'a> {
    client: &'a RestClient,
}

impl<'a> OrderServiceOp<'a> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Metafields of one order.
    #[must_use]
    pub const fn metafields(&self, order_id: u64) -> MetafieldServiceOp<'a> {
        MetafieldServiceOp::new(self.client, OWNER, order_id)
    }

    /// Fulfillments of one order.
    #[must_use]
    pub const fn fulfillments(&self, order_id: u64) -> FulfillmentServiceOp<'a> {
        FulfillmentServiceOp::new(self.client, OWNER, order_id)
    }

    async fn action(&self, order_id: u64, action: &str) -> Result<Order, HttpError> {
        send(self.client, HttpMethod::Post, &action_path(order_id, action), json!({})).await
    }
}

fn order_path(order_id: u64) -> String {
    format!("{OWNER}/{order_id}")
}

fn action_path(order_id: u64, action: &str) -> String {
    format!("{OWNER}/{order_id}/{action}")
}

impl OrderService for OrderServiceOp<'_> {
    async fn list(&self, options: Option<&OrderListOptions>) -> Result<Vec<Order>, HttpError> {
        Ok(self.list_with_pagination(options).await?.items)
    }

    async fn list_all(&self, options: Option<&OrderListOptions>) -> Result<Vec<Order>, PartialListError<Order>> {
        let query = to_query(options).map_err(|e| PartialListError {
            items: Vec::new(),
            source: e.into(),
        })?;
        Order::fetch_all(self.client, OWNER, query).await
    }

    async fn list_with_pagination(&self, options: Option<&OrderListOptions>) -> Result<Page<Order>, HttpError> {
        Order::fetch_page(self.client, OWNER, to_query(options)?).await
    }

    async fn list_page(&self, cursor: &PageCursor) -> Result<Page<Order>, HttpError> {
        Order::fetch_page(self.client, OWNER, Some(cursor.params().clone())).await
    }

    async fn count(&self, options: Option<&OrderCountOptions>) -> Result<u64, HttpError> {
        pagination::count(self.client, &format!("{OWNER}/count"), to_query(options)?).await
    }

    async fn get(&self, order_id: u64, options: Option<&FieldsOptions>) -> Result<Order, HttpError> {
        Order::fetch(self.client, &order_path(order_id), to_query(options)?).await
    }

    async fn create(&self, order: &Order) -> Result<Order, HttpError> {
        order.create_at(self.client, OWNER).await
    }

    async fn update(&self, order: &Order) -> Result<Order, HttpError> {
        let id = order.id.ok_or(InvalidHttpRequestError::MissingId {
            resource: Order::NAME,
        })?;
        order.update_at(self.client, &order_path(id)).await
    }

    async fn cancel(&self, order_id: u64, options: Option<&OrderCancelOptions>) -> Result<Order, HttpError> {
        let body = match options {
            Some(options) => to_body(options)?,
            None => json!({}),
        };
        send(self.client, HttpMethod::Post, &action_path(order_id, "cancel"), body).await
    }

    async fn close(&self, order_id: u64) -> Result<Order, HttpError> {
        self.action(order_id, "close").await
    }

    async fn open(&self, order_id: u64) -> Result<Order, HttpError> {
        self.action(order_id, "open").await
    }

    async fn delete(&self, order_id: u64) -> Result<(), HttpError> {
        self.client.delete(&order_path(order_id)).await
    }
}
