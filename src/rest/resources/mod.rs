//! Admin API resources and their services.
//!
//! Each resource comes with:
//!
//! - a record type mirroring its JSON shape (e.g. [`Order`])
//! - a service trait with its operations (e.g. [`OrderService`])
//! - an operation type implementing the trait against a
//!   [`RestClient`] (e.g. [`OrderServiceOp`])
//!
//! Services are reached through accessors on the client:
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{AccessScopeService, ArticleService, OrderService};
//!
//! let scopes = client.access_scopes().list().await?;
//! let articles = client.articles().list(241_253_187, None).await?;
//! let open = client.orders().count(None).await?;
//! ```
//!
//! Metafields and fulfillments have no accessor of their own; they hang off
//! their owner:
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{FulfillmentService, MetafieldService};
//!
//! let metafields = client.orders().metafields(450_789_469).list(None).await?;
//! client.orders().fulfillments(450_789_469).complete(255_858_046).await?;
//! client.variants().metafields(808_950_810).count(None).await?;
//! ```

mod access_scope;
mod article;
mod common;
mod fulfillment;
mod metafield;
mod order;
mod variant;

use crate::clients::RestClient;

pub use access_scope::{AccessScope, AccessScopeService, AccessScopeServiceOp};
pub use article::{
    Article, ArticleImage, ArticleListOptions, ArticleMetafield, ArticleService, ArticleServiceOp,
    ArticleTagOptions,
};
pub use common::{
    Address, AmountSet, CountOptions, DiscountAllocation, DiscountAllocationMethod,
    DiscountApplication, DiscountCode, DiscountTargetSelection, DiscountTargetType, DiscountType,
    DiscountValueType, FieldsOptions, LineItem, ListOptions, Money, NoteAttribute, ShippingLine,
    TaxLine,
};
pub use fulfillment::{
    Fulfillment, FulfillmentService, FulfillmentServiceOp, FulfillmentStatus, ShipmentStatus,
};
pub use metafield::{Metafield, MetafieldListOptions, MetafieldService, MetafieldServiceOp};
pub use order::{
    CancelReason, ClientDetails, Customer, FinancialStatus, InventoryBehaviour, Order,
    OrderAdjustment, OrderAdjustmentKind, OrderCancelOptions, OrderCountOptions,
    OrderFulfillmentStatus, OrderListOptions, OrderService, OrderServiceOp, OrderStatus,
    PaymentDetails, Refund, RefundLineItem, Transaction,
};
pub use variant::{InventoryPolicy, PresentmentPrice, Variant, VariantService, VariantServiceOp};

impl RestClient {
    /// Access scope operations.
    #[must_use]
    pub const fn access_scopes(&self) -> AccessScopeServiceOp<'_> {
        AccessScopeServiceOp::new(self)
    }

    /// Article operations.
    #[must_use]
    pub const fn articles(&self) -> ArticleServiceOp<'_> {
        ArticleServiceOp::new(self)
    }

    /// Order operations.
    #[must_use]
    pub const fn orders(&self) -> OrderServiceOp<'_> {
        OrderServiceOp::new(self)
    }

    /// Variant operations.
    #[must_use]
    pub const fn variants(&self) -> VariantServiceOp<'_> {
        VariantServiceOp::new(self)
    }
}
