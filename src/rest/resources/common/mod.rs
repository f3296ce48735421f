//! Types shared by several resources.
//!
//! - [`Address`]: billing and shipping addresses
//! - [`Money`] and [`AmountSet`]: amounts in shop and presentment currencies
//! - [`LineItem`], [`ShippingLine`], [`TaxLine`] and the discount types
//! - [`ListOptions`], [`CountOptions`] and [`FieldsOptions`]: common query filters

mod address;
mod line_item;
mod money;
mod options;

pub use address::Address;
pub use line_item::{
    DiscountAllocation, DiscountAllocationMethod, DiscountApplication, DiscountCode,
    DiscountTargetSelection, DiscountTargetType, DiscountType, DiscountValueType, LineItem,
    NoteAttribute, ShippingLine, TaxLine,
};
pub use money::{AmountSet, Money};
pub use options::{CountOptions, FieldsOptions, ListOptions};
