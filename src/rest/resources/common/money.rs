//! Amounts of money.
//!
//! Amounts are kept as strings so decimal precision survives the round trip.

use serde::{Deserialize, Serialize};

/// An amount in one currency.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Money {
    /// The decimal amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// The three-letter ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

/// An amount in the shop currency and in the buyer's presentment currency.
///
/// Returned for `*_set` fields such as `total_price_set`.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::{AmountSet, Money};
///
/// let total = AmountSet {
///     shop_money: Some(Money {
///         amount: Some("19.99".to_string()),
///         currency_code: Some("USD".to_string()),
///     }),
///     presentment_money: None,
/// };
/// assert_eq!(total.shop_amount(), Some("19.99"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AmountSet {
    /// The amount in the shop's currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_money: Option<Money>,

    /// The amount in the buyer's currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_money: Option<Money>,
}

impl AmountSet {
    /// Returns the amount in the shop's currency.
    #[must_use]
    pub fn shop_amount(&self) -> Option<&str> {
        self.shop_money.as_ref().and_then(|m| m.amount.as_deref())
    }
}
