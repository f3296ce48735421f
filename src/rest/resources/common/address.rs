//! Postal addresses.

use serde::{Deserialize, Serialize};

/// A physical address used for billing or shipping.
///
/// All fields are optional; the API omits whatever the buyer did not enter.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::Address;
///
/// let address = Address {
///     first_name: Some("Ada".to_string()),
///     address1: Some("1 Main St".to_string()),
///     city: Some("Ottawa".to_string()),
///     country_code: Some("CA".to_string()),
///     ..Default::default()
/// };
/// assert!(address.id.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Address {
    /// The unique identifier of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The first name of the person at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The last name of the person at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The full name of the person at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The company name at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// The street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// Apartment, suite or unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// The city, town or village.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The province, state or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    /// The province or state code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,

    /// The country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// The two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// The postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// The phone number at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Latitude, set by the platform's geocoder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude, set by the platform's geocoder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}
