//! Query filters accepted by most listing and count endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Filters for listing endpoints.
///
/// Unset fields are left out of the query string.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::ListOptions;
/// use shopify_rest::rest::serialize_to_query;
///
/// let options = ListOptions {
///     limit: Some(50),
///     fields: Some(vec!["id".to_string(), "title".to_string()]),
///     ..Default::default()
/// };
/// let query = serialize_to_query(&options).unwrap();
/// assert_eq!(query["limit"], "50");
/// assert_eq!(query["fields"], "id,title");
/// ```
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Cursor token; normally supplied by a [`PageCursor`](crate::clients::PageCursor).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    /// Maximum records per page (the API caps this at 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Only records with an ID greater than this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Only records created at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Only records created at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Only records updated at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Only records updated at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Sort order, e.g. `"updated_at asc"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,

    /// Only these fields are returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Only records with these IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
}

/// Filters for count endpoints.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CountOptions {
    /// Only records created at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Only records created at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Only records updated at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Only records updated at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// Field selection for single-record endpoints.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct FieldsOptions {
    /// Only these fields are returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl FieldsOptions {
    /// Selects the given fields.
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: Some(fields.into_iter().map(Into::into).collect()),
        }
    }
}
