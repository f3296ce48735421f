//! Access scopes granted to the current token.
//!
//! This endpoint sits outside the versioned API at
//! `admin/oauth/access_scopes.json` and is read-only.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::AccessScopeService;
//!
//! let scopes = client.access_scopes().list().await?;
//! let can_write_orders = scopes.iter().any(|s| s.handle == "write_orders");
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{HttpError, RestClient};
use crate::rest::RestResource;

const ACCESS_SCOPES_PATH: &str = "admin/oauth/access_scopes";

/// A permission granted to the access token, e.g. `read_products`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub struct AccessScope {
    /// The scope identifier.
    #[serde(default)]
    pub handle: String,
}

impl RestResource for AccessScope {
    const NAME: &'static str = "access_scope";
    const PLURAL: &'static str = "access_scopes";
}

/// Access scope operations.
#[allow(async_fn_in_trait)]
pub trait AccessScopeService {
    /// Lists the scopes granted to the current token.
    ///
    /// # Errors
    ///
    /// Returns any [`HttpError`] from the request.
    async fn list(&self) -> Result<Vec<AccessScope>, HttpError>;
}

/// [`AccessScopeService`] backed by a [`RestClient`].
#[derive(Debug, Clone, Copy)]
pub struct AccessScopeServiceOp<'a> {
    client: &'a RestClient,
}

impl<'a> AccessScopeServiceOp<'a> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }
}

impl AccessScopeService for AccessScopeServiceOp<'_> {
    async fn list(&self) -> Result<Vec<AccessScope>, HttpError> {
        let page = AccessScope::fetch_page(self.client, ACCESS_SCOPES_PATH, None).await?;
        Ok(page.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_scope_deserialization() {
        let scopes: Vec<AccessScope> =
            serde_json::from_str(r#"[{"handle": "read_orders"}, {"handle": "write_products"}]"#)
                .unwrap();
        assert_eq!(scopes[0].handle, "read_orders");
        assert_eq!(scopes[1].handle, "write_products");
    }

    #[test]
    fn test_access_scopes_use_oauth_path() {
        assert!(ACCESS_SCOPES_PATH.starts_with("admin/"));
        assert_eq!(AccessScope::PLURAL, "access_scopes");
    }
}
