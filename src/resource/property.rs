//! Client for the `Property` resource (listings).

use std::sync::Arc;

use serde_json::Value;

use crate::{query::ODataQuery, transport::BaseClient, Error};

/// Client for the `Property` resource.
///
/// Listings come back as opaque JSON following the RESO Data Dictionary
/// field names (`ListingKey`, `StandardStatus`, `ListPrice`, ...).
pub struct PropertyClient {
    base: Arc<BaseClient>,
}

impl PropertyClient {
    /// Creates a standalone client. The token falls back to the
    /// `WFRMLS_BEARER_TOKEN` environment variable when not given.
    pub fn new(token: Option<String>, base_url: Option<String>) -> Result<Self, Error> {
        Ok(Self {
            base: Arc::new(BaseClient::new(token, base_url)?),
        })
    }

    pub(crate) fn with_base(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Fetches the property collection, forwarding the given query.
    pub async fn get_properties(&self, query: &ODataQuery) -> Result<Value, Error> {
        self.base.get("Property", Some(query)).await
    }

    /// Fetches a single property by listing key.
    pub async fn get_property(&self, listing_key: &str) -> Result<Value, Error> {
        self.base
            .get(&format!("Property('{}')", listing_key), None)
            .await
    }

    /// Fetches properties with `StandardStatus eq 'Active'`, combined with
    /// any filter already on `query`.
    pub async fn get_active_properties(&self, query: &ODataQuery) -> Result<Value, Error> {
        self.get_properties(&query.clone().and_filter("StandardStatus eq 'Active'"))
            .await
    }

    /// Fetches closed (sold) properties.
    pub async fn get_sold_properties(&self, query: &ODataQuery) -> Result<Value, Error> {
        self.get_properties(&query.clone().and_filter("StandardStatus eq 'Closed'"))
            .await
    }

    /// Fetches properties in the given city.
    pub async fn get_properties_by_city(
        &self,
        city: &str,
        query: &ODataQuery,
    ) -> Result<Value, Error> {
        self.get_properties(&query.clone().and_filter(&format!("City eq '{}'", city)))
            .await
    }
}
