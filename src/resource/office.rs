//! Client for the `Office` resource (brokerages).

use std::sync::Arc;

use serde_json::Value;

use crate::{query::ODataQuery, transport::BaseClient, Error};

/// Client for the `Office` resource.
pub struct OfficeClient {
    base: Arc<BaseClient>,
}

impl OfficeClient {
    pub fn new(token: Option<String>, base_url: Option<String>) -> Result<Self, Error> {
        Ok(Self {
            base: Arc::new(BaseClient::new(token, base_url)?),
        })
    }

    pub(crate) fn with_base(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Fetches the office collection, forwarding the given query.
    pub async fn get_offices(&self, query: &ODataQuery) -> Result<Value, Error> {
        self.base.get("Office", Some(query)).await
    }

    /// Fetches a single office by office key.
    pub async fn get_office(&self, office_key: &str) -> Result<Value, Error> {
        self.base
            .get(&format!("Office('{}')", office_key), None)
            .await
    }

    /// Fetches offices with `OfficeStatus eq 'Active'`.
    pub async fn get_active_offices(&self, query: &ODataQuery) -> Result<Value, Error> {
        self.get_offices(&query.clone().and_filter("OfficeStatus eq 'Active'"))
            .await
    }
}
