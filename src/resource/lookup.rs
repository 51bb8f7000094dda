//! Client for the `Lookup` resource (enumeration values for RESO fields).

use std::sync::Arc;

use serde_json::Value;

use crate::{query::ODataQuery, transport::BaseClient, Error};

/// Client for the `Lookup` resource.
pub struct LookupClient {
    base: Arc<BaseClient>,
}

impl LookupClient {
    pub fn new(token: Option<String>, base_url: Option<String>) -> Result<Self, Error> {
        Ok(Self {
            base: Arc::new(BaseClient::new(token, base_url)?),
        })
    }

    pub(crate) fn with_base(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Fetches the lookup collection, forwarding the given query.
    pub async fn get_lookups(&self, query: &ODataQuery) -> Result<Value, Error> {
        self.base.get("Lookup", Some(query)).await
    }

    /// Fetches a single lookup entry by key.
    pub async fn get_lookup(&self, lookup_key: &str) -> Result<Value, Error> {
        self.base
            .get(&format!("Lookup('{}')", lookup_key), None)
            .await
    }

    /// Fetches all values for one lookup name, e.g. `StandardStatus`.
    pub async fn get_lookups_by_name(
        &self,
        lookup_name: &str,
        query: &ODataQuery,
    ) -> Result<Value, Error> {
        self.get_lookups(
            &query
                .clone()
                .and_filter(&format!("LookupName eq '{}'", lookup_name)),
        )
        .await
    }
}
