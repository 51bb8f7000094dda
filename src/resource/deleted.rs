//! Client for the `Deleted` resource, used to reconcile local copies with
//! records removed upstream.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{query::ODataQuery, transport::BaseClient, Error};

/// Client for the `Deleted` resource.
pub struct DeletedClient {
    base: Arc<BaseClient>,
}

impl DeletedClient {
    pub fn new(token: Option<String>, base_url: Option<String>) -> Result<Self, Error> {
        Ok(Self {
            base: Arc::new(BaseClient::new(token, base_url)?),
        })
    }

    pub(crate) fn with_base(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Fetches deletion records across all resources.
    pub async fn get_deleted(&self, query: &ODataQuery) -> Result<Value, Error> {
        self.base.get("Deleted", Some(query)).await
    }

    /// Fetches deletion records for one resource, e.g. `Property`.
    pub async fn get_deleted_for_resource(
        &self,
        resource_name: &str,
        query: &ODataQuery,
    ) -> Result<Value, Error> {
        self.get_deleted(
            &query
                .clone()
                .and_filter(&format!("ResourceName eq '{}'", resource_name)),
        )
        .await
    }

    /// Fetches deletion records for one resource at or after `since`.
    pub async fn get_deleted_since(
        &self,
        resource_name: &str,
        since: DateTime<Utc>,
        query: &ODataQuery,
    ) -> Result<Value, Error> {
        self.get_deleted(&query.clone().and_filter(&format!(
            "ResourceName eq '{}' and DeletedDateTime ge {}",
            resource_name,
            since.format("%Y-%m-%dT%H:%M:%SZ")
        )))
        .await
    }
}
