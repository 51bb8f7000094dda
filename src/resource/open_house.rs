//! Client for the `OpenHouse` resource.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::{query::ODataQuery, transport::BaseClient, Error};

/// Client for the `OpenHouse` resource.
pub struct OpenHouseClient {
    base: Arc<BaseClient>,
}

impl OpenHouseClient {
    pub fn new(token: Option<String>, base_url: Option<String>) -> Result<Self, Error> {
        Ok(Self {
            base: Arc::new(BaseClient::new(token, base_url)?),
        })
    }

    pub(crate) fn with_base(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Fetches the open house collection, forwarding the given query.
    pub async fn get_open_houses(&self, query: &ODataQuery) -> Result<Value, Error> {
        self.base.get("OpenHouse", Some(query)).await
    }

    /// Fetches a single open house by key.
    pub async fn get_open_house(&self, open_house_key: &str) -> Result<Value, Error> {
        self.base
            .get(&format!("OpenHouse('{}')", open_house_key), None)
            .await
    }

    /// Fetches open houses starting at or after the current UTC time,
    /// ordered soonest-first unless the caller set their own `$orderby`.
    pub async fn get_upcoming_open_houses(&self, query: &ODataQuery) -> Result<Value, Error> {
        let now = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        let mut query = query
            .clone()
            .and_filter(&format!("OpenHouseStartTime ge {}", now));
        if query.orderby.is_none() {
            query.orderby = Some("OpenHouseStartTime asc".to_string());
        }
        self.get_open_houses(&query).await
    }
}
