//! Client for the `Media` resource (listing photos and attachments).

use std::sync::Arc;

use serde_json::Value;

use crate::{query::ODataQuery, transport::BaseClient, Error};

/// Client for the `Media` resource.
pub struct MediaClient {
    base: Arc<BaseClient>,
}

impl MediaClient {
    pub fn new(token: Option<String>, base_url: Option<String>) -> Result<Self, Error> {
        Ok(Self {
            base: Arc::new(BaseClient::new(token, base_url)?),
        })
    }

    pub(crate) fn with_base(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Fetches the media collection, forwarding the given query.
    pub async fn get_media(&self, query: &ODataQuery) -> Result<Value, Error> {
        self.base.get("Media", Some(query)).await
    }

    /// Fetches a single media record by media key.
    pub async fn get_media_item(&self, media_key: &str) -> Result<Value, Error> {
        self.base
            .get(&format!("Media('{}')", media_key), None)
            .await
    }

    /// Fetches all media attached to one listing, ordered by the server's
    /// `Order` field unless the caller set their own `$orderby`.
    pub async fn get_media_for_property(
        &self,
        resource_record_key: &str,
        query: &ODataQuery,
    ) -> Result<Value, Error> {
        let mut query = query
            .clone()
            .and_filter(&format!("ResourceRecordKey eq '{}'", resource_record_key));
        if query.orderby.is_none() {
            query.orderby = Some("Order asc".to_string());
        }
        self.get_media(&query).await
    }
}
