//! Client for the `Member` resource (agents).

use std::sync::Arc;

use serde_json::Value;

use crate::{query::ODataQuery, transport::BaseClient, Error};

/// Client for the `Member` resource.
pub struct MemberClient {
    base: Arc<BaseClient>,
}

impl MemberClient {
    pub fn new(token: Option<String>, base_url: Option<String>) -> Result<Self, Error> {
        Ok(Self {
            base: Arc::new(BaseClient::new(token, base_url)?),
        })
    }

    pub(crate) fn with_base(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Fetches the member collection, forwarding the given query.
    pub async fn get_members(&self, query: &ODataQuery) -> Result<Value, Error> {
        self.base.get("Member", Some(query)).await
    }

    /// Fetches a single member by member key.
    pub async fn get_member(&self, member_key: &str) -> Result<Value, Error> {
        self.base
            .get(&format!("Member('{}')", member_key), None)
            .await
    }

    /// Fetches members with `MemberStatus eq 'Active'`.
    pub async fn get_active_members(&self, query: &ODataQuery) -> Result<Value, Error> {
        self.get_members(&query.clone().and_filter("MemberStatus eq 'Active'"))
            .await
    }

    /// Fetches members belonging to the given office.
    pub async fn get_members_by_office(
        &self,
        office_key: &str,
        query: &ODataQuery,
    ) -> Result<Value, Error> {
        self.get_members(
            &query
                .clone()
                .and_filter(&format!("OfficeKey eq '{}'", office_key)),
        )
        .await
    }
}
