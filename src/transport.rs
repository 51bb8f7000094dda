//! The base HTTP client: owns the authenticated session and performs every
//! request the resource clients issue.

use std::env;

use serde_json::Value;
use url::Url;

use crate::{query::ODataQuery, Error};

/// Production base URL for the WFRMLS RESO Web API.
pub const DEFAULT_BASE_URL: &str = "https://resoapi.utahrealestate.com/reso/odata";

/// Environment variable consulted when no bearer token is passed explicitly.
pub const TOKEN_ENV_VAR: &str = "WFRMLS_BEARER_TOKEN";

/// Authenticated HTTP session shared by all resource clients.
///
/// Performs exactly one GET per call, translates non-success statuses into
/// the [`Error`] taxonomy, and does nothing else: no retries, no backoff,
/// no caching, no timeout. Connection reuse across requests is whatever
/// `reqwest`'s pooling provides.
pub struct BaseClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

impl BaseClient {
    /// Creates a client from an explicit bearer token or, when `token` is
    /// `None`, from the `WFRMLS_BEARER_TOKEN` environment variable.
    ///
    /// Fails with [`Error::Authentication`] before any network activity when
    /// neither source yields a token.
    pub fn new(token: Option<String>, base_url: Option<String>) -> Result<Self, Error> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => env::var(TOKEN_ENV_VAR)
                .ok()
                .filter(|t| !t.is_empty())
                .ok_or_else(Error::missing_token)?,
        };
        Ok(Self {
            http: reqwest::Client::new(),
            token,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    fn get_url(&self, path: &str, query: Option<&ODataQuery>) -> Result<Url, Error> {
        let url = Url::parse(&format!("{}/{}", self.base_url, path)).map_err(|e| {
            tracing::error!("invalid URL for endpoint {}: {}", path, e);
            Error::from(e)
        })?;
        Ok(match query {
            Some(q) if !q.is_empty() => q.add_to_url(&url),
            _ => url,
        })
    }

    /// Performs a single authenticated GET against `path` (a resource path
    /// relative to the base URL, e.g. `Property` or `Property('123')`).
    ///
    /// Returns the decoded JSON body on 200/201, an empty JSON object on
    /// 204, and an [`Error`] for everything else.
    pub async fn get(&self, path: &str, query: Option<&ODataQuery>) -> Result<Value, Error> {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("request to {} failed: {}", path, e);
                Error::Network(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("failed to read response body from {}: {}", path, e);
            Error::Network(e)
        })?;

        match status.as_u16() {
            200 | 201 => serde_json::from_str(&body).map_err(|e| {
                tracing::error!("failed to decode response from {}: {}", path, e);
                Error::from(e)
            }),
            204 => Ok(Value::Object(serde_json::Map::new())),
            code => {
                let err = Error::from_status(code, &body);
                tracing::error!("request to {} failed: {}", path, err);
                Err(err)
            }
        }
    }
}
