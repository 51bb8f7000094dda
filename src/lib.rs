//! Rust client for the WFRMLS RESO Web API (OData v4).
//!
//! A thin, read-only binding: it builds OData query strings, attaches the
//! bearer token, issues one GET per call, and maps non-success statuses to
//! [`Error`]. Entities come back as opaque JSON; the library does not model
//! the RESO schema, paginate, retry, or cache. Callers wanting resilience
//! layer it on top.
//!
//! ```no_run
//! # async fn example() -> Result<(), wfrmls::Error> {
//! use wfrmls::{ODataQuery, WfrmlsClient};
//!
//! // Token from WFRMLS_BEARER_TOKEN when not passed explicitly.
//! let client = WfrmlsClient::new(None, None)?;
//! let active = client
//!     .property()
//!     .get_active_properties(&ODataQuery::default().with_top(25))
//!     .await?;
//! println!("{}", active["value"].as_array().map(Vec::len).unwrap_or(0));
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod query;
pub mod resource;
mod transport;
pub mod types;

pub use self::client::WfrmlsClient;
pub use self::error::Error;
pub use self::query::{ODataQuery, MAX_PAGE_SIZE};
pub use self::transport::{BaseClient, DEFAULT_BASE_URL, TOKEN_ENV_VAR};
pub use self::types::ODataEnvelope;
