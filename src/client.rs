//! The facade client exposing every resource client behind one credential.

use std::sync::{Arc, OnceLock};

use crate::{
    resource::{
        DeletedClient, LookupClient, MediaClient, MemberClient, OfficeClient, OpenHouseClient,
        PropertyClient,
    },
    transport::BaseClient,
    Error,
};

/// Top-level entry point for the WFRMLS RESO API.
///
/// Holds the authenticated session and constructs each resource client on
/// first access, reusing the same instance afterwards. Credentials are
/// validated once, at construction.
///
/// ```no_run
/// # async fn example() -> Result<(), wfrmls::Error> {
/// use wfrmls::{ODataQuery, WfrmlsClient};
///
/// let client = WfrmlsClient::new(Some("token".to_string()), None)?;
/// let listings = client
///     .property()
///     .get_active_properties(&ODataQuery::default().with_top(10))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct WfrmlsClient {
    base: Arc<BaseClient>,
    property: OnceLock<PropertyClient>,
    member: OnceLock<MemberClient>,
    office: OnceLock<OfficeClient>,
    media: OnceLock<MediaClient>,
    open_house: OnceLock<OpenHouseClient>,
    lookup: OnceLock<LookupClient>,
    deleted: OnceLock<DeletedClient>,
}

impl WfrmlsClient {
    /// Creates a facade from an explicit bearer token or, when `token` is
    /// `None`, from the `WFRMLS_BEARER_TOKEN` environment variable.
    /// `base_url` overrides the production endpoint, mainly for tests.
    pub fn new(token: Option<String>, base_url: Option<String>) -> Result<Self, Error> {
        Ok(Self {
            base: Arc::new(BaseClient::new(token, base_url)?),
            property: OnceLock::new(),
            member: OnceLock::new(),
            office: OnceLock::new(),
            media: OnceLock::new(),
            open_house: OnceLock::new(),
            lookup: OnceLock::new(),
            deleted: OnceLock::new(),
        })
    }

    /// The `Property` resource client.
    pub fn property(&self) -> &PropertyClient {
        self.property
            .get_or_init(|| PropertyClient::with_base(self.base.clone()))
    }

    /// The `Member` resource client.
    pub fn member(&self) -> &MemberClient {
        self.member
            .get_or_init(|| MemberClient::with_base(self.base.clone()))
    }

    /// The `Office` resource client.
    pub fn office(&self) -> &OfficeClient {
        self.office
            .get_or_init(|| OfficeClient::with_base(self.base.clone()))
    }

    /// The `Media` resource client.
    pub fn media(&self) -> &MediaClient {
        self.media
            .get_or_init(|| MediaClient::with_base(self.base.clone()))
    }

    /// The `OpenHouse` resource client.
    pub fn open_house(&self) -> &OpenHouseClient {
        self.open_house
            .get_or_init(|| OpenHouseClient::with_base(self.base.clone()))
    }

    /// The `Lookup` resource client.
    pub fn lookup(&self) -> &LookupClient {
        self.lookup
            .get_or_init(|| LookupClient::with_base(self.base.clone()))
    }

    /// The `Deleted` resource client.
    pub fn deleted(&self) -> &DeletedClient {
        self.deleted
            .get_or_init(|| DeletedClient::with_base(self.base.clone()))
    }
}
