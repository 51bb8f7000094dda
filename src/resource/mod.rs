//! Per-resource clients.
//!
//! Each client is a thin wrapper over the shared [`BaseClient`]: a
//! collection getter that forwards an [`ODataQuery`], a by-key getter, and
//! convenience methods that only prepend a fixed filter or ordering before
//! delegating. Every method maps to exactly one HTTP request; errors
//! propagate from the base client unchanged.
//!
//! [`BaseClient`]: crate::BaseClient
//! [`ODataQuery`]: crate::ODataQuery

mod deleted;
pub use self::deleted::DeletedClient;

mod lookup;
pub use self::lookup::LookupClient;

mod media;
pub use self::media::MediaClient;

mod member;
pub use self::member::MemberClient;

mod office;
pub use self::office::OfficeClient;

mod open_house;
pub use self::open_house::OpenHouseClient;

mod property;
pub use self::property::PropertyClient;
