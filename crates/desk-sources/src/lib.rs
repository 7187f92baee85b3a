//! # desk-sources
//!
//! Where the raw collections come from, and how often.
//!
//! - [`RecordSource`]: one fetch per collection, scoped by a [`SessionContext`]
//! - [`HttpSource`]: the hotel backend over HTTP (reqwest)
//! - [`DirectorySource`]: `<collection>.json` files for offline use
//! - [`fetch_snapshot`]: concurrent fan-out over every collection
//! - [`Poller`]: periodic reconciliation publishing [`DashboardViews`]
//!
//! [`DashboardViews`]: desk_core::views::DashboardViews

mod directory;
mod error;
mod fetch;
mod http;
mod http_source;
mod poller;

pub use directory::DirectorySource;
pub use error::SourceError;
pub use fetch::fetch_snapshot;
pub use http::records_from_payload;
pub use http_source::HttpSource;
pub use poller::{PollHandle, Poller, ViewsReceiver};

use std::future::Future;

use desk_core::entities::RawRecord;
use desk_core::enums::Collection;
use desk_core::session::SessionContext;

/// A backend that can deliver any collection as a list of raw records.
pub trait RecordSource: Send + Sync {
    /// Fetch every record of `collection` visible to `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the collection cannot be fetched or its
    /// payload is not a collection.
    fn fetch(
        &self,
        collection: Collection,
        ctx: &SessionContext,
    ) -> impl Future<Output = Result<Vec<RawRecord>, SourceError>> + Send;
}
