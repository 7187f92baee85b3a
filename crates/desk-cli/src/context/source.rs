use std::future::Future;

use desk_core::entities::RawRecord;
use desk_core::enums::Collection;
use desk_core::session::SessionContext;
use desk_sources::{DirectorySource, HttpSource, RecordSource, SourceError};

/// The source selected for this invocation.
#[derive(Debug, Clone)]
pub enum DeskSource {
    Http(HttpSource),
    Directory(DirectorySource),
}

impl DeskSource {
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Http(_) => String::from("backend API"),
            Self::Directory(source) => format!("directory {}", source.root().display()),
        }
    }
}

impl RecordSource for DeskSource {
    fn fetch(
        &self,
        collection: Collection,
        ctx: &SessionContext,
    ) -> impl Future<Output = Result<Vec<RawRecord>, SourceError>> + Send {
        async move {
            match self {
                Self::Http(source) => source.fetch(collection, ctx).await,
                Self::Directory(source) => source.fetch(collection, ctx).await,
            }
        }
    }
}
