//! Offline source reading collections from JSON files.

use std::future::Future;
use std::path::{Path, PathBuf};

use desk_core::entities::RawRecord;
use desk_core::enums::Collection;
use desk_core::session::SessionContext;
use serde_json::Value;

use crate::RecordSource;
use crate::error::SourceError;
use crate::http::records_from_payload;

/// Reads `<collection>.json` files from a directory.
///
/// With a hotel selected, `<root>/<hotel_id>/` is used instead when that
/// directory exists. Files hold the same payload shapes the HTTP backend
/// returns. A missing file is a failed fetch for that collection only.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File name backing `collection`.
    #[must_use]
    pub fn file_name(collection: Collection) -> String {
        format!("{collection}.json")
    }

    fn directory_for(&self, ctx: &SessionContext) -> PathBuf {
        ctx.hotel_id
            .as_deref()
            .map(|hotel| self.root.join(hotel))
            .filter(|dir| dir.is_dir())
            .unwrap_or_else(|| self.root.clone())
    }
}

impl RecordSource for DirectorySource {
    fn fetch(
        &self,
        collection: Collection,
        ctx: &SessionContext,
    ) -> impl Future<Output = Result<Vec<RawRecord>, SourceError>> + Send {
        let path = self.directory_for(ctx).join(Self::file_name(collection));
        async move {
            tracing::debug!(%collection, path = %path.display(), "reading collection file");
            let text = tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source,
                })?;
            let payload: Value = serde_json::from_str(&text)?;
            records_from_payload(payload)
        }
    }
}
