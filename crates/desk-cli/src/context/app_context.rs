use std::time::Duration;

use anyhow::Context;
use desk_config::DeskConfig;
use desk_core::session::SessionContext;
use desk_reconcile::ReconcileOptions;
use desk_sources::{DirectorySource, HttpSource};

use super::DeskSource;
use crate::cli::GlobalFlags;

/// Everything a command needs to run a reconciliation cycle.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub source: DeskSource,
    pub session: SessionContext,
    pub options: ReconcileOptions,
    pub interval: Duration,
}

impl AppContext {
    /// Pick the source (`--source-dir` wins over the API) and resolve the
    /// session and reconciliation options from config and flags.
    pub fn init(config: &DeskConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let source = match &flags.source_dir {
            Some(dir) => {
                anyhow::ensure!(
                    dir.is_dir(),
                    "invalid --source-dir '{}': directory does not exist",
                    dir.display()
                );
                DeskSource::Directory(DirectorySource::new(dir))
            }
            None => DeskSource::Http(HttpSource::from_config(config).context(
                "no backend configured. Set api.base_url (FRONTDESK_API__BASE_URL) or pass --source-dir",
            )?),
        };
        tracing::debug!(source = %source.describe(), "selected record source");

        Ok(Self {
            source,
            session: config.session_context(flags.hotel.as_deref()),
            options: reconcile_options(config),
            interval: config.refresh.interval(),
        })
    }
}

fn reconcile_options(config: &DeskConfig) -> ReconcileOptions {
    ReconcileOptions {
        tie_policy: config.reconcile.tie_policy,
        feed_limit: config.refresh.feed_limit,
        default_established_year: config.reconcile.default_established_year,
    }
}
