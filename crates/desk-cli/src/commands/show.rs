use chrono::Utc;
use desk_core::views::{DashboardViews, ViewKind};
use desk_reconcile::build_views;
use desk_sources::fetch_snapshot;

use crate::cli::GlobalFlags;
use crate::commands::limit::{limit_views, limited};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Which part of the reconciled views a one-shot command prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Rooms,
    Guests,
    Reservations,
    Feed,
    Hotels,
    Summary,
    All,
}

impl Selection {
    /// Whether a notice about `view` concerns this selection.
    const fn covers(self, view: ViewKind) -> bool {
        matches!(
            (self, view),
            (Self::All, _)
                | (Self::Rooms, ViewKind::Rooms)
                | (Self::Guests, ViewKind::Guests)
                | (Self::Reservations, ViewKind::Reservations)
                | (Self::Feed, ViewKind::Feed)
                | (Self::Hotels, ViewKind::Hotels)
        )
    }
}

/// Run one reconciliation cycle against the configured source.
pub async fn run_cycle(ctx: &AppContext) -> DashboardViews {
    let spinner = Progress::spinner("Fetching hotel data...");
    let snapshot = fetch_snapshot(&ctx.source, &ctx.session).await;
    let views = build_views(&snapshot, &ctx.options, Utc::now());
    spinner.finish_clear();
    views
}

pub async fn handle(selection: Selection, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let views = run_cycle(ctx).await;

    for notice in views.notices.iter().filter(|n| selection.covers(n.view)) {
        tracing::warn!("{}", notice.message);
    }

    let limit = flags.limit;
    match selection {
        Selection::Rooms => output(&limited(&views.rooms, limit), flags.format),
        Selection::Guests => output(&limited(&views.guests, limit), flags.format),
        Selection::Reservations => output(&limited(&views.reservations, limit), flags.format),
        Selection::Feed => output(&limited(&views.feed, limit), flags.format),
        Selection::Hotels => output(&limited(&views.hotels, limit), flags.format),
        Selection::Summary => output(&views.summary, flags.format),
        Selection::All => output(&limit_views(&views, limit), flags.format),
    }
}
