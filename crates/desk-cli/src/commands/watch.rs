use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};
use desk_core::enums::Collection;
use desk_core::views::{DashboardSummary, DashboardViews, ViewNotice};
use desk_sources::Poller;
use serde::Serialize;

use crate::cli::{GlobalFlags, WatchArgs};
use crate::context::AppContext;
use crate::output::output;

/// What `watch` prints after every cycle.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CycleReport<'a> {
    cycle: u32,
    generated_at: DateTime<Utc>,
    summary: &'a DashboardSummary,
    failed_sources: &'a [Collection],
    notices: &'a [ViewNotice],
}

impl<'a> CycleReport<'a> {
    fn new(cycle: u32, views: &'a DashboardViews) -> Self {
        Self {
            cycle,
            generated_at: views.generated_at,
            summary: &views.summary,
            failed_sources: &views.failed_sources,
            notices: &views.notices,
        }
    }
}

/// Poll until Ctrl-C or until `--cycles` views have been printed.
pub async fn handle(args: &WatchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let interval = args
        .interval
        .map_or(ctx.interval, |secs| Duration::from_secs(secs.max(1)));
    tracing::info!(interval_secs = interval.as_secs(), "watching dashboard");

    let handle = Poller::new(
        Arc::new(ctx.source.clone()),
        ctx.session.clone(),
        ctx.options,
        interval,
    )
    .start();
    let mut views_rx = handle.subscribe();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut printed = 0u32;
    loop {
        tokio::select! {
            signal = &mut ctrl_c => {
                signal.context("failed to listen for Ctrl-C")?;
                tracing::info!("interrupted; stopping poller");
                break;
            }
            changed = views_rx.changed() => {
                if changed.is_err() {
                    tracing::warn!("poller exited unexpectedly");
                    break;
                }
                let latest = views_rx.borrow_and_update().clone();
                let Some(views) = latest else {
                    continue;
                };

                printed += 1;
                output(&CycleReport::new(printed, &views), flags.format)?;
                if args.cycles.is_some_and(|max| printed >= max) {
                    break;
                }
            }
        }
    }

    handle.shutdown().await;
    Ok(())
}
