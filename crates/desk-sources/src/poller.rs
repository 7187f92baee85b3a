//! Periodic reconciliation.
//!
//! A poller owns one background task. The task runs a cycle immediately, then
//! on every interval tick and on every [`PollHandle::refresh`] request. Each
//! cycle fetches a fresh snapshot, rebuilds all views from scratch and
//! publishes them on a watch channel, replacing the previous views.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use desk_core::session::SessionContext;
use desk_core::views::DashboardViews;
use desk_reconcile::{ReconcileOptions, build_views};
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::RecordSource;
use crate::fetch::fetch_snapshot;

/// Latest published views. `None` until the first cycle completes.
pub type ViewsReceiver = watch::Receiver<Option<Arc<DashboardViews>>>;

/// Configuration for one polling loop.
#[derive(Debug)]
pub struct Poller<S> {
    source: Arc<S>,
    session: SessionContext,
    options: ReconcileOptions,
    interval: Duration,
}

impl<S: RecordSource + 'static> Poller<S> {
    #[must_use]
    pub const fn new(
        source: Arc<S>,
        session: SessionContext,
        options: ReconcileOptions,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            session,
            options,
            interval,
        }
    }

    /// Spawn the polling task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn start(self) -> PollHandle {
        let (views_tx, views_rx) = watch::channel(None);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let refresh = Arc::new(Notify::new());

        let task = tokio::spawn(run(self, views_tx, Arc::clone(&refresh), shutdown_rx));

        PollHandle {
            views: views_rx,
            refresh,
            shutdown: shutdown_tx,
            task: Some(task),
        }
    }
}

async fn run<S: RecordSource>(
    poller: Poller<S>,
    views_tx: watch::Sender<Option<Arc<DashboardViews>>>,
    refresh: Arc<Notify>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(poller.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut cycle: u64 = 0;

    loop {
        tokio::select! {
            biased;
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
                continue;
            }
            _ = ticker.tick() => {}
            () = refresh.notified() => {
                tracing::debug!("refresh requested");
            }
        }

        cycle += 1;
        let snapshot = fetch_snapshot(poller.source.as_ref(), &poller.session).await;
        if *shutdown.borrow() {
            tracing::debug!(cycle, "poller stopped during fetch; discarding cycle");
            break;
        }

        let views = build_views(&snapshot, &poller.options, Utc::now());
        tracing::info!(
            cycle,
            failed = views.failed_sources.len(),
            "published dashboard views"
        );
        views_tx.send_replace(Some(Arc::new(views)));
    }

    tracing::debug!(cycles = cycle, "poller stopped");
}

/// Control handle for a running [`Poller`].
///
/// Dropping the handle stops the poller.
#[derive(Debug)]
pub struct PollHandle {
    views: ViewsReceiver,
    refresh: Arc<Notify>,
    shutdown: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl PollHandle {
    /// The most recently published views.
    #[must_use]
    pub fn latest(&self) -> Option<Arc<DashboardViews>> {
        self.views.borrow().clone()
    }

    /// A receiver that is notified whenever new views are published.
    #[must_use]
    pub fn subscribe(&self) -> ViewsReceiver {
        self.views.clone()
    }

    /// Run a cycle now instead of waiting for the next tick.
    ///
    /// A request made while a cycle is running queues exactly one more cycle.
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }

    /// Stop issuing cycles. A cycle already fetching finishes its fetch, but
    /// its result is not published.
    pub fn stop(&self) {
        self.shutdown.send_replace(true);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Stop and wait for the background task to exit.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!(%e, "poller task ended abnormally");
            }
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.shutdown.send_replace(true);
    }
}
