//! Concurrent snapshot fetch.

use desk_core::enums::Collection;
use desk_core::session::SessionContext;
use desk_reconcile::SourceSnapshot;

use crate::RecordSource;

/// Fetch every collection concurrently and wait for all of them.
///
/// Individual collection failures are logged and treated as empty results.
/// One failing collection does not fail the snapshot; it is listed in
/// [`SourceSnapshot::failed`] instead.
pub async fn fetch_snapshot<S: RecordSource>(source: &S, ctx: &SessionContext) -> SourceSnapshot {
    let (rooms, guests, reservations, room_service, technical_issues, notifications, feedback, hotels) = tokio::join!(
        source.fetch(Collection::Rooms, ctx),
        source.fetch(Collection::Guests, ctx),
        source.fetch(Collection::Reservations, ctx),
        source.fetch(Collection::RoomService, ctx),
        source.fetch(Collection::TechnicalIssues, ctx),
        source.fetch(Collection::Notifications, ctx),
        source.fetch(Collection::Feedback, ctx),
        source.fetch(Collection::Hotels, ctx),
    );

    let results = [
        (Collection::Rooms, rooms),
        (Collection::Guests, guests),
        (Collection::Reservations, reservations),
        (Collection::RoomService, room_service),
        (Collection::TechnicalIssues, technical_issues),
        (Collection::Notifications, notifications),
        (Collection::Feedback, feedback),
        (Collection::Hotels, hotels),
    ];

    let mut snapshot = SourceSnapshot::new();
    for (collection, result) in results {
        match result {
            Ok(records) => {
                tracing::debug!(%collection, count = records.len(), "collection fetched");
                snapshot.insert(collection, records);
            }
            Err(e) => {
                tracing::warn!(%collection, %e, "collection fetch failed; treating as empty");
                snapshot.mark_failed(collection);
            }
        }
    }
    snapshot
}
