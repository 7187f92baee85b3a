//! View builders: pure assembly of the presentation rows.
//!
//! Nothing here fails. Missing joins become [`PLACEHOLDER`] or
//! [`UNASSIGNED_ROOM`], and a view that comes out entirely empty gets a
//! [`ViewNotice`].

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, Utc};
use desk_core::entities::{
    ActivityEvent, DEFAULT_ESTABLISHED_YEAR, FeedbackEntry, Guest, Reservation, Room, RoomState,
};
use desk_core::enums::{ActivityKind, Collection, RoomStatus, TiePolicy};
use desk_core::views::{
    ActivityFeedItem, DashboardSummary, DashboardViews, GuestRosterRow, PLACEHOLDER,
    ReservationRow, RoomStatusRow, UNASSIGNED_ROOM, ViewKind, ViewNotice,
};

use crate::dedup::dedupe_hotels_with_fallback;
use crate::matcher::{EntityMatch, ReservationLink, match_entities};
use crate::merger::{
    canonicalize_room_keys, collect_events, feed_message, fold_room_states, order_feed,
};
use crate::normalize::{normalize_feedback, normalize_guest, normalize_reservations, normalize_room};
use crate::snapshot::SourceSnapshot;

/// Feed length used when nothing else is configured.
pub const DEFAULT_FEED_LIMIT: usize = 50;

/// Knobs for one reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOptions {
    pub tie_policy: TiePolicy,
    pub feed_limit: usize,
    pub default_established_year: i32,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            tie_policy: TiePolicy::default(),
            feed_limit: DEFAULT_FEED_LIMIT,
            default_established_year: DEFAULT_ESTABLISHED_YEAR,
        }
    }
}

/// Room board rows, one per canonical room, in room-list order.
#[must_use]
pub fn room_status_view(
    rooms: &[Room],
    states: &BTreeMap<String, RoomState>,
    matched: &EntityMatch,
) -> Vec<RoomStatusRow> {
    rooms
        .iter()
        .map(|room| {
            let state = states.get(&room.number);
            let guest = matched
                .room_guests
                .get(&room.number)
                .map(|attribution| attribution.guest_name.clone())
                .or_else(|| room.guest_name.clone())
                .unwrap_or_else(placeholder);

            RoomStatusRow {
                room: room.number.clone(),
                floor: room.floor.clone().unwrap_or_else(placeholder),
                guest,
                mode: state.map_or_else(|| room.status.label().to_string(), |s| s.mode.clone()),
                last_action: state.and_then(|s| s.last_action_time),
                tablet_status: room.tablet_status.clone().unwrap_or_else(placeholder),
            }
        })
        .collect()
}

/// Guest roster rows, one per canonical guest, in guest-list order.
#[must_use]
pub fn guest_roster_view(
    guests: &[Guest],
    matched: &EntityMatch,
    states: &BTreeMap<String, RoomState>,
) -> Vec<GuestRosterRow> {
    guests
        .iter()
        .map(|guest| {
            let (room_number, _) = matched.resolve_room(guest);
            let link = matched.reservation_for(&guest.id);
            let last_activity = states
                .get(&room_number)
                .and_then(|state| state.last_action_time);

            GuestRosterRow {
                id: guest.id.clone(),
                name: guest.full_name.clone(),
                email: guest.email.clone().unwrap_or_else(placeholder),
                phone: guest.phone.clone().unwrap_or_else(placeholder),
                room_number,
                check_in: guest
                    .check_in
                    .or_else(|| link.and_then(|l| l.reservation.check_in)),
                check_out: guest
                    .check_out
                    .or_else(|| link.and_then(|l| l.reservation.check_out)),
                status: guest_status(guest, link),
                last_activity,
            }
        })
        .collect()
}

fn guest_status(guest: &Guest, link: Option<&ReservationLink>) -> String {
    if let Some(status) = &guest.status {
        return status.clone();
    }
    match link {
        Some(link) if link.reservation.is_checked_in => String::from("Checked In"),
        Some(_) => String::from("Reserved"),
        None => placeholder(),
    }
}

/// One row per guest, then one per reservation whose guest id matches no
/// guest record.
#[must_use]
pub fn reservation_view(guests: &[Guest], matched: &EntityMatch) -> Vec<ReservationRow> {
    let known: BTreeSet<&str> = guests.iter().map(|guest| guest.id.as_str()).collect();

    let guest_rows = guests.iter().map(|guest| {
        reservation_row(
            guest.id.clone(),
            guest.full_name.clone(),
            matched.reservation_for(&guest.id),
        )
    });
    let orphan_rows = matched
        .reservations
        .iter()
        .filter(|(guest_id, _)| !known.contains(guest_id.as_str()))
        .map(|(guest_id, link)| reservation_row(guest_id.clone(), placeholder(), Some(link)));

    guest_rows.chain(orphan_rows).collect()
}

fn reservation_row(
    guest_id: String,
    guest_name: String,
    link: Option<&ReservationLink>,
) -> ReservationRow {
    ReservationRow {
        guest_id,
        guest_name,
        room_id: link.map(|l| l.reservation.room_id.clone()),
        room_number: link.map(|l| l.room_number.clone()),
        check_in: link.and_then(|l| l.reservation.check_in),
        check_out: link.and_then(|l| l.reservation.check_out),
        is_checked_in: link.is_some_and(|l| l.reservation.is_checked_in),
    }
}

/// Feed items from already ordered and capped events.
#[must_use]
pub fn activity_feed_view(feed: &[ActivityEvent]) -> Vec<ActivityFeedItem> {
    feed.iter()
        .map(|event| ActivityFeedItem {
            id: event.id.clone(),
            kind: event.kind,
            message: feed_message(event),
            time: event.timestamp,
        })
        .collect()
}

/// Headline counts. `events` is the full event list, not the capped feed.
#[must_use]
pub fn dashboard_summary(
    rooms: &[Room],
    guests: &[Guest],
    matched: &EntityMatch,
    events: &[ActivityEvent],
    feed_items: usize,
) -> DashboardSummary {
    let rooms_in = |status: RoomStatus| rooms.iter().filter(|room| room.status == status).count();

    DashboardSummary {
        total_rooms: rooms.len(),
        available_rooms: rooms_in(RoomStatus::Available),
        occupied_rooms: rooms_in(RoomStatus::Occupied),
        maintenance_rooms: rooms_in(RoomStatus::Maintenance),
        cleaning_rooms: rooms_in(RoomStatus::Cleaning),
        total_guests: guests.len(),
        checked_in_guests: matched
            .reservations
            .values()
            .filter(|link| link.reservation.is_checked_in)
            .count(),
        unread_notifications: events
            .iter()
            .filter(|event| event.kind == ActivityKind::Notification)
            .filter(|event| event.is_read != Some(true))
            .count(),
        feed_items,
    }
}

/// Normalize, match, merge and build every view from one snapshot.
#[must_use]
pub fn build_views(
    snapshot: &SourceSnapshot,
    options: &ReconcileOptions,
    now: DateTime<Utc>,
) -> DashboardViews {
    let rooms: Vec<Room> = snapshot
        .records(Collection::Rooms)
        .iter()
        .filter_map(normalize_room)
        .collect();
    let guests: Vec<Guest> = snapshot
        .records(Collection::Guests)
        .iter()
        .filter_map(normalize_guest)
        .collect();
    let reservations: Vec<Reservation> = snapshot
        .records(Collection::Reservations)
        .iter()
        .flat_map(normalize_reservations)
        .collect();
    let feedback: Vec<FeedbackEntry> = snapshot
        .records(Collection::Feedback)
        .iter()
        .filter_map(normalize_feedback)
        .collect();

    let matched = match_entities(&rooms, &guests, &reservations, &feedback);

    let mut events = collect_events(
        snapshot.records(Collection::RoomService),
        snapshot.records(Collection::TechnicalIssues),
        snapshot.records(Collection::Notifications),
    );
    canonicalize_room_keys(&mut events, &rooms);
    let states = fold_room_states(&events, options.tie_policy);
    let feed = activity_feed_view(&order_feed(&events, options.feed_limit));

    let hotels = dedupe_hotels_with_fallback(
        snapshot.records(Collection::Hotels),
        now.year(),
        options.default_established_year,
    );

    let mut views = DashboardViews {
        generated_at: now,
        rooms: room_status_view(&rooms, &states, &matched),
        guests: guest_roster_view(&guests, &matched, &states),
        reservations: reservation_view(&guests, &matched),
        summary: dashboard_summary(&rooms, &guests, &matched, &events, feed.len()),
        feed,
        hotels,
        notices: Vec::new(),
        failed_sources: snapshot.failed().to_vec(),
    };
    views.notices = notices(&views, snapshot);

    tracing::info!(
        rooms = views.rooms.len(),
        guests = views.guests.len(),
        events = events.len(),
        hotels = views.hotels.len(),
        failed = views.failed_sources.len(),
        "reconciled dashboard views"
    );

    views
}

/// Banners for views that came out empty, naming failed sources when that is
/// the cause.
#[must_use]
pub fn notices(views: &DashboardViews, snapshot: &SourceSnapshot) -> Vec<ViewNotice> {
    let checks: [(ViewKind, bool, &[Collection]); 5] = [
        (ViewKind::Rooms, views.rooms.is_empty(), &[Collection::Rooms]),
        (ViewKind::Guests, views.guests.is_empty(), &[Collection::Guests]),
        (
            ViewKind::Reservations,
            views.reservations.is_empty(),
            &[Collection::Reservations],
        ),
        (
            ViewKind::Feed,
            views.feed.is_empty(),
            &[
                Collection::RoomService,
                Collection::TechnicalIssues,
                Collection::Notifications,
            ],
        ),
        (ViewKind::Hotels, views.hotels.is_empty(), &[Collection::Hotels]),
    ];

    checks
        .into_iter()
        .filter(|(_, empty, _)| *empty)
        .map(|(view, _, sources)| {
            let failed: Vec<&str> = sources
                .iter()
                .filter(|collection| snapshot.is_failed(**collection))
                .map(|collection| collection.as_str())
                .collect();
            let message = if failed.is_empty() {
                format!("No {} to show", view_label(view))
            } else {
                format!(
                    "No {} to show: {} unavailable",
                    view_label(view),
                    failed.join(", ")
                )
            };
            ViewNotice { view, message }
        })
        .collect()
}

const fn view_label(view: ViewKind) -> &'static str {
    match view {
        ViewKind::Rooms => "rooms",
        ViewKind::Guests => "guests",
        ViewKind::Reservations => "reservations",
        ViewKind::Feed => "activity",
        ViewKind::Hotels => "hotels",
    }
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

/// Room number shown for guests with no evidence at all.
#[must_use]
pub fn is_unassigned(room_number: &str) -> bool {
    room_number == UNASSIGNED_ROOM
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use desk_core::entities::RawRecord;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn records(values: &[serde_json::Value]) -> Vec<RawRecord> {
        values
            .iter()
            .cloned()
            .map(|value| RawRecord::from_value(value).unwrap())
            .collect()
    }

    fn base_snapshot() -> SourceSnapshot {
        SourceSnapshot::new()
            .with(
                Collection::Rooms,
                records(&[
                    json!({"id": 9, "room_number": "205", "floor": 2, "status": "occupied", "tablet_status": "Online"}),
                    json!({"id": 10, "number": 101, "status": "cleaning"}),
                    json!({"id": 11, "roomNumber": "310", "guest_name": "Walk In"}),
                ]),
            )
            .with(
                Collection::Guests,
                records(&[
                    json!({"id": 5, "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com"}),
                    json!({"id": 6, "name": "Grace Hopper"}),
                    json!({"id": 7, "name": "Alan Turing", "room_number": "404", "status": "VIP"}),
                ]),
            )
            .with(
                Collection::Reservations,
                records(&[
                    json!({"guest_id": 5, "room_id": 9, "is_checked_in": true, "check_in": "2026-02-28"}),
                    json!({"guest_id": 99, "room_id": 10}),
                ]),
            )
            .with(
                Collection::RoomService,
                records(&[
                    json!({"room": "101", "type": "clean", "timestamp": "2026-03-01T09:00:00Z"}),
                    json!({"room": "101", "type": "dnd", "timestamp": "2026-03-01T10:00:00Z"}),
                ]),
            )
            .with(
                Collection::Notifications,
                records(&[
                    json!({"room": "205", "type": "check_in", "created_at": "2026-03-01T08:00:00Z", "is_read": false}),
                    json!({"message": "Pool closes early", "created_at": "2026-03-01T11:00:00Z", "is_read": true}),
                ]),
            )
            .with(
                Collection::Feedback,
                records(&[json!({"guest_name": "grace hopper ", "room_number": "310", "submitted_time": "2026-03-01T07:00:00Z"})]),
            )
            .with(
                Collection::Hotels,
                records(&[
                    json!({"name": "Grand", "address": "1 Main", "city": "NY", "country": "US", "established_year": 1990}),
                    json!({"name": "grand", "address": "1 Main", "city": "NY", "country": "US", "established_year": 1995}),
                ]),
            )
    }

    fn build(snapshot: &SourceSnapshot) -> DashboardViews {
        build_views(snapshot, &ReconcileOptions::default(), now())
    }

    #[test]
    fn room_board_merges_latest_activity() {
        let views = build(&base_snapshot());
        let row = views.rooms.iter().find(|r| r.room == "101").unwrap();
        assert_eq!(row.mode, "Do Not Disturb");
        assert_eq!(
            row.last_action,
            Some(Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(row.floor, PLACEHOLDER);
        assert_eq!(row.tablet_status, PLACEHOLDER);
    }

    #[test]
    fn room_without_activity_shows_status_label() {
        let views = build(&base_snapshot());
        let row = views.rooms.iter().find(|r| r.room == "310").unwrap();
        assert_eq!(row.mode, "Available");
        assert_eq!(row.last_action, None);
    }

    #[test]
    fn room_board_guest_comes_from_matching_then_raw_field() {
        let views = build(&base_snapshot());
        let by_room = |room: &str| views.rooms.iter().find(|r| r.room == room).unwrap().clone();
        assert_eq!(by_room("205").guest, "Ada Lovelace");
        assert_eq!(by_room("205").tablet_status, "Online");
        assert_eq!(by_room("205").floor, "2");
        // Grace claims 310 through feedback, ahead of the raw guest_name.
        assert_eq!(by_room("310").guest, "Grace Hopper");
        // Room 101's only reservation belongs to an unknown guest id.
        assert_eq!(by_room("101").guest, PLACEHOLDER);
    }

    #[test]
    fn roster_resolves_rooms_by_evidence() {
        let views = build(&base_snapshot());
        let ada = &views.guests[0];
        assert_eq!(ada.room_number, "205");
        assert_eq!(ada.status, "Checked In");
        assert_eq!(ada.last_activity, Some(Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap()));
        assert_eq!(ada.check_in, Some(Utc.with_ymd_and_hms(2026, 2, 28, 0, 0, 0).unwrap()));

        let grace = &views.guests[1];
        assert_eq!(grace.room_number, "310");
        assert_eq!(grace.status, PLACEHOLDER);
        assert_eq!(grace.email, PLACEHOLDER);

        let alan = &views.guests[2];
        assert_eq!(alan.room_number, "404");
        assert_eq!(alan.status, "VIP");
    }

    #[test]
    fn failed_feedback_leaves_guest_unassigned() {
        let mut snapshot = base_snapshot();
        snapshot.mark_failed(Collection::Feedback);
        let views = build(&snapshot);

        let grace = views.guests.iter().find(|g| g.id == "6").unwrap();
        assert_eq!(grace.room_number, UNASSIGNED_ROOM);
        assert!(is_unassigned(&grace.room_number));
        assert_eq!(views.failed_sources, vec![Collection::Feedback]);
        assert!(!views.rooms.is_empty());
    }

    #[test]
    fn reservation_view_includes_orphans() {
        let views = build(&base_snapshot());
        let ids: Vec<_> = views.reservations.iter().map(|r| r.guest_id.as_str()).collect();
        assert_eq!(ids, vec!["5", "6", "7", "99"]);

        assert_eq!(views.reservations[0].room_number.as_deref(), Some("205"));
        assert_eq!(views.reservations[0].room_id.as_deref(), Some("9"));
        assert!(views.reservations[0].is_checked_in);
        assert_eq!(views.reservations[1].room_number, None);
        assert_eq!(views.reservations[3].guest_name, PLACEHOLDER);
        assert_eq!(views.reservations[3].room_number.as_deref(), Some("101"));
    }

    #[test]
    fn feed_is_ordered_and_messaged() {
        let views = build(&base_snapshot());
        let messages: Vec<_> = views.feed.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Pool closes early",
                "Do Not Disturb requested for Room 101",
                "Cleaning requested for Room 101",
                "New guest checked in to Room 205",
            ]
        );
    }

    #[test]
    fn feed_respects_limit() {
        let options = ReconcileOptions {
            feed_limit: 1,
            ..ReconcileOptions::default()
        };
        let views = build_views(&base_snapshot(), &options, now());
        assert_eq!(views.feed.len(), 1);
        assert_eq!(views.summary.feed_items, 1);
    }

    #[test]
    fn hotels_are_deduplicated() {
        let views = build(&base_snapshot());
        assert_eq!(views.hotels.len(), 1);
        assert_eq!(views.hotels[0].established_year, 1990);
    }

    #[test]
    fn summary_counts() {
        let summary = build(&base_snapshot()).summary;
        assert_eq!(
            summary,
            DashboardSummary {
                total_rooms: 3,
                available_rooms: 1,
                occupied_rooms: 1,
                maintenance_rooms: 0,
                cleaning_rooms: 1,
                total_guests: 3,
                checked_in_guests: 1,
                unread_notifications: 1,
                feed_items: 4,
            }
        );
    }

    #[test]
    fn empty_snapshot_raises_notices_for_every_view() {
        let mut snapshot = SourceSnapshot::new();
        snapshot.mark_failed(Collection::Rooms);
        let views = build(&snapshot);

        let kinds: Vec<_> = views.notices.iter().map(|n| n.view).collect();
        assert_eq!(
            kinds,
            vec![
                ViewKind::Rooms,
                ViewKind::Guests,
                ViewKind::Reservations,
                ViewKind::Feed,
                ViewKind::Hotels
            ]
        );
        assert_eq!(views.notices[0].message, "No rooms to show: rooms unavailable");
        assert_eq!(views.notices[1].message, "No guests to show");
    }

    #[test]
    fn tie_policy_flows_through_options() {
        let snapshot = SourceSnapshot::new()
            .with(
                Collection::Rooms,
                records(&[json!({"room_number": "101"})]),
            )
            .with(
                Collection::RoomService,
                records(&[
                    json!({"room": "101", "type": "clean", "time": "2026-03-01T09:00:00Z"}),
                    json!({"room": "101", "type": "laundry", "time": "2026-03-01T09:00:00Z"}),
                ]),
            );

        let later = build(&snapshot);
        assert_eq!(later.rooms[0].mode, "Laundry");

        let earlier = build_views(
            &snapshot,
            &ReconcileOptions {
                tie_policy: TiePolicy::EarlierWins,
                ..ReconcileOptions::default()
            },
            now(),
        );
        assert_eq!(earlier.rooms[0].mode, "Cleaning");
    }

    #[test]
    fn activity_by_room_id_and_number_share_one_state() {
        let snapshot = SourceSnapshot::new()
            .with(Collection::Rooms, records(&[json!({"id": 9, "room_number": "205"})]))
            .with(Collection::Guests, records(&[json!({"id": 5, "name": "Ada"})]))
            .with(
                Collection::Reservations,
                records(&[json!({"guest_id": 5, "room_id": 9})]),
            )
            .with(
                Collection::RoomService,
                records(&[json!({"room_number": "205", "type": "clean", "time": "2026-03-01T09:00:00Z"})]),
            )
            .with(
                Collection::Notifications,
                records(&[json!({"room_id": 9, "type": "dnd", "time": "2026-03-01T11:00:00Z"})]),
            );

        let views = build(&snapshot);
        let eleven = Some(Utc.with_ymd_and_hms(2026, 3, 1, 11, 0, 0).unwrap());
        assert_eq!(views.rooms[0].mode, "Do Not Disturb");
        assert_eq!(views.rooms[0].last_action, eleven);
        assert_eq!(views.guests[0].room_number, "205");
        assert_eq!(views.guests[0].last_activity, eleven);
        assert_eq!(views.feed[0].message, "Do Not Disturb in Room 205");
    }
}
