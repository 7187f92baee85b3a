//! Event merging: per-room current state and the unified activity feed.
//!
//! Service requests, technical issues, and notifications are normalized into
//! [`ActivityEvent`]s in source order (service, technical, notification), then
//! folded into one [`RoomState`] per room with [`prefer`] deciding every
//! pairwise comparison.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use desk_core::entities::{ActivityEvent, RawRecord, Room, RoomState};
use desk_core::enums::{ActivityKind, TiePolicy};

use crate::normalize::{fold_key, normalize_activity};

/// Outcome of comparing the running best record against a new candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Current,
    Candidate,
}

/// Decide whether `candidate` replaces `current` as a room's latest record.
///
/// A later timestamp wins. An absent timestamp is older than any present one.
/// Equal timestamps (including two absent ones) are settled by `policy`.
#[must_use]
pub fn prefer(current: &ActivityEvent, candidate: &ActivityEvent, policy: TiePolicy) -> Winner {
    match candidate.timestamp.cmp(&current.timestamp) {
        Ordering::Greater => Winner::Candidate,
        Ordering::Less => Winner::Current,
        Ordering::Equal => match policy {
            TiePolicy::LaterWins => Winner::Candidate,
            TiePolicy::EarlierWins => Winner::Current,
        },
    }
}

/// Normalize all three activity sources into one list, in processing order.
#[must_use]
pub fn collect_events(
    service: &[RawRecord],
    technical: &[RawRecord],
    notifications: &[RawRecord],
) -> Vec<ActivityEvent> {
    let sources = [
        (ActivityKind::Service, service),
        (ActivityKind::Technical, technical),
        (ActivityKind::Notification, notifications),
    ];

    sources
        .into_iter()
        .flat_map(|(kind, records)| {
            records
                .iter()
                .enumerate()
                .filter_map(move |(position, record)| normalize_activity(record, kind, position))
        })
        .collect()
}

/// Rewrite every event's room key to the room number it refers to.
///
/// Activity sources name a room by number or by id. A key that already is a
/// room number is kept; a key matching a room id becomes that room's number.
/// Keys matching neither are left as they are.
pub fn canonicalize_room_keys(events: &mut [ActivityEvent], rooms: &[Room]) {
    let numbers: HashSet<&str> = rooms.iter().map(|room| room.number.as_str()).collect();
    let numbers_by_id: HashMap<&str, &str> = rooms
        .iter()
        .map(|room| (room.id.as_str(), room.number.as_str()))
        .collect();

    for event in events {
        let Some(key) = event.room_key.as_deref() else {
            continue;
        };
        if numbers.contains(key) {
            continue;
        }
        let Some(number) = numbers_by_id.get(key).map(|number| (*number).to_string()) else {
            continue;
        };
        tracing::debug!(event = %event.id, room_id = key, room = %number, "resolved room id to number");
        event.room_key = Some(number);
    }
}

/// Fold events into one state per room.
///
/// Events without a room key cannot describe a room and are ignored here;
/// they still appear in the feed.
#[must_use]
pub fn fold_room_states(
    events: &[ActivityEvent],
    policy: TiePolicy,
) -> BTreeMap<String, RoomState> {
    let mut best: BTreeMap<&str, &ActivityEvent> = BTreeMap::new();

    for event in events {
        let Some(room) = event.room_key.as_deref() else {
            continue;
        };
        let replace = best
            .get(room)
            .is_none_or(|current| prefer(current, event, policy) == Winner::Candidate);
        if replace {
            best.insert(room, event);
        }
    }

    best.into_iter()
        .map(|(room, event)| {
            let mode = event
                .raw_mode
                .as_deref()
                .map_or_else(|| desk_core::views::PLACEHOLDER.to_string(), canonical_mode);
            (
                room.to_string(),
                RoomState {
                    room_key: room.to_string(),
                    mode,
                    last_action_time: event.timestamp,
                },
            )
        })
        .collect()
}

/// Normalize all three sources, then fold them into per-room states.
#[must_use]
pub fn merge_room_states(
    service: &[RawRecord],
    technical: &[RawRecord],
    notifications: &[RawRecord],
    policy: TiePolicy,
) -> BTreeMap<String, RoomState> {
    fold_room_states(&collect_events(service, technical, notifications), policy)
}

/// Normalize all three sources into the feed, newest first, at most `limit`.
#[must_use]
pub fn build_feed(
    service: &[RawRecord],
    technical: &[RawRecord],
    notifications: &[RawRecord],
    limit: usize,
) -> Vec<ActivityEvent> {
    order_feed(&collect_events(service, technical, notifications), limit)
}

/// Events newest first. Events without a usable timestamp go last; equal
/// timestamps keep processing order.
#[must_use]
pub fn order_feed(events: &[ActivityEvent], limit: usize) -> Vec<ActivityEvent> {
    let mut feed = events.to_vec();
    feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    feed.truncate(limit);
    feed
}

/// Map a raw mode string through the synonym table.
///
/// Matching is case-insensitive and treats `_`, `-` and spaces alike. Unknown
/// strings come back trimmed, with their original casing.
#[must_use]
pub fn canonical_mode(raw: &str) -> String {
    let canonical = match fold_key(raw).as_str() {
        "clean" | "cleaning" | "housekeeping" | "make up room" | "makeup room" | "mur" => {
            "Cleaning"
        }
        "dnd" | "do not disturb" => "Do Not Disturb",
        "maintenance" | "repair" | "out of order" => "Maintenance",
        "room service" | "food" | "food order" | "dining" => "Room Service",
        "laundry" => "Laundry",
        "check in" | "checkin" | "checked in" => "Checked In",
        "check out" | "checkout" | "checked out" => "Checked Out",
        "technical" | "technical issue" | "tech issue" => "Technical Issue",
        "available" | "vacant" => "Available",
        "occupied" => "Occupied",
        "sos" | "emergency" => "Emergency",
        _ => return raw.trim().to_string(),
    };
    canonical.to_string()
}

/// Feed text for an event: its own message when it has one, otherwise a
/// sentence derived from its kind and mode.
#[must_use]
pub fn feed_message(event: &ActivityEvent) -> String {
    if let Some(message) = &event.message {
        return message.clone();
    }

    let mode = event.raw_mode.as_deref().map(canonical_mode);
    let Some(room) = event.room_key.as_deref() else {
        return mode.unwrap_or_else(|| String::from("Activity recorded"));
    };

    match (event.kind, mode.as_deref()) {
        (_, Some("Checked In")) => format!("New guest checked in to Room {room}"),
        (_, Some("Checked Out")) => format!("Guest checked out of Room {room}"),
        (ActivityKind::Technical, Some("Technical Issue") | None) => {
            format!("Technical issue reported in Room {room}")
        }
        (ActivityKind::Technical, Some(detail)) => {
            format!("Technical issue reported in Room {room}: {detail}")
        }
        (ActivityKind::Service, Some(mode)) => format!("{mode} requested for Room {room}"),
        (ActivityKind::Service, None) => format!("Service requested for Room {room}"),
        (ActivityKind::Notification, Some(mode)) => format!("{mode} in Room {room}"),
        (ActivityKind::Notification, None) => format!("Update for Room {room}"),
    }
}
