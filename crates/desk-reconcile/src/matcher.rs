//! Entity matching: which guest is in which room.
//!
//! Evidence is ranked. A reservation beats the room field on the guest record
//! itself, which beats a feedback submission matched by name. A guest with no
//! evidence at all gets [`UNASSIGNED_ROOM`].

use std::collections::{BTreeMap, BTreeSet, HashMap};

use desk_core::entities::{FeedbackEntry, Guest, Reservation, Room};
use desk_core::views::UNASSIGNED_ROOM;

/// Where a guest's room number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Evidence {
    Reservation,
    GuestRecord,
    Feedback,
    None,
}

/// A guest's first reservation, with its room id resolved to a room number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationLink {
    pub reservation: Reservation,
    pub room_number: String,
}

/// The guest attributed to a room on the room board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestAttribution {
    pub guest_id: String,
    pub guest_name: String,
    pub checked_in: bool,
    pub evidence: Evidence,
}

/// Result of one matching pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityMatch {
    /// Guest id to that guest's first reservation. Includes guest ids that
    /// appear in no guest record.
    pub reservations: BTreeMap<String, ReservationLink>,
    /// Folded guest name to the room claimed through feedback.
    pub feedback_rooms: BTreeMap<String, String>,
    /// Guest id to resolved room number, for guests with any evidence.
    pub guest_rooms: BTreeMap<String, String>,
    /// Room number to the guest attributed to it.
    pub room_guests: BTreeMap<String, GuestAttribution>,
}

impl EntityMatch {
    /// Room number for `guest` and the evidence it came from.
    #[must_use]
    pub fn resolve_room(&self, guest: &Guest) -> (String, Evidence) {
        if let Some(link) = self.reservations.get(&guest.id) {
            return (link.room_number.clone(), Evidence::Reservation);
        }
        if let Some(room) = &guest.room_number {
            return (room.clone(), Evidence::GuestRecord);
        }
        if let Some(room) = self.feedback_rooms.get(&name_key(&guest.full_name)) {
            return (room.clone(), Evidence::Feedback);
        }
        (UNASSIGNED_ROOM.to_string(), Evidence::None)
    }

    /// The reservation backing `guest_id`, if any.
    #[must_use]
    pub fn reservation_for(&self, guest_id: &str) -> Option<&ReservationLink> {
        self.reservations.get(guest_id)
    }
}

/// Case-insensitive, whitespace-trimmed name key.
#[must_use]
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Join rooms, guests, reservations and feedback.
///
/// Missing collections are passed as empty slices.
#[must_use]
pub fn match_entities(
    rooms: &[Room],
    guests: &[Guest],
    reservations: &[Reservation],
    feedback: &[FeedbackEntry],
) -> EntityMatch {
    let mut matched = EntityMatch {
        reservations: link_reservations(rooms, reservations),
        feedback_rooms: claim_feedback_rooms(feedback),
        ..EntityMatch::default()
    };

    let mut resolved: Vec<(&Guest, String, Evidence)> = guests
        .iter()
        .map(|guest| {
            let (room, evidence) = matched.resolve_room(guest);
            (guest, room, evidence)
        })
        .filter(|(_, _, evidence)| *evidence != Evidence::None)
        .collect();

    for (guest, room, _) in &resolved {
        matched.guest_rooms.insert(guest.id.clone(), room.clone());
    }

    // Stronger evidence claims a room first; checked-in guests before
    // reserved ones; otherwise input order.
    resolved.sort_by_key(|(guest, _, evidence)| {
        let checked_in = matched
            .reservations
            .get(&guest.id)
            .is_some_and(|link| link.reservation.is_checked_in);
        (*evidence, !checked_in)
    });

    for (guest, room, evidence) in resolved {
        if matched.room_guests.contains_key(&room) {
            continue;
        }
        let checked_in = matched
            .reservations
            .get(&guest.id)
            .is_some_and(|link| link.reservation.is_checked_in);
        matched.room_guests.insert(
            room,
            GuestAttribution {
                guest_id: guest.id.clone(),
                guest_name: guest.full_name.clone(),
                checked_in,
                evidence,
            },
        );
    }

    matched
}

/// First reservation per guest id, with room ids resolved through the room
/// list, then the reservation's own room number, then the raw id.
fn link_reservations(
    rooms: &[Room],
    reservations: &[Reservation],
) -> BTreeMap<String, ReservationLink> {
    let numbers_by_id: HashMap<&str, &str> = rooms
        .iter()
        .map(|room| (room.id.as_str(), room.number.as_str()))
        .collect();

    let mut links = BTreeMap::new();
    for reservation in reservations {
        if links.contains_key(&reservation.guest_id) {
            tracing::debug!(
                guest_id = %reservation.guest_id,
                "ignoring additional reservation for guest"
            );
            continue;
        }
        let room_number = numbers_by_id
            .get(reservation.room_id.as_str())
            .map(|number| (*number).to_string())
            .or_else(|| reservation.room_number.clone())
            .unwrap_or_else(|| reservation.room_id.clone());
        links.insert(
            reservation.guest_id.clone(),
            ReservationLink {
                reservation: reservation.clone(),
                room_number,
            },
        );
    }
    links
}

/// Newest submission first; a room goes to the first name that mentions it,
/// and each name claims at most one room.
fn claim_feedback_rooms(feedback: &[FeedbackEntry]) -> BTreeMap<String, String> {
    let mut ordered: Vec<&FeedbackEntry> = feedback.iter().collect();
    ordered.sort_by(|a, b| b.submitted_time.cmp(&a.submitted_time));

    let mut claimed_rooms = BTreeSet::new();
    let mut claims = BTreeMap::new();
    for entry in ordered {
        let Some(room) = &entry.room_number else {
            continue;
        };
        let name = name_key(&entry.guest_name);
        if name.is_empty() || claims.contains_key(&name) || claimed_rooms.contains(room) {
            continue;
        }
        claimed_rooms.insert(room.clone());
        claims.insert(name, room.clone());
    }
    claims
}
