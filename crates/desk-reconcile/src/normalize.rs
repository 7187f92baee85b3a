//! Field normalization over raw source records.
//!
//! Every logical field has one declarative alias table ([`Field::aliases`]).
//! A single generic probe walks that table in order and returns the first
//! value that is present and non-empty. Absence is always `None`, never a
//! zero or an epoch.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use desk_core::entities::{ActivityEvent, FeedbackEntry, Guest, RawRecord, Reservation, Room};
use desk_core::enums::{ActivityKind, RoomStatus};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Field alias tables
// ---------------------------------------------------------------------------

/// A logical field and the key names it has historically been stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RecordId,
    RoomId,
    RoomNumber,
    Floor,
    RoomType,
    RoomStatus,
    TabletStatus,
    RoomGuestName,
    RoomGuestContact,
    FirstName,
    LastName,
    DisplayName,
    Email,
    Phone,
    GuestRoom,
    GuestStatus,
    CheckIn,
    CheckOut,
    ReservationGuest,
    ReservationRoom,
    ReservationRoomNumber,
    CheckedIn,
    ActivityRoom,
    Timestamp,
    Mode,
    Message,
    IsRead,
    FeedbackGuest,
    FeedbackRoom,
    SubmittedTime,
    Rating,
    HotelName,
    Address,
    City,
    Country,
    EstablishedYear,
}

impl Field {
    /// Key names probed for this field, highest priority first.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::RecordId => &["id", "_id", "uuid"],
            Self::RoomId => &["id", "_id", "room_id", "roomId"],
            Self::RoomNumber => &["room_number", "roomNumber", "number", "room"],
            Self::Floor => &["floor", "floor_number", "floorNumber", "level"],
            Self::RoomType => &["type", "room_type", "roomType", "category"],
            Self::RoomStatus => &[
                "status",
                "room_status",
                "mode",
                "current_status",
                "live_status",
            ],
            Self::TabletStatus => &["tablet_status", "tabletStatus", "device_status", "tablet"],
            Self::RoomGuestName => &["guest_name", "guestName", "guest", "occupant"],
            Self::RoomGuestContact => &[
                "guest_contact",
                "guestContact",
                "guest_phone",
                "guest_email",
            ],
            Self::FirstName => &["first_name", "firstName", "firstname"],
            Self::LastName => &["last_name", "lastName", "lastname"],
            Self::DisplayName => &["name", "full_name", "fullName", "guest_name", "guestName"],
            Self::Email => &["email", "email_address", "emailAddress", "guest_email"],
            Self::Phone => &[
                "phone",
                "phone_number",
                "phoneNumber",
                "mobile",
                "contact",
                "contact_number",
            ],
            Self::GuestRoom => &["room_number", "roomNumber", "room"],
            Self::GuestStatus => &["status", "guest_status", "guestStatus"],
            Self::CheckIn => &[
                "check_in_time",
                "check_in",
                "checkIn",
                "checkin",
                "check_in_date",
            ],
            Self::CheckOut => &[
                "check_out_time",
                "check_out",
                "checkOut",
                "checkout",
                "check_out_date",
            ],
            Self::ReservationGuest => &["guest_id", "guestId", "guest_ids", "guestIds"],
            Self::ReservationRoom => &["room_id", "roomId", "room_ids", "roomIds"],
            Self::ReservationRoomNumber => &["room_number", "roomNumber"],
            Self::CheckedIn => &["is_checked_in", "isCheckedIn", "checked_in"],
            Self::ActivityRoom => &["room_number", "roomNumber", "room", "room_id", "number"],
            Self::Timestamp => &[
                "created_at",
                "createdAt",
                "updated_at",
                "updatedAt",
                "timestamp",
                "time",
                "submitted_time",
                "requested_at",
                "request_time",
                "reported_at",
                "action_time",
                "date",
            ],
            Self::Mode => &["action", "type", "status", "mode", "request_type"],
            Self::Message => &["message", "msg", "description", "details", "title", "text"],
            Self::IsRead => &["is_read", "isRead", "read", "seen"],
            Self::FeedbackGuest => &["guest_name", "guestName", "name"],
            Self::FeedbackRoom => &["room_number", "roomNumber", "room"],
            Self::SubmittedTime => &[
                "submitted_time",
                "submittedTime",
                "submitted_at",
                "created_at",
                "createdAt",
                "timestamp",
            ],
            Self::Rating => &["rating", "score", "stars"],
            Self::HotelName => &["name", "hotel_name", "hotelName"],
            Self::Address => &["address", "street", "address_line1", "addressLine1"],
            Self::City => &["city", "town"],
            Self::Country => &["country", "country_name", "countryName"],
            Self::EstablishedYear => &[
                "established_year",
                "establishedYear",
                "year_established",
                "founded",
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Generic probes
// ---------------------------------------------------------------------------

/// First present, non-empty value for `field`.
#[must_use]
pub fn extract(record: &RawRecord, field: Field) -> Option<&Value> {
    extract_with(record, field, Some)
}

/// First alias whose value `convert` accepts.
///
/// Empty values (`null`, blank strings, empty arrays/objects) are skipped
/// before `convert` is called.
pub fn extract_with<'a, T>(
    record: &'a RawRecord,
    field: Field,
    convert: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    field
        .aliases()
        .iter()
        .filter_map(|alias| record.get(alias))
        .filter(|value| !is_empty_value(value))
        .find_map(convert)
}

#[must_use]
pub fn extract_string(record: &RawRecord, field: Field) -> Option<String> {
    extract_with(record, field, scalar_to_string)
}

/// First alias that parses as a timestamp. Unparsable values count as absent.
#[must_use]
pub fn extract_timestamp(record: &RawRecord, field: Field) -> Option<DateTime<Utc>> {
    extract_with(record, field, parse_timestamp)
}

#[must_use]
pub fn extract_bool(record: &RawRecord, field: Field) -> Option<bool> {
    extract_with(record, field, |value| match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

#[must_use]
pub fn extract_i64(record: &RawRecord, field: Field) -> Option<i64> {
    extract_with(record, field, |value| match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[must_use]
pub fn extract_f64(record: &RawRecord, field: Field) -> Option<f64> {
    extract_with(record, field, |value| match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Every scalar under `field`, in order. A single scalar yields one entry;
/// an array yields one entry per element, with `None` where an element is
/// not a usable scalar so that positions stay aligned.
#[must_use]
pub fn extract_list(record: &RawRecord, field: Field) -> Vec<Option<String>> {
    extract_with(record, field, |value| match value {
        Value::Array(items) => Some(items.iter().map(scalar_to_string).collect()),
        other => scalar_to_string(other).map(|s| vec![Some(s)]),
    })
    .unwrap_or_default()
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Strings (trimmed) and numbers as text. Whole floats drop the `.0`.
#[must_use]
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| {
                    if f.fract() == 0.0 && f.abs() < 1e15 {
                        format!("{f:.0}")
                    } else {
                        f.to_string()
                    }
                })
            }
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// Epoch values above this magnitude are read as milliseconds.
const MILLIS_THRESHOLD: i64 = 100_000_000_000;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a timestamp from any of the shapes sources have used.
///
/// Naive date-times are read as UTC. Numbers are epoch seconds, or epoch
/// milliseconds past [`MILLIS_THRESHOLD`].
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            if let Some(epoch) = n.as_i64() {
                from_epoch(epoch)
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .and_then(|f| from_epoch(f as i64))
            }
        }
        Value::String(s) => parse_timestamp_str(s),
        _ => None,
    }
}

fn parse_timestamp_str(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    s.parse::<i64>().ok().and_then(from_epoch)
}

fn from_epoch(epoch: i64) -> Option<DateTime<Utc>> {
    if epoch.abs() > MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(epoch)
    } else {
        DateTime::from_timestamp(epoch, 0)
    }
}

// ---------------------------------------------------------------------------
// Canonical records
// ---------------------------------------------------------------------------

/// Loose room-status parsing. Unknown values are `None`.
#[must_use]
pub fn parse_room_status(raw: &str) -> Option<RoomStatus> {
    let key = fold_key(raw);
    let status = match key.as_str() {
        "available" | "vacant" | "free" | "ready" | "inspected" => RoomStatus::Available,
        "occupied" | "booked" | "checked in" | "in use" | "in house" => RoomStatus::Occupied,
        "maintenance" | "out of order" | "ooo" | "repair" | "under maintenance" => {
            RoomStatus::Maintenance
        }
        "cleaning" | "clean" | "dirty" | "housekeeping" | "being cleaned" => RoomStatus::Cleaning,
        _ => return None,
    };
    Some(status)
}

/// Lower-case, fold `_`/`-` to spaces, collapse whitespace.
#[must_use]
pub fn fold_key(raw: &str) -> String {
    raw.to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonical room, or `None` when the record has no room number.
#[must_use]
pub fn normalize_room(record: &RawRecord) -> Option<Room> {
    let Some(number) = extract_string(record, Field::RoomNumber) else {
        tracing::debug!("skipping room record without a room number");
        return None;
    };
    let id = extract_string(record, Field::RoomId).unwrap_or_else(|| number.clone());
    let status = extract_with(record, Field::RoomStatus, |value| {
        scalar_to_string(value).and_then(|s| parse_room_status(&s))
    })
    .unwrap_or(RoomStatus::Available);

    Some(Room {
        id,
        number,
        floor: extract_string(record, Field::Floor),
        room_type: extract_string(record, Field::RoomType),
        status,
        guest_name: extract_string(record, Field::RoomGuestName),
        guest_contact: extract_string(record, Field::RoomGuestContact),
        check_in: extract_timestamp(record, Field::CheckIn),
        check_out: extract_timestamp(record, Field::CheckOut),
        tablet_status: extract_string(record, Field::TabletStatus),
    })
}

/// Display name: `first_name + last_name` when either is present, otherwise
/// any single-name alias.
#[must_use]
pub fn display_name(record: &RawRecord) -> Option<String> {
    let first = extract_string(record, Field::FirstName);
    let last = extract_string(record, Field::LastName);
    match (first, last) {
        (Some(first), Some(last)) => Some(format!("{first} {last}")),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => extract_string(record, Field::DisplayName),
    }
}

/// Canonical guest, or `None` when the record has no id.
#[must_use]
pub fn normalize_guest(record: &RawRecord) -> Option<Guest> {
    let Some(id) = extract_string(record, Field::RecordId) else {
        tracing::debug!("skipping guest record without an id");
        return None;
    };

    Some(Guest {
        full_name: display_name(record).unwrap_or_else(|| desk_core::views::PLACEHOLDER.into()),
        id,
        email: extract_string(record, Field::Email),
        phone: extract_string(record, Field::Phone),
        room_number: extract_string(record, Field::GuestRoom),
        check_in: extract_timestamp(record, Field::CheckIn),
        check_out: extract_timestamp(record, Field::CheckOut),
        status: extract_string(record, Field::GuestStatus),
    })
}

/// Canonical reservations for one raw record.
///
/// Parallel `guest_id` / `room_id` arrays are zipped index by index. A scalar
/// on one side pairs with every entry on the other. Arrays of different
/// lengths pair up to the shorter one. Positions with an unusable id on
/// either side are dropped.
#[must_use]
pub fn normalize_reservations(record: &RawRecord) -> Vec<Reservation> {
    let guest_ids = extract_list(record, Field::ReservationGuest);
    let room_ids = extract_list(record, Field::ReservationRoom);
    if guest_ids.is_empty() || room_ids.is_empty() {
        tracing::debug!("skipping reservation record without guest and room ids");
        return Vec::new();
    }

    let room_number = extract_string(record, Field::ReservationRoomNumber)
        .filter(|_| room_ids.len() == 1 && guest_ids.len() <= 1);
    let check_in = extract_timestamp(record, Field::CheckIn);
    let check_out = extract_timestamp(record, Field::CheckOut);
    let is_checked_in = extract_bool(record, Field::CheckedIn).unwrap_or(false);

    zip_aligned(&guest_ids, &room_ids)
        .into_iter()
        .filter_map(|(guest, room)| Some((guest?, room?)))
        .map(|(guest_id, room_id)| Reservation {
            guest_id,
            room_id,
            room_number: room_number.clone(),
            check_in,
            check_out,
            is_checked_in,
        })
        .collect()
}

/// Index-aligned pairing with scalar broadcast.
#[must_use]
pub fn zip_aligned<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(A, B)> {
    match (left.len(), right.len()) {
        (0, _) | (_, 0) => Vec::new(),
        (1, _) => right.iter().map(|b| (left[0].clone(), b.clone())).collect(),
        (_, 1) => left.iter().map(|a| (a.clone(), right[0].clone())).collect(),
        (l, r) => {
            if l != r {
                tracing::debug!(left = l, right = r, "zipping id arrays of unequal length");
            }
            left.iter().cloned().zip(right.iter().cloned()).collect()
        }
    }
}

/// Canonical activity event, or `None` when the record has neither a mode
/// nor a timestamp.
///
/// `position` is the record's index within its source list and names the
/// event when the record carries no id.
#[must_use]
pub fn normalize_activity(
    record: &RawRecord,
    kind: ActivityKind,
    position: usize,
) -> Option<ActivityEvent> {
    let timestamp = extract_timestamp(record, Field::Timestamp);
    let explicit_mode = extract_string(record, Field::Mode);
    if timestamp.is_none() && explicit_mode.is_none() {
        tracing::debug!(%kind, position, "skipping activity record without mode or timestamp");
        return None;
    }

    let id = extract_string(record, Field::RecordId)
        .map_or_else(|| format!("{kind}-{position}"), |id| format!("{kind}-{id}"));
    let raw_mode = explicit_mode.or_else(|| kind.fallback_mode().map(str::to_string));

    Some(ActivityEvent {
        id,
        room_key: extract_string(record, Field::ActivityRoom),
        kind,
        timestamp,
        raw_mode,
        message: extract_string(record, Field::Message),
        is_read: extract_bool(record, Field::IsRead),
    })
}

/// Canonical feedback entry, or `None` when no guest name is present.
#[must_use]
pub fn normalize_feedback(record: &RawRecord) -> Option<FeedbackEntry> {
    let guest_name = extract_string(record, Field::FeedbackGuest)?;
    Some(FeedbackEntry {
        guest_name,
        room_number: extract_string(record, Field::FeedbackRoom),
        submitted_time: extract_timestamp(record, Field::SubmittedTime),
        rating: extract_f64(record, Field::Rating),
    })
}
