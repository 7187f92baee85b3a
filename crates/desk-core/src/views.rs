//! Presentation-ready view shapes.
//!
//! These are the only structures the dashboard binds to. They are serialized
//! in camelCase, and partial joins show up as `"-"` / `"N/A"` placeholders or
//! `null` rather than as errors.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Hotel;
use crate::enums::{ActivityKind, Collection};

/// Placeholder for a missing scalar on a view row.
pub const PLACEHOLDER: &str = "-";

/// Room number shown for a guest with no room evidence at all.
pub const UNASSIGNED_ROOM: &str = "N/A";

/// One row of the room status board.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomStatusRow {
    pub room: String,
    pub floor: String,
    pub guest: String,
    pub mode: String,
    pub last_action: Option<DateTime<Utc>>,
    pub tablet_status: String,
}

/// One row of the guest roster.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuestRosterRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub room_number: String,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: String,
    pub last_activity: Option<DateTime<Utc>>,
}

/// Guest x reservation x room triple for the reservation calendar.
///
/// Room and dates are `None` when no reservation evidence exists for the guest.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRow {
    pub guest_id: String,
    pub guest_name: String,
    pub room_id: Option<String>,
    pub room_number: Option<String>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub is_checked_in: bool,
}

/// One entry of the unified activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFeedItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub message: String,
    pub time: Option<DateTime<Utc>>,
}

/// Headline counts for the dashboard landing page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub occupied_rooms: usize,
    pub maintenance_rooms: usize,
    pub cleaning_rooms: usize,
    pub total_guests: usize,
    pub checked_in_guests: usize,
    pub unread_notifications: usize,
    pub feed_items: usize,
}

/// Which view a [`ViewNotice`] is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Rooms,
    Guests,
    Reservations,
    Feed,
    Hotels,
}

/// Banner raised when a whole view came out empty.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewNotice {
    pub view: ViewKind,
    pub message: String,
}

/// Everything one reconciliation cycle produces.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViews {
    pub generated_at: DateTime<Utc>,
    pub rooms: Vec<RoomStatusRow>,
    pub guests: Vec<GuestRosterRow>,
    pub reservations: Vec<ReservationRow>,
    pub feed: Vec<ActivityFeedItem>,
    pub hotels: Vec<Hotel>,
    pub summary: DashboardSummary,
    pub notices: Vec<ViewNotice>,
    /// Collections whose fetch failed this cycle and were treated as empty.
    pub failed_sources: Vec<Collection>,
}
