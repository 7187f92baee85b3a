use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RoomStatus;

/// A room as reported by the rooms collection, after normalization.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Room {
    /// Backend identifier. Falls back to the room number when the record has none.
    pub id: String,
    /// Canonical room number, used as the room key across every source.
    pub number: String,
    pub floor: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub status: RoomStatus,
    pub guest_name: Option<String>,
    pub guest_contact: Option<String>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub tablet_status: Option<String>,
}
