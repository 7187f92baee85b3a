use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One guest-to-room booking.
///
/// A single raw reservation that carries parallel `guest_id` / `room_id`
/// arrays normalizes into several of these.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Reservation {
    pub guest_id: String,
    pub room_id: String,
    /// Room number carried on the reservation itself, if any.
    pub room_number: Option<String>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub is_checked_in: bool,
}
