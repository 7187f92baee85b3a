use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ActivityKind;

/// A room-service request, technical issue, or notification, unified.
///
/// Exists only for the duration of one merge.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActivityEvent {
    /// Source id prefixed with the kind, or `{kind}-{position}` when the
    /// record carries no id.
    pub id: String,
    pub room_key: Option<String>,
    pub kind: ActivityKind,
    pub timestamp: Option<DateTime<Utc>>,
    /// Mode/status/action string as the source spelled it.
    pub raw_mode: Option<String>,
    /// Explicit message text, when the source provided one.
    pub message: Option<String>,
    pub is_read: Option<bool>,
}

/// The single merged "current" state of one room.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoomState {
    pub room_key: String,
    /// Canonicalized mode of the winning event.
    pub mode: String,
    pub last_action_time: Option<DateTime<Utc>>,
}
