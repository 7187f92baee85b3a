use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A guest feedback submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FeedbackEntry {
    pub guest_name: String,
    pub room_number: Option<String>,
    pub submitted_time: Option<DateTime<Utc>>,
    pub rating: Option<f64>,
}
