//! Per-collection endpoint paths.

use desk_core::enums::Collection;
use serde::{Deserialize, Serialize};

fn path(value: &str) -> String {
    value.to_string()
}

fn default_rooms() -> String {
    path("/rooms")
}
fn default_guests() -> String {
    path("/guests")
}
fn default_reservations() -> String {
    path("/reservations")
}
fn default_room_service() -> String {
    path("/room-service")
}
fn default_technical_issues() -> String {
    path("/technical-issues")
}
fn default_notifications() -> String {
    path("/notifications")
}
fn default_feedback() -> String {
    path("/feedback")
}
fn default_hotels() -> String {
    path("/hotels")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_rooms")]
    pub rooms: String,
    #[serde(default = "default_guests")]
    pub guests: String,
    #[serde(default = "default_reservations")]
    pub reservations: String,
    #[serde(default = "default_room_service")]
    pub room_service: String,
    #[serde(default = "default_technical_issues")]
    pub technical_issues: String,
    #[serde(default = "default_notifications")]
    pub notifications: String,
    #[serde(default = "default_feedback")]
    pub feedback: String,
    #[serde(default = "default_hotels")]
    pub hotels: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            rooms: default_rooms(),
            guests: default_guests(),
            reservations: default_reservations(),
            room_service: default_room_service(),
            technical_issues: default_technical_issues(),
            notifications: default_notifications(),
            feedback: default_feedback(),
            hotels: default_hotels(),
        }
    }
}

impl EndpointsConfig {
    /// Path for one collection, always with a leading slash.
    #[must_use]
    pub fn path_for(&self, collection: Collection) -> String {
        let raw = match collection {
            Collection::Rooms => &self.rooms,
            Collection::Guests => &self.guests,
            Collection::Reservations => &self.reservations,
            Collection::RoomService => &self.room_service,
            Collection::TechnicalIssues => &self.technical_issues,
            Collection::Notifications => &self.notifications,
            Collection::Feedback => &self.feedback,
            Collection::Hotels => &self.hotels,
        };
        let trimmed = raw.trim();
        if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_collection_has_a_default_path() {
        let config = EndpointsConfig::default();
        for collection in Collection::ALL {
            assert!(config.path_for(collection).len() > 1, "{collection}");
        }
        assert_eq!(config.path_for(Collection::RoomService), "/room-service");
    }

    #[test]
    fn leading_slash_is_added() {
        let config = EndpointsConfig {
            feedback: "guest-feedback".into(),
            ..Default::default()
        };
        assert_eq!(config.path_for(Collection::Feedback), "/guest-feedback");
    }
}
