//! Status, kind, and policy enums for Frontdesk.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and parse back from the same string form through `FromStr`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// RoomStatus
// ---------------------------------------------------------------------------

/// Housekeeping status of a room as reported by the rooms collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    Cleaning,
}

impl RoomStatus {
    pub const ALL: [Self; 4] = [
        Self::Available,
        Self::Occupied,
        Self::Maintenance,
        Self::Cleaning,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
            Self::Cleaning => "cleaning",
        }
    }

    /// Human-readable label shown on the room board.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Maintenance => "Maintenance",
            Self::Cleaning => "Cleaning",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "room status",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// ActivityKind
// ---------------------------------------------------------------------------

/// Which activity source an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Service,
    Technical,
    Notification,
}

impl ActivityKind {
    pub const ALL: [Self; 3] = [Self::Service, Self::Technical, Self::Notification];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Technical => "technical",
            Self::Notification => "notification",
        }
    }

    /// Mode label synthesized for records of this kind that carry no explicit
    /// mode or status field.
    #[must_use]
    pub const fn fallback_mode(self) -> Option<&'static str> {
        match self {
            Self::Technical => Some("Technical Issue"),
            Self::Service | Self::Notification => None,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "activity kind",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// An independently fetched backend collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Rooms,
    Guests,
    Reservations,
    RoomService,
    TechnicalIssues,
    Notifications,
    Feedback,
    Hotels,
}

impl Collection {
    pub const ALL: [Self; 8] = [
        Self::Rooms,
        Self::Guests,
        Self::Reservations,
        Self::RoomService,
        Self::TechnicalIssues,
        Self::Notifications,
        Self::Feedback,
        Self::Hotels,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rooms => "rooms",
            Self::Guests => "guests",
            Self::Reservations => "reservations",
            Self::RoomService => "room_service",
            Self::TechnicalIssues => "technical_issues",
            Self::Notifications => "notifications",
            Self::Feedback => "feedback",
            Self::Hotels => "hotels",
        }
    }

    /// Activity kind carried by this collection, if it is an activity source.
    #[must_use]
    pub const fn activity_kind(self) -> Option<ActivityKind> {
        match self {
            Self::RoomService => Some(ActivityKind::Service),
            Self::TechnicalIssues => Some(ActivityKind::Technical),
            Self::Notifications => Some(ActivityKind::Notification),
            Self::Rooms | Self::Guests | Self::Reservations | Self::Feedback | Self::Hotels => {
                None
            }
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "collection",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// TiePolicy
// ---------------------------------------------------------------------------

/// How the event merger resolves two records for the same room that carry
/// the same timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// The record processed later replaces the current best.
    #[default]
    LaterWins,
    /// The first record seen at a timestamp is kept.
    EarlierWins,
}

impl TiePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LaterWins => "later_wins",
            Self::EarlierWins => "earlier_wins",
        }
    }
}

impl fmt::Display for TiePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected:literal) => {
            #[test]
            fn $name() {
                let json = serde_json::to_string(&$variant).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected));
                let back: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(back, $variant);
            }
        };
    }

    test_serde_roundtrip!(room_cleaning, RoomStatus, RoomStatus::Cleaning, "cleaning");
    test_serde_roundtrip!(
        kind_notification,
        ActivityKind,
        ActivityKind::Notification,
        "notification"
    );
    test_serde_roundtrip!(
        collection_room_service,
        Collection,
        Collection::RoomService,
        "room_service"
    );
    test_serde_roundtrip!(
        collection_technical,
        Collection,
        Collection::TechnicalIssues,
        "technical_issues"
    );
    test_serde_roundtrip!(tie_later, TiePolicy, TiePolicy::LaterWins, "later_wins");
    test_serde_roundtrip!(tie_earlier, TiePolicy, TiePolicy::EarlierWins, "earlier_wins");

    #[test]
    fn from_str_matches_as_str() {
        for status in RoomStatus::ALL {
            assert_eq!(status.as_str().parse::<RoomStatus>().unwrap(), status);
        }
        for collection in Collection::ALL {
            assert_eq!(
                collection.as_str().parse::<Collection>().unwrap(),
                collection
            );
        }
        assert_eq!(
            "technical".parse::<ActivityKind>().unwrap(),
            ActivityKind::Technical
        );
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "penthouse".parse::<RoomStatus>().unwrap_err();
        assert!(err.to_string().contains("room status"));
        assert!("bookings".parse::<Collection>().is_err());
    }

    #[test]
    fn only_activity_collections_carry_a_kind() {
        let kinds: Vec<_> = Collection::ALL
            .into_iter()
            .filter_map(Collection::activity_kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                ActivityKind::Service,
                ActivityKind::Technical,
                ActivityKind::Notification
            ]
        );
    }

    #[test]
    fn technical_issues_have_a_fallback_mode() {
        assert_eq!(ActivityKind::Technical.fallback_mode(), Some("Technical Issue"));
        assert_eq!(ActivityKind::Service.fallback_mode(), None);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", RoomStatus::Maintenance), "maintenance");
        assert_eq!(format!("{}", ActivityKind::Service), "service");
        assert_eq!(format!("{}", Collection::Feedback), "feedback");
        assert_eq!(format!("{}", TiePolicy::EarlierWins), "earlier_wins");
    }
}
