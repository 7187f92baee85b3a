//! Serde roundtrip and JsonSchema validation tests for entities and view shapes.

use chrono::Utc;
use desk_core::entities::*;
use desk_core::enums::*;
use desk_core::views::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_hotel() -> Hotel {
    Hotel {
        id: Some("h-1".into()),
        name: "Grand".into(),
        address: "1 Main".into(),
        city: "NY".into(),
        country: "US".into(),
        established_year: 1998,
        phone: None,
        email: Some("desk@grand.example".into()),
    }
}

roundtrip_and_validate!(
    room_roundtrip,
    Room,
    Room {
        id: "9".into(),
        number: "205".into(),
        floor: Some("2".into()),
        room_type: Some("Deluxe".into()),
        status: RoomStatus::Occupied,
        guest_name: Some("Ada Lovelace".into()),
        guest_contact: None,
        check_in: Some(Utc::now()),
        check_out: None,
        tablet_status: Some("Online".into()),
    }
);

roundtrip_and_validate!(
    reservation_roundtrip,
    Reservation,
    Reservation {
        guest_id: "5".into(),
        room_id: "9".into(),
        room_number: None,
        check_in: Some(Utc::now()),
        check_out: Some(Utc::now()),
        is_checked_in: true,
    }
);

roundtrip_and_validate!(hotel_roundtrip, Hotel, sample_hotel());

roundtrip_and_validate!(
    room_status_row_roundtrip,
    RoomStatusRow,
    RoomStatusRow {
        room: "101".into(),
        floor: "1".into(),
        guest: PLACEHOLDER.into(),
        mode: "Do Not Disturb".into(),
        last_action: Some(Utc::now()),
        tablet_status: "Online".into(),
    }
);

roundtrip_and_validate!(
    guest_roster_row_roundtrip,
    GuestRosterRow,
    GuestRosterRow {
        id: "5".into(),
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        phone: PLACEHOLDER.into(),
        room_number: UNASSIGNED_ROOM.into(),
        check_in: None,
        check_out: None,
        status: "Unknown".into(),
        last_activity: None,
    }
);

roundtrip_and_validate!(
    feed_item_roundtrip,
    ActivityFeedItem,
    ActivityFeedItem {
        id: "notification-0".into(),
        kind: ActivityKind::Notification,
        message: "New guest checked in to Room 101".into(),
        time: Some(Utc::now()),
    }
);

roundtrip_and_validate!(
    dashboard_views_roundtrip,
    DashboardViews,
    DashboardViews {
        generated_at: Utc::now(),
        rooms: Vec::new(),
        guests: Vec::new(),
        reservations: vec![ReservationRow {
            guest_id: "5".into(),
            guest_name: "Ada Lovelace".into(),
            room_id: None,
            room_number: None,
            check_in: None,
            check_out: None,
            is_checked_in: false,
        }],
        feed: Vec::new(),
        hotels: vec![sample_hotel()],
        summary: DashboardSummary::default(),
        notices: vec![ViewNotice {
            view: ViewKind::Rooms,
            message: "No rooms loaded".into(),
        }],
        failed_sources: vec![Collection::Feedback],
    }
);

#[test]
fn view_rows_serialize_in_camel_case() {
    let row = RoomStatusRow {
        room: "101".into(),
        floor: "1".into(),
        guest: PLACEHOLDER.into(),
        mode: "Cleaning".into(),
        last_action: None,
        tablet_status: PLACEHOLDER.into(),
    };
    let value = serde_json::to_value(&row).unwrap();
    assert!(value.get("lastAction").is_some());
    assert!(value.get("tabletStatus").is_some());
    assert!(value.get("last_action").is_none());

    let item = ActivityFeedItem {
        id: "x".into(),
        kind: ActivityKind::Service,
        message: "m".into(),
        time: None,
    };
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["type"], "service");
}

#[test]
fn schema_rejects_invalid_room_status() {
    let schema = serde_json::to_value(schema_for!(Room)).unwrap();
    let invalid = serde_json::json!({
        "id": "1",
        "number": "101",
        "floor": null,
        "type": null,
        "status": "flooded",
        "guest_name": null,
        "guest_contact": null,
        "check_in": null,
        "check_out": null,
        "tablet_status": null
    });
    let errors = validate_against_schema(&schema, &invalid);
    assert!(!errors.is_empty(), "Should reject unknown room status");
}

#[test]
fn schema_rejects_feed_item_without_message() {
    let schema = serde_json::to_value(schema_for!(ActivityFeedItem)).unwrap();
    let invalid = serde_json::json!({
        "id": "x",
        "type": "service",
        "time": null
    });
    let errors = validate_against_schema(&schema, &invalid);
    assert!(!errors.is_empty(), "Should reject feed item without 'message'");
}
