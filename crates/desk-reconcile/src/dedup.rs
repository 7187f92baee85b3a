//! Hotel deduplication.
//!
//! Hotel records share no reliable primary key, so identity is the composite
//! [`Hotel::key_for`] of name, address and city.

use std::collections::HashSet;

use chrono::{Datelike, Utc};
use desk_core::entities::{DEFAULT_ESTABLISHED_YEAR, Hotel, RawRecord};

use crate::normalize::{Field, extract_i64, extract_string};

/// Deduplicate hotels, validating `established_year` against the current year.
#[must_use]
pub fn dedupe_hotels(raw: &[RawRecord]) -> Vec<Hotel> {
    dedupe_hotels_at(raw, Utc::now().year())
}

/// Deduplicate hotels as of `current_year`.
///
/// Records with a blank name, or missing address, city or country, are
/// dropped. The first record for each identity key wins, in input order.
#[must_use]
pub fn dedupe_hotels_at(raw: &[RawRecord], current_year: i32) -> Vec<Hotel> {
    dedupe_hotels_with_fallback(raw, current_year, DEFAULT_ESTABLISHED_YEAR)
}

/// [`dedupe_hotels_at`] with a configurable substitute for invalid years.
#[must_use]
pub fn dedupe_hotels_with_fallback(
    raw: &[RawRecord],
    current_year: i32,
    fallback_year: i32,
) -> Vec<Hotel> {
    let mut seen = HashSet::new();
    let mut hotels = Vec::new();

    for (position, record) in raw.iter().enumerate() {
        let Some(hotel) = normalize_hotel(record, current_year, fallback_year) else {
            tracing::debug!(position, "dropping hotel record missing name or location");
            continue;
        };
        if seen.insert(hotel.identity_key()) {
            hotels.push(hotel);
        } else {
            tracing::debug!(name = %hotel.name, "dropping duplicate hotel");
        }
    }

    hotels
}

fn normalize_hotel(record: &RawRecord, current_year: i32, fallback_year: i32) -> Option<Hotel> {
    Some(Hotel {
        id: extract_string(record, Field::RecordId),
        name: extract_string(record, Field::HotelName)?,
        address: extract_string(record, Field::Address)?,
        city: extract_string(record, Field::City)?,
        country: extract_string(record, Field::Country)?,
        established_year: established_year(record, current_year, fallback_year),
        phone: extract_string(record, Field::Phone),
        email: extract_string(record, Field::Email),
    })
}

/// The record's year when it lies in `(1900, current_year]`, otherwise
/// `fallback_year`.
fn established_year(record: &RawRecord, current_year: i32, fallback_year: i32) -> i32 {
    extract_i64(record, Field::EstablishedYear)
        .and_then(|year| i32::try_from(year).ok())
        .filter(|year| *year > 1900 && *year <= current_year)
        .unwrap_or(fallback_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        RawRecord::from_value(value).unwrap()
    }

    fn grand(name: &str, year: serde_json::Value) -> RawRecord {
        record(json!({
            "name": name,
            "address": "1 Main",
            "city": "NY",
            "country": "US",
            "established_year": year,
        }))
    }

    #[test]
    fn case_variants_collapse_to_first() {
        let hotels = dedupe_hotels_at(
            &[grand("Grand", json!(1990)), grand("grand", json!(1995))],
            2026,
        );
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0].name, "Grand");
        assert_eq!(hotels[0].established_year, 1990);
    }

    #[test]
    fn blank_names_and_missing_location_are_dropped() {
        let hotels = dedupe_hotels_at(
            &[
                grand("   ", json!(1990)),
                record(json!({"name": "Seaside", "address": "2 Shore", "city": "Nice"})),
                record(json!({"hotel_name": "Alpine", "street": "3 Peak", "town": "Zermatt", "country": "CH"})),
            ],
            2026,
        );
        let names: Vec<_> = hotels.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Alpine"]);
    }

    #[rstest]
    #[case(json!(1998), 1998)]
    #[case(json!("1998"), 1998)]
    #[case(json!(1900), DEFAULT_ESTABLISHED_YEAR)]
    #[case(json!(2027), DEFAULT_ESTABLISHED_YEAR)]
    #[case(json!(2026), 2026)]
    #[case(json!(null), DEFAULT_ESTABLISHED_YEAR)]
    #[case(json!("old"), DEFAULT_ESTABLISHED_YEAR)]
    fn established_year_is_validated(#[case] year: serde_json::Value, #[case] expected: i32) {
        let hotels = dedupe_hotels_at(&[grand("Grand", year)], 2026);
        assert_eq!(hotels[0].established_year, expected);
    }

    #[test]
    fn dedupe_hotels_accepts_this_year() {
        let this_year = Utc::now().year();
        let hotels = dedupe_hotels(&[
            grand("Grand", json!(this_year)),
            grand("Grand", json!(this_year + 1)),
            grand("Harbor", json!(this_year + 1)),
        ]);
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].established_year, this_year);
        assert_eq!(hotels[1].established_year, DEFAULT_ESTABLISHED_YEAR);
    }

    #[test]
    fn fallback_year_is_configurable() {
        let hotels = dedupe_hotels_with_fallback(&[grand("Grand", json!(1850))], 2026, 1999);
        assert_eq!(hotels[0].established_year, 1999);
    }

    #[test]
    fn dedup_is_idempotent() {
        let input = vec![
            grand("Grand", json!(1990)),
            grand("GRAND ", json!(2001)),
            record(json!({"id": 7, "name": "Seaside", "address": "2 Shore", "city": "Nice", "country": "FR", "phone": "+33 1"})),
        ];
        let once = dedupe_hotels_at(&input, 2026);
        let reserialized: Vec<RawRecord> = once
            .iter()
            .map(|hotel| record(serde_json::to_value(hotel).unwrap()))
            .collect();
        let twice = dedupe_hotels_at(&reserialized, 2026);
        assert_eq!(twice, once);
        assert_eq!(once[1].id.as_deref(), Some("7"));
    }
}
