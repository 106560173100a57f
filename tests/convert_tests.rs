//! Tests for recursive key conversion across the supported value types
//!
//! These tests verify that:
//! - Scalars, timestamps and null pass through unchanged
//! - Every keyed mapping is renamed, at any depth, in every container type
//! - Typed records bridge through serde in both directions
//! - Collisions resolve to the last key in iteration order

use case_bridge::{
    convert_to_camel, convert_to_snake, from_camel_json, snake_fields, to_camel_json, CaseError, ConvertKeys, Datum,
};
use chrono::{NaiveDate, TimeZone, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

// =============================================================================
// Generic containers
// =============================================================================

mod container_tests {
    use super::*;

    #[test]
    fn test_hashmap_keys_renamed_values_recursed() {
        let mut inner = HashMap::new();
        inner.insert("seat_no".to_string(), json!({ "row_label": "A" }));
        let mut outer: HashMap<String, HashMap<String, serde_json::Value>> = HashMap::new();
        outer.insert("booking_seats".to_string(), inner);

        let out = convert_to_camel(&outer);
        assert_eq!(out["bookingSeats"]["seatNo"], json!({ "rowLabel": "A" }));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_btreemap_and_vec_of_maps() {
        let rows: Vec<BTreeMap<String, i64>> = vec![
            BTreeMap::from([("totalSeats".to_string(), 10), ("seatsLeft".to_string(), 3)]),
            BTreeMap::new(),
        ];
        let out = convert_to_snake(&rows);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].get("total_seats"), Some(&10));
        assert_eq!(out[0].get("seats_left"), Some(&3));
        assert!(out[1].is_empty());
    }

    #[test]
    fn test_option_and_box() {
        let none: Option<serde_json::Value> = None;
        assert_eq!(convert_to_camel(&none), None);
        let some = Some(Box::new(json!({ "is_active": true })));
        assert_eq!(convert_to_camel(&some), Some(Box::new(json!({ "isActive": true }))));
    }

    #[test]
    fn test_identity_scalars() {
        let id = Uuid::new_v4();
        assert_eq!(convert_to_camel(&id), id);
        let day = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        assert_eq!(convert_to_snake(&day), day);
        assert_eq!(convert_to_camel(&String::from("created_at")), "created_at");
        assert!(convert_to_snake(&true));
        assert_eq!(convert_to_camel(&2.5f64), 2.5);
    }

    #[test]
    fn test_indexmap_preserves_order() {
        let mut row: IndexMap<String, Datum> = IndexMap::new();
        row.insert("zeta_key".into(), Datum::Null);
        row.insert("alpha_key".into(), Datum::Null);
        let keys: Vec<String> = convert_to_camel(&row).into_keys().collect();
        assert_eq!(keys, vec!["zetaKey".to_string(), "alphaKey".to_string()]);
    }
}

// =============================================================================
// JSON and Datum values
// =============================================================================

mod value_tests {
    use super::*;

    #[test]
    fn test_nested_object_and_array_strings_untouched() {
        let v = json!({ "user_info": { "first_name": "Ana", "tags": ["a_b", { "sub_key": 1 }] } });
        assert_eq!(
            v.to_camel(),
            json!({ "userInfo": { "firstName": "Ana", "tags": ["a_b", { "subKey": 1 }] } })
        );
    }

    #[test]
    fn test_snake_of_nested_booking() {
        let v = json!({ "bookingId": 7, "traveler": { "lastName": "Silva", "passportNo": null } });
        assert_eq!(
            v.to_snake(),
            json!({ "booking_id": 7, "traveler": { "last_name": "Silva", "passport_no": null } })
        );
    }

    #[test]
    fn test_datum_timestamp_survives_both_directions() {
        let at = Utc.with_ymd_and_hms(2025, 12, 24, 18, 0, 0).unwrap();
        let row = Datum::object([("departs_at", Datum::DateTime(at))]);
        let camel = convert_to_camel(&row);
        assert_eq!(camel.get("departsAt"), Some(&Datum::DateTime(at)));
        let back = convert_to_snake(&camel);
        assert_eq!(back, row);
    }

    #[test]
    fn test_collision_last_in_iteration_order_wins() {
        let v = json!({ "totalSeats": 1, "total_seats": 2 });
        let out = convert_to_camel(&v);
        assert_eq!(out, json!({ "totalSeats": 2 }));
    }

    #[test]
    fn test_inputs_unchanged() {
        let row = Datum::from(json!({ "seat_map": [{ "row_no": 1 }] }));
        let snapshot = row.clone();
        let _ = convert_to_camel(&row);
        let _ = convert_to_snake(&row);
        assert_eq!(row, snapshot);
    }

    #[test]
    fn test_round_trip_is_not_guaranteed() {
        let v = json!({ "a_B": 1 });
        assert_eq!(convert_to_snake(&convert_to_camel(&v)), json!({ "a__b": 1 }));
    }
}

// =============================================================================
// Typed records through serde
// =============================================================================

mod typed_tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct BookingRow {
        booking_id: u64,
        total_price_cents: i64,
        is_paid: bool,
        traveler_names: Vec<String>,
    }

    #[test]
    fn test_to_camel_json() {
        let row = BookingRow {
            booking_id: 1,
            total_price_cents: 9900,
            is_paid: false,
            traveler_names: vec!["Ana".into()],
        };
        assert_eq!(
            to_camel_json(&row).unwrap(),
            json!({ "bookingId": 1, "totalPriceCents": 9900, "isPaid": false, "travelerNames": ["Ana"] })
        );
    }

    #[test]
    fn test_from_camel_json() {
        let body = json!({ "bookingId": 2, "totalPriceCents": 100, "isPaid": true, "travelerNames": [] });
        let row: BookingRow = from_camel_json(body).unwrap();
        assert_eq!(row.booking_id, 2);
        assert!(row.is_paid);
    }

    #[test]
    fn test_from_camel_json_shape_error() {
        let err = from_camel_json::<BookingRow>(json!({ "bookingId": "two" })).unwrap_err();
        assert!(matches!(err, CaseError::Deserialize(_)));
    }

    #[test]
    fn test_snake_fields_requires_record() {
        let fields = snake_fields(&json!({ "isPaid": true })).unwrap();
        assert_eq!(fields.get("is_paid"), Some(&Datum::Bool(true)));
        let err = snake_fields(&vec![1, 2]).unwrap_err();
        assert!(matches!(err, CaseError::NotAnObject { found: "array" }));
    }
}
