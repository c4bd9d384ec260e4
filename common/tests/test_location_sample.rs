// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use common::sample::LocationSample;

fn get_sample_as_json<'a>() -> &'a str {
    r#"
    {
        "latitude": 63.4305,
        "longitude": 10.3951,
        "altitude": 5.0,
        "timestamp": 1700000000000,
        "valid": true
    }
    "#
}

fn get_sample() -> LocationSample {
    LocationSample::new(63.4305, 10.3951, 5.0, 1700000000000, true)
}

#[test]
pub fn deserialize_location_sample_from_json() {
    let sample = LocationSample::from_json(get_sample_as_json())
        .unwrap_or_else(|e| panic!("Failed to deserialize the raw json. Reason: {e}"));
    assert_eq!(sample, get_sample());
}

#[test]
pub fn serialized_sample_contains_exactly_the_wire_fields() {
    let json = get_sample()
        .to_json()
        .unwrap_or_else(|e| panic!("Failed to serialize the sample. Reason: {e}"));
    let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 5);
    assert!(object.get("latitude").unwrap().is_f64());
    assert!(object.get("longitude").unwrap().is_f64());
    assert!(object.get("altitude").unwrap().is_f64());
    assert!(object.get("timestamp").unwrap().is_i64());
    assert!(object.get("valid").unwrap().is_boolean());
}

#[test]
pub fn round_trip_reproduces_identical_field_values() {
    let sample = get_sample();
    let json = sample.to_json().unwrap();
    let parsed = LocationSample::from_json(&json)
        .unwrap_or_else(|e| panic!("Failed to deserialize the raw json. Reason: {e}"));
    assert_eq!(parsed, sample);
}

#[test]
pub fn invalid_sample_substitutes_zeros() {
    let sample = LocationSample::invalid(1700000000000);
    assert_eq!(sample.latitude(), 0.0);
    assert_eq!(sample.longitude(), 0.0);
    assert_eq!(sample.altitude(), 0.0);
    assert_eq!(sample.timestamp(), 1700000000000);
    assert!(!sample.valid());
}
