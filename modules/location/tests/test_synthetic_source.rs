// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use location::LocationSource;
use location::synthetic_source::SyntheticSource;

const BASE_LATITUDE: f64 = 63.4305;
const BASE_LONGITUDE: f64 = 10.3951;
const BASE_ALTITUDE: f64 = 5.0;

#[tokio::test]
#[test_log::test]
async fn samples_stay_within_the_jitter_bounds() {
    let source = SyntheticSource::new(BASE_LATITUDE, BASE_LONGITUDE, BASE_ALTITUDE);
    for _ in 0..100 {
        let sample = source.acquire().await;
        assert!((sample.latitude() - BASE_LATITUDE).abs() <= SyntheticSource::COORDINATE_JITTER_DEG);
        assert!(
            (sample.longitude() - BASE_LONGITUDE).abs() <= SyntheticSource::COORDINATE_JITTER_DEG
        );
        assert!(sample.altitude() >= BASE_ALTITUDE);
        assert!(sample.altitude() <= BASE_ALTITUDE + SyntheticSource::ALTITUDE_SPREAD_M);
        assert!(sample.valid());
    }
}

#[tokio::test]
#[test_log::test]
async fn timestamps_are_non_decreasing_across_acquisitions() {
    let source = SyntheticSource::default();
    let mut last_timestamp = i64::MIN;
    for _ in 0..10 {
        let sample = source.acquire().await;
        assert!(sample.timestamp() >= last_timestamp);
        last_timestamp = sample.timestamp();
    }
}

#[tokio::test]
#[test_log::test]
async fn default_source_uses_the_default_base_coordinate() {
    let sample = SyntheticSource::default().acquire().await;
    assert!((sample.latitude() - BASE_LATITUDE).abs() <= SyntheticSource::COORDINATE_JITTER_DEG);
    assert!((sample.longitude() - BASE_LONGITUDE).abs() <= SyntheticSource::COORDINATE_JITTER_DEG);
}
