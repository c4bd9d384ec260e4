// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::LocationSource;
use chrono::Utc;
use common::sample::LocationSample;
use rand::Rng;

/// A location source that fabricates fixes around a fixed base coordinate
///
/// Every acquisition perturbs the base coordinate with bounded uniform
/// jitter, so connected clients see a plausible wandering receiver without
/// any hardware attached. The reported samples are always valid.
pub struct SyntheticSource {
    base_latitude: f64,
    base_longitude: f64,
    base_altitude: f64,
}

impl SyntheticSource {
    /// Creates a new SyntheticSource
    ///
    /// # Arguments
    ///
    /// * `base_latitude` - The base latitude in decimal degrees
    /// * `base_longitude` - The base longitude in decimal degrees
    /// * `base_altitude` - The base altitude in meters
    ///
    /// # Returns
    ///
    /// * `SyntheticSource` - The created SyntheticSource
    pub fn new(base_latitude: f64, base_longitude: f64, base_altitude: f64) -> SyntheticSource {
        SyntheticSource {
            base_latitude,
            base_longitude,
            base_altitude,
        }
    }

    /// Jitter that is added to the base latitude and longitude, in degrees.
    pub const COORDINATE_JITTER_DEG: f64 = 0.001;
    /// Spread that is added on top of the base altitude, in meters.
    pub const ALTITUDE_SPREAD_M: f64 = 10.0;

    const BASE_LATITUDE: f64 = 63.4305;
    const BASE_LONGITUDE: f64 = 10.3951;
    const BASE_ALTITUDE: f64 = 5.0;
}

/// Provides a [`SyntheticSource`] at the default base coordinate.
impl Default for SyntheticSource {
    fn default() -> Self {
        SyntheticSource::new(
            SyntheticSource::BASE_LATITUDE,
            SyntheticSource::BASE_LONGITUDE,
            SyntheticSource::BASE_ALTITUDE,
        )
    }
}

#[async_trait::async_trait]
impl LocationSource for SyntheticSource {
    async fn acquire(&self) -> LocationSample {
        let mut rng = rand::rng();
        let latitude = self.base_latitude
            + rng.random_range(
                -SyntheticSource::COORDINATE_JITTER_DEG..=SyntheticSource::COORDINATE_JITTER_DEG,
            );
        let longitude = self.base_longitude
            + rng.random_range(
                -SyntheticSource::COORDINATE_JITTER_DEG..=SyntheticSource::COORDINATE_JITTER_DEG,
            );
        let altitude =
            self.base_altitude + rng.random_range(0.0..=SyntheticSource::ALTITUDE_SPREAD_M);
        LocationSample::new(
            latitude,
            longitude,
            altitude,
            Utc::now().timestamp_millis(),
            true,
        )
    }
}
