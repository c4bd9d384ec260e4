// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use serde::{Deserialize, Serialize};

/// Represents one location fix as it is sent over the wire.
///
/// A `LocationSample` always carries every field, also when the acquisition
/// failed. A failed acquisition is reported with [`LocationSample::invalid`],
/// which substitutes zeros for the coordinates and clears the `valid` flag.
/// The sample is a pure value: it is created fresh on every acquisition,
/// serialized immediately and never cached or shared between connections.
///
/// # Fields
///
/// - `latitude` – The latitude in decimal degrees (positive for north, negative for south).
/// - `longitude` – The longitude in decimal degrees (positive for east, negative for west).
/// - `altitude` – The altitude in meters.
/// - `timestamp` – Milliseconds since the Unix epoch at acquisition time.
/// - `valid` – False only when fallback values were substituted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    latitude: f64,
    longitude: f64,
    altitude: f64,
    timestamp: i64,
    valid: bool,
}

impl LocationSample {
    /// Creates a new [`LocationSample`] with the given values.
    ///
    /// # Arguments
    ///
    /// * `latitude` – Latitude in decimal degrees. Positive for northern hemisphere.
    /// * `longitude` – Longitude in decimal degrees. Positive for eastern hemisphere.
    /// * `altitude` – Altitude in meters.
    /// * `timestamp` – Acquisition time in milliseconds since the Unix epoch.
    /// * `valid` – Whether the coordinates come from a real acquisition.
    ///
    /// # Returns
    ///
    /// A new `LocationSample` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use common::sample::LocationSample;
    ///
    /// let sample = LocationSample::new(63.4305, 10.3951, 5.0, 1700000000000, true);
    /// ```
    pub fn new(
        latitude: f64,
        longitude: f64,
        altitude: f64,
        timestamp: i64,
        valid: bool,
    ) -> LocationSample {
        LocationSample {
            latitude,
            longitude,
            altitude,
            timestamp,
            valid,
        }
    }

    /// Creates the fallback [`LocationSample`] that is sent when an
    /// acquisition failed.
    ///
    /// All coordinates are zero and the `valid` flag is cleared. Only the
    /// timestamp reports a real value.
    ///
    /// # Arguments
    ///
    /// * `timestamp` – Time of the failed acquisition in milliseconds since the Unix epoch.
    pub fn invalid(timestamp: i64) -> LocationSample {
        LocationSample {
            latitude: 0.0,
            longitude: 0.0,
            altitude: 0.0,
            timestamp,
            valid: false,
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Returns the latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the altitude in meters.
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Returns the acquisition time in milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Returns whether the coordinates come from a real acquisition.
    pub fn valid(&self) -> bool {
        self.valid
    }
}
