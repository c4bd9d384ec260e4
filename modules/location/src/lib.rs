// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Location Modul for fixcast
//!
//! Provides the interface and the implementations to acquire location fixes.

use common::sample::LocationSample;

/// Common interface that every location source must support
///
/// The connection server only depends on this trait, so the active source can
/// be swapped without touching the server, also with a test double.
#[async_trait::async_trait]
pub trait LocationSource: Send + Sync {
    /// Acquires a single location fix.
    ///
    /// Never fails. Every acquisition error is absorbed by the source and
    /// reported as a sample with cleared `valid` flag and zero coordinates.
    /// The calls have no required ordering and share no state beyond the
    /// fixed configuration of the source.
    async fn acquire(&self) -> LocationSample;
}

pub mod command_source;
pub mod synthetic_source;
