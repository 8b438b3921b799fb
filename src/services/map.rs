// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interfaces to the position provider and the map surface.

use crate::models::{Coords, Popup};

/// The user's position could not be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Position unavailable")]
pub struct PositionUnavailable;

/// Supplies one best-effort position for the user.
pub trait PositionProvider {
    fn current_position(&self) -> Result<Coords, PositionUnavailable>;
}

/// A provider that always reports the same position (or none).
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Option<Coords>);

impl PositionProvider for FixedPosition {
    fn current_position(&self) -> Result<Coords, PositionUnavailable> {
        self.0.ok_or(PositionUnavailable)
    }
}

/// A rendered map that can be re-centred and carry workout markers.
///
/// Marker handles are opaque to the caller; they are only stored and later
/// handed back for removal.
pub trait MapSurface {
    type Marker;

    /// Centre the map on `coords` at `zoom`.
    fn set_view(&mut self, coords: Coords, zoom: u8);

    /// Place a marker with an open popup at `coords`.
    fn add_marker(&mut self, coords: Coords, popup: &Popup) -> Self::Marker;

    /// Take a marker off the map.
    fn remove_marker(&mut self, marker: Self::Marker);
}
