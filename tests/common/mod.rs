// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, FixedOffset};
use workout_map::db::{KeyValueStore, MemoryStore};
use workout_map::error::{AppError, Result};
use workout_map::models::{Coords, Popup, Workout, WorkoutId};
use workout_map::services::MapSurface;
use workout_map::time_utils::Clock;

/// Parse an RFC3339 timestamp.
#[allow(dead_code)]
pub fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).expect("valid timestamp")
}

/// Clock pinned to one instant.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Map surface that records every call. Marker handles are sequence numbers.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub views: Vec<(Coords, u8)>,
    pub markers: Vec<(u32, Coords, Popup)>,
    pub removed: Vec<u32>,
    next_marker: u32,
}

impl RecordingMap {
    /// Markers still on the map, in creation order.
    #[allow(dead_code)]
    pub fn live_markers(&self) -> Vec<u32> {
        self.markers
            .iter()
            .map(|(m, _, _)| *m)
            .filter(|m| !self.removed.contains(m))
            .collect()
    }
}

impl MapSurface for RecordingMap {
    type Marker = u32;

    fn set_view(&mut self, coords: Coords, zoom: u8) {
        self.views.push((coords, zoom));
    }

    fn add_marker(&mut self, coords: Coords, popup: &Popup) -> u32 {
        let marker = self.next_marker;
        self.next_marker += 1;
        self.markers.push((marker, coords, popup.clone()));
        marker
    }

    fn remove_marker(&mut self, marker: u32) {
        self.removed.push(marker);
    }
}

/// Store whose writes always fail, wrapping a readable memory store.
#[allow(dead_code)]
#[derive(Debug, Default, Clone)]
pub struct ReadOnlyStore(pub MemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(AppError::Storage("read-only".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(AppError::Storage("read-only".to_string()))
    }
}

/// A run created at a fixed date.
#[allow(dead_code)]
pub fn run(id: &str, distance: f64, duration: f64, cadence: f64) -> Workout {
    Workout::running(
        WorkoutId::new(id),
        at("2024-08-14T07:30:00+02:00"),
        Coords::new(52.5, 13.4),
        distance,
        duration,
        cadence,
    )
}

/// A ride created at a fixed date.
#[allow(dead_code)]
pub fn ride(id: &str, distance: f64, duration: f64, elevation: f64) -> Workout {
    Workout::cycling(
        WorkoutId::new(id),
        at("2024-08-15T18:00:00+02:00"),
        Coords::new(52.4, 13.1),
        distance,
        duration,
        elevation,
    )
}
