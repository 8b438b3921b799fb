// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interactive session: the handlers behind the map, form and list.
//!
//! Handles the workflow:
//! 1. Restore stored workouts at startup
//! 2. Load the map at the user's position and draw stored markers
//! 3. Remember the last map click and turn form submissions into workouts
//! 4. Select a workout from the list (re-centre the map)
//! 5. Delete the selected workout, or reset everything

use crate::db::KeyValueStore;
use crate::error::{AppError, Result};
use crate::models::{Coords, Popup, Workout, WorkoutId, WorkoutKind, WorkoutSummary};
use crate::services::map::{MapSurface, PositionProvider};
use crate::services::store::WorkoutStore;
use crate::services::validation::{parse_number, validate_workout};
use crate::time_utils::{Clock, SystemClock};

/// Raw field values from the workout form.
#[derive(Debug, Clone, Default)]
pub struct WorkoutForm {
    /// "running" or "cycling"
    pub kind: String,
    pub distance: String,
    pub duration: String,
    /// Used for runs
    pub cadence: String,
    /// Used for rides
    pub elevation: String,
}

/// UI state and the workout store it drives.
pub struct Session<K, S: MapSurface, C = SystemClock> {
    store: WorkoutStore<K, S::Marker>,
    map: Option<S>,
    clock: C,
    zoom: u8,
    /// Location of the last map click, consumed by the next submission
    pending_location: Option<Coords>,
    /// Workout currently selected in the list
    selected: Option<WorkoutId>,
}

impl<K: KeyValueStore, S: MapSurface, C: Clock> Session<K, S, C> {
    /// Start a session, restoring any stored workouts. The restored list is
    /// available from [`summaries`](Self::summaries).
    pub fn start(mut store: WorkoutStore<K, S::Marker>, clock: C, zoom: u8) -> Self {
        let restored = store.load_from_persistence();
        tracing::info!(restored, "Session started");

        Self {
            store,
            map: None,
            clock,
            zoom,
            pending_location: None,
            selected: None,
        }
    }

    pub fn store(&self) -> &WorkoutStore<K, S::Marker> {
        &self.store
    }

    pub fn map(&self) -> Option<&S> {
        self.map.as_ref()
    }

    pub fn selected(&self) -> Option<&WorkoutId> {
        self.selected.as_ref()
    }

    pub fn pending_location(&self) -> Option<Coords> {
        self.pending_location
    }

    /// List entries for every workout, in display order.
    pub fn summaries(&self) -> Vec<WorkoutSummary> {
        self.store.records().iter().map(WorkoutSummary::from).collect()
    }

    /// Load the map at the user's position and draw markers for stored
    /// workouts.
    pub fn on_position<P: PositionProvider>(
        &mut self,
        provider: &P,
        mut surface: S,
    ) -> Result<Coords> {
        let coords = provider.current_position().map_err(|_| {
            tracing::warn!("Could not get user position");
            AppError::PositionUnavailable
        })?;

        surface.set_view(coords, self.zoom);
        let drawn = self
            .store
            .attach_markers(|w| surface.add_marker(w.coords(), &Popup::from(w)));
        self.map = Some(surface);

        tracing::info!(lat = coords.lat, lng = coords.lng, markers = drawn, "Map loaded");
        Ok(coords)
    }

    /// Remember where the map was clicked; the form is shown for it.
    pub fn on_map_click(&mut self, coords: Coords) {
        self.pending_location = Some(coords);
    }

    /// Create a workout at the last clicked location from raw form values.
    pub fn submit(&mut self, form: &WorkoutForm) -> Result<WorkoutSummary> {
        let coords = self.pending_location.ok_or(AppError::NoLocationSelected)?;
        let map = self.map.as_mut().ok_or(AppError::NoLocationSelected)?;

        let kind: WorkoutKind = form
            .kind
            .parse()
            .map_err(|e: crate::models::workout::UnknownWorkoutKind| {
                AppError::InvalidInput(e.to_string())
            })?;
        let distance = parse_number(&form.distance);
        let duration = parse_number(&form.duration);
        let extra = parse_number(match kind {
            WorkoutKind::Running => &form.cadence,
            WorkoutKind::Cycling => &form.elevation,
        });
        validate_workout(kind, distance, duration, extra)?;

        let created_at = self.clock.now();
        let id = self.store.allocate_id(&created_at);
        let workout = match kind {
            WorkoutKind::Running => {
                Workout::running(id, created_at, coords, distance, duration, extra)
            }
            WorkoutKind::Cycling => {
                Workout::cycling(id, created_at, coords, distance, duration, extra)
            }
        };

        let summary = WorkoutSummary::from(&workout);
        let marker = map.add_marker(coords, &Popup::from(&workout));
        self.store.add(workout, marker);
        self.pending_location = None;

        Ok(summary)
    }

    /// Select a workout from the list and centre the map on it.
    ///
    /// Does nothing until the map is loaded. An unknown id clears the
    /// selection.
    pub fn select(&mut self, id: &WorkoutId) -> Option<&Workout> {
        let map = self.map.as_mut()?;

        let Some(workout) = self.store.register_interaction(id) else {
            self.selected = None;
            return None;
        };

        map.set_view(workout.coords(), self.zoom);
        self.selected = Some(id.clone());
        Some(workout)
    }

    /// Delete the selected workout and its marker.
    pub fn delete_selected(&mut self) -> Option<Workout> {
        let id = self.selected.take()?;
        let (workout, marker) = self.store.remove_by_id(&id)?;

        if let (Some(marker), Some(map)) = (marker, self.map.as_mut()) {
            map.remove_marker(marker);
        }

        Some(workout)
    }

    /// Erase all workouts, in storage and on the map.
    pub fn reset(&mut self) {
        let markers = self.store.clear();
        if let Some(map) = self.map.as_mut() {
            for marker in markers {
                map.remove_marker(marker);
            }
        }
        self.selected = None;
        self.pending_location = None;
    }
}
