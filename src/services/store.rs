// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout store: the ordered workout list, its parallel marker list, and
//! the persisted blob.
//!
//! `markers[i]` always belongs to `records[i]`. Both lists grow only by
//! append and shrink only by removing the same index from each. Workouts
//! restored from storage get an empty marker slot until the map renders
//! them.
//!
//! Persistence is fire-and-forget: every add/remove rewrites the blob, and a
//! failed write is logged without undoing the in-memory change.

use chrono::{DateTime, FixedOffset};

use crate::db::{keys, KeyValueStore};
use crate::models::{Workout, WorkoutId};
use crate::services::codec;

pub struct WorkoutStore<K, M> {
    kv: K,
    key: String,
    records: Vec<Workout>,
    markers: Vec<Option<M>>,
    last_issued_id: i64,
}

impl<K: KeyValueStore, M> WorkoutStore<K, M> {
    /// Create an empty store persisting under the default key.
    pub fn new(kv: K) -> Self {
        Self::with_key(kv, keys::WORKOUTS)
    }

    pub fn with_key(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
            records: Vec::new(),
            markers: Vec::new(),
            last_issued_id: 0,
        }
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    pub fn records(&self) -> &[Workout] {
        &self.records
    }

    pub fn markers(&self) -> &[Option<M>] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(workout, marker)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&Workout, Option<&M>)> {
        self.records
            .iter()
            .zip(self.markers.iter().map(Option::as_ref))
    }

    pub fn position(&self, id: &WorkoutId) -> Option<usize> {
        self.records.iter().position(|w| w.id() == id)
    }

    pub fn get(&self, id: &WorkoutId) -> Option<&Workout> {
        self.records.iter().find(|w| w.id() == id)
    }

    /// Allocate a fresh id for a workout created at `created_at`.
    ///
    /// Ids are millisecond timestamps, bumped past the last id handed out so
    /// they strictly increase and are never reused.
    pub fn allocate_id(&mut self, created_at: &DateTime<FixedOffset>) -> WorkoutId {
        let next = created_at
            .timestamp_millis()
            .max(self.last_issued_id.saturating_add(1));
        self.last_issued_id = next;
        WorkoutId::new(next.to_string())
    }

    /// Append a workout and its marker, then persist the full list.
    ///
    /// Ids are not checked for uniqueness; callers take them from
    /// [`allocate_id`](Self::allocate_id). A duplicate is still appended, and
    /// `remove_by_id` then removes the earliest match first.
    pub fn add(&mut self, workout: Workout, marker: M) {
        if let Some(n) = workout.id().as_number() {
            self.last_issued_id = self.last_issued_id.max(n);
        }

        if self.position(workout.id()).is_some() {
            tracing::warn!(id = %workout.id(), "Adding workout with duplicate id");
        }

        tracing::info!(
            id = %workout.id(),
            kind = %workout.kind(),
            "Adding workout"
        );

        self.records.push(workout);
        self.markers.push(Some(marker));
        self.persist();
    }

    /// Remove the first workout with `id` together with its marker.
    ///
    /// Returns `None` and touches nothing (not even storage) if no workout
    /// has that id.
    pub fn remove_by_id(&mut self, id: &WorkoutId) -> Option<(Workout, Option<M>)> {
        let Some(index) = self.position(id) else {
            tracing::debug!(id = %id, "Delete requested for unknown workout");
            return None;
        };

        let workout = self.records.remove(index);
        let marker = self.markers.remove(index);

        tracing::info!(id = %id, index, "Removed workout");
        self.persist();
        Some((workout, marker))
    }

    /// Replace the in-memory list with the persisted one, if any.
    ///
    /// Restored workouts get empty marker slots. Returns the number of
    /// workouts loaded.
    pub fn load_from_persistence(&mut self) -> usize {
        let blob = match self.kv.get(&self.key) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "Failed to read stored workouts");
                None
            }
        };

        let workouts = codec::decode(blob.as_deref());
        if workouts.is_empty() {
            return 0;
        }

        self.last_issued_id = workouts
            .iter()
            .filter_map(|w| w.id().as_number())
            .fold(self.last_issued_id, i64::max);
        self.markers = workouts.iter().map(|_| None).collect();
        self.records = workouts;

        tracing::info!(count = self.records.len(), "Loaded stored workouts");
        self.records.len()
    }

    /// Erase the persisted blob and drop all in-memory state.
    ///
    /// Returns the marker handles that were attached so the caller can take
    /// them off the map.
    pub fn clear(&mut self) -> Vec<M> {
        if let Err(e) = self.kv.remove(&self.key) {
            tracing::error!(error = %e, key = %self.key, "Failed to erase stored workouts");
        }

        self.records.clear();
        let markers = std::mem::take(&mut self.markers);
        tracing::info!("Cleared all workouts");
        markers.into_iter().flatten().collect()
    }

    /// Count a selection of the workout with `id`.
    ///
    /// The counter is saved with the next add or remove.
    pub fn register_interaction(&mut self, id: &WorkoutId) -> Option<&Workout> {
        let workout = self.records.iter_mut().find(|w| w.id() == id)?;
        workout.register_interaction();
        Some(workout)
    }

    /// Fill the marker slot at `index`, returning any marker it replaced.
    pub fn attach_marker(&mut self, index: usize, marker: M) -> Option<M> {
        let slot = self.markers.get_mut(index)?;
        slot.replace(marker)
    }

    /// Create markers for every workout whose slot is still empty.
    pub fn attach_markers<F>(&mut self, mut make_marker: F) -> usize
    where
        F: FnMut(&Workout) -> M,
    {
        let mut attached = 0;
        for (workout, slot) in self.records.iter().zip(self.markers.iter_mut()) {
            if slot.is_none() {
                *slot = Some(make_marker(workout));
                attached += 1;
            }
        }
        attached
    }

    fn persist(&self) {
        let blob = match codec::encode(&self.records) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode workouts");
                return;
            }
        };

        if let Err(e) = self.kv.set(&self.key, &blob) {
            tracing::error!(error = %e, key = %self.key, "Failed to persist workouts");
        }
    }
}
