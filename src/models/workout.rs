// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model.
//!
//! A workout is either a run or a ride. Both share a set of base fields and
//! carry one derived metric that is computed exactly once, at construction:
//! pace (min/km) for runs, speed (km/h) for rides.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, SubsecRound};
use serde::{Deserialize, Serialize};

use crate::time_utils::month_day_label;

/// A latitude/longitude pair, stored as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(c: Coords) -> Self {
        [c.lat, c.lng]
    }
}

/// Opaque workout identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of ids allocated from millisecond timestamps.
    pub fn as_number(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Workout variant discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Name with the first letter upper-cased ("Running").
    pub fn title(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = UnknownWorkoutKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(UnknownWorkoutKind(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown workout type: {0}")]
pub struct UnknownWorkoutKind(pub String);

/// Build the human-readable label for a workout, e.g. "Running on October 18".
pub fn describe(kind: WorkoutKind, created_at: &DateTime<FixedOffset>) -> String {
    format!("{} on {}", kind.title(), month_day_label(created_at))
}

/// Fields shared by every workout variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutBase {
    id: WorkoutId,
    #[serde(rename = "date", with = "crate::time_utils::rfc3339")]
    created_at: DateTime<FixedOffset>,
    coords: Coords,
    #[serde(rename = "distance")]
    distance_km: f64,
    #[serde(rename = "duration")]
    duration_min: f64,
    description: String,
    #[serde(default)]
    clicks: u32,
}

impl WorkoutBase {
    fn new(
        kind: WorkoutKind,
        id: WorkoutId,
        created_at: DateTime<FixedOffset>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
    ) -> Self {
        Self {
            description: describe(kind, &created_at),
            id,
            created_at: created_at.trunc_subsecs(3),
            coords,
            distance_km,
            duration_min,
            clicks: 0,
        }
    }
}

/// A run, with cadence and derived pace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Running {
    #[serde(flatten)]
    base: WorkoutBase,
    #[serde(rename = "cadence")]
    cadence_spm: f64,
    #[serde(rename = "pace")]
    pace_min_per_km: f64,
}

impl Running {
    pub fn new(
        id: WorkoutId,
        created_at: DateTime<FixedOffset>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        let pace_min_per_km = duration_min / distance_km;
        Self {
            base: WorkoutBase::new(
                WorkoutKind::Running,
                id,
                created_at,
                coords,
                distance_km,
                duration_min,
            ),
            cadence_spm,
            pace_min_per_km,
        }
    }

    pub fn cadence_spm(&self) -> f64 {
        self.cadence_spm
    }

    pub fn pace_min_per_km(&self) -> f64 {
        self.pace_min_per_km
    }
}

/// A ride, with elevation gain and derived speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycling {
    #[serde(flatten)]
    base: WorkoutBase,
    #[serde(rename = "elevationGain")]
    elevation_gain_m: f64,
    #[serde(rename = "speed")]
    speed_km_per_h: f64,
}

impl Cycling {
    pub fn new(
        id: WorkoutId,
        created_at: DateTime<FixedOffset>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        let speed_km_per_h = distance_km / (duration_min / 60.0);
        Self {
            base: WorkoutBase::new(
                WorkoutKind::Cycling,
                id,
                created_at,
                coords,
                distance_km,
                duration_min,
            ),
            elevation_gain_m,
            speed_km_per_h,
        }
    }

    pub fn elevation_gain_m(&self) -> f64 {
        self.elevation_gain_m
    }

    pub fn speed_km_per_h(&self) -> f64 {
        self.speed_km_per_h
    }
}

/// A logged workout. The variant is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Workout {
    Running(Running),
    Cycling(Cycling),
}

impl From<Running> for Workout {
    fn from(r: Running) -> Self {
        Workout::Running(r)
    }
}

impl From<Cycling> for Workout {
    fn from(c: Cycling) -> Self {
        Workout::Cycling(c)
    }
}

impl Workout {
    pub fn running(
        id: WorkoutId,
        created_at: DateTime<FixedOffset>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        Running::new(id, created_at, coords, distance_km, duration_min, cadence_spm).into()
    }

    pub fn cycling(
        id: WorkoutId,
        created_at: DateTime<FixedOffset>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Cycling::new(
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            elevation_gain_m,
        )
        .into()
    }

    fn base(&self) -> &WorkoutBase {
        match self {
            Workout::Running(r) => &r.base,
            Workout::Cycling(c) => &c.base,
        }
    }

    fn base_mut(&mut self) -> &mut WorkoutBase {
        match self {
            Workout::Running(r) => &mut r.base,
            Workout::Cycling(c) => &mut c.base,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::Cycling(_) => WorkoutKind::Cycling,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.base().id
    }

    pub fn created_at(&self) -> &DateTime<FixedOffset> {
        &self.base().created_at
    }

    pub fn coords(&self) -> Coords {
        self.base().coords
    }

    pub fn distance_km(&self) -> f64 {
        self.base().distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.base().duration_min
    }

    pub fn description(&self) -> &str {
        &self.base().description
    }

    pub fn clicks(&self) -> u32 {
        self.base().clicks
    }

    /// Count one selection of this workout in the UI.
    pub fn register_interaction(&mut self) {
        let base = self.base_mut();
        base.clicks = base.clicks.saturating_add(1);
    }

    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self {
            Workout::Running(r) => Some(r.pace_min_per_km),
            Workout::Cycling(_) => None,
        }
    }

    pub fn cadence_spm(&self) -> Option<f64> {
        match self {
            Workout::Running(r) => Some(r.cadence_spm),
            Workout::Cycling(_) => None,
        }
    }

    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self {
            Workout::Running(_) => None,
            Workout::Cycling(c) => Some(c.speed_km_per_h),
        }
    }

    pub fn elevation_gain_m(&self) -> Option<f64> {
        match self {
            Workout::Running(_) => None,
            Workout::Cycling(c) => Some(c.elevation_gain_m),
        }
    }

    /// The variant's derived metric: pace for runs, speed for rides.
    pub fn metric(&self) -> f64 {
        match self {
            Workout::Running(r) => r.pace_min_per_km,
            Workout::Cycling(c) => c.speed_km_per_h,
        }
    }

    /// True if every numeric field (coordinates included) is finite.
    pub fn is_finite(&self) -> bool {
        let extra = match self {
            Workout::Running(r) => r.cadence_spm,
            Workout::Cycling(c) => c.elevation_gain_m,
        };
        let coords = self.coords();
        [
            coords.lat,
            coords.lng,
            self.distance_km(),
            self.duration_min(),
            extra,
            self.metric(),
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
