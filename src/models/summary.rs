// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display summaries handed to the list and map surfaces.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Workout, WorkoutKind};

/// Icon shown next to a workout's description and distance.
pub fn kind_icon(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "🏃‍♂️",
        WorkoutKind::Cycling => "🚴‍♀️",
    }
}

/// A value with its icon and unit, as rendered in a list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Detail {
    pub icon: String,
    pub value: String,
    pub unit: String,
}

impl Detail {
    fn new(icon: &str, value: String, unit: &str) -> Self {
        Self {
            icon: icon.to_string(),
            value,
            unit: unit.to_string(),
        }
    }
}

/// List entry for one workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Distance, duration, derived metric, then cadence or elevation.
    pub details: Vec<Detail>,
}

impl From<&Workout> for WorkoutSummary {
    fn from(w: &Workout) -> Self {
        let kind = w.kind();
        let mut details = vec![
            Detail::new(kind_icon(kind), format_number(w.distance_km()), "km"),
            Detail::new("⏱", format_number(w.duration_min()), "min"),
        ];

        match w {
            Workout::Running(r) => {
                details.push(Detail::new(
                    "⚡️",
                    format!("{:.1}", r.pace_min_per_km()),
                    "min/km",
                ));
                details.push(Detail::new("🦶🏼", format_number(r.cadence_spm()), "spm"));
            }
            Workout::Cycling(c) => {
                details.push(Detail::new(
                    "⚡️",
                    format!("{:.1}", c.speed_km_per_h()),
                    "km/h",
                ));
                details.push(Detail::new("⛰", format_number(c.elevation_gain_m()), "m"));
            }
        }

        Self {
            id: w.id().to_string(),
            kind: kind.to_string(),
            description: w.description().to_string(),
            details,
        }
    }
}

impl std::fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)?;
        for d in &self.details {
            write!(f, "  {} {} {}", d.icon, d.value, d.unit)?;
        }
        Ok(())
    }
}

/// Popup attached to a workout's map marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Popup {
    pub class_name: String,
    pub text: String,
}

impl From<&Workout> for Popup {
    fn from(w: &Workout) -> Self {
        Self {
            class_name: format!("{}-popup", w.kind()),
            text: format!("{} {}", kind_icon(w.kind()), w.description()),
        }
    }
}

/// Render a number without a trailing ".0" for whole values.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
