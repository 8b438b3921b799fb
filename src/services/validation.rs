// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Numeric input validation for new workouts.

use crate::error::{AppError, Result};
use crate::models::WorkoutKind;

/// True if every value is finite (not infinite, not NaN).
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// True if every value is strictly greater than zero.
pub fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

/// True iff every value is finite and strictly positive.
pub fn is_valid_and_positive(values: &[f64]) -> bool {
    all_finite(values) && all_positive(values)
}

/// Parse a raw form field. Blank or unparsable input becomes NaN so it fails
/// validation instead of silently turning into zero.
pub fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// Check the numeric fields of a new workout.
///
/// `extra` is the cadence for runs and the elevation gain for rides.
/// Elevation gain may be zero (flat terrain); every other field must be
/// strictly positive. The derived pace or speed must also be finite, which
/// rules out inputs so small or large that the division overflows.
pub fn validate_workout(kind: WorkoutKind, distance: f64, duration: f64, extra: f64) -> Result<()> {
    let valid = match kind {
        WorkoutKind::Running => {
            is_valid_and_positive(&[distance, duration, extra])
                && (duration / distance).is_finite()
        }
        WorkoutKind::Cycling => {
            is_valid_and_positive(&[distance, duration])
                && extra.is_finite()
                && extra >= 0.0
                && (distance / (duration / 60.0)).is_finite()
        }
    };

    if valid {
        Ok(())
    } else {
        tracing::debug!(%kind, distance, duration, extra, "Rejected workout input");
        Err(AppError::InvalidInput(format!(
            "{} needs positive distance, duration and {}",
            kind,
            match kind {
                WorkoutKind::Running => "cadence",
                WorkoutKind::Cycling => "non-negative elevation",
            }
        )))
    }
}
