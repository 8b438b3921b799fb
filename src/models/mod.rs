// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod summary;
pub mod workout;

pub use summary::{Popup, WorkoutSummary};
pub use workout::{describe, Coords, Cycling, Running, Workout, WorkoutId, WorkoutKind};
