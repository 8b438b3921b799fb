// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - workout logic layer.

pub mod codec;
pub mod map;
pub mod session;
pub mod store;
pub mod validation;

pub use codec::CodecError;
pub use map::{FixedPosition, MapSurface, PositionProvider, PositionUnavailable};
pub use session::{Session, WorkoutForm};
pub use store::WorkoutStore;
pub use validation::is_valid_and_positive;
