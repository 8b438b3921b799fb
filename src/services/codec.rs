// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout list <-> storage blob codec.
//!
//! The blob is a JSON array of objects, each tagged with its `"type"`.
//! Decoding matches on the tag and builds the variant directly; derived
//! metrics and descriptions are taken from the blob, never recomputed.

use crate::models::Workout;

/// Encode the full ordered workout list.
///
/// JSON has no representation for NaN or infinity, so a list holding a
/// non-finite value is refused rather than written as `null`.
pub fn encode(workouts: &[Workout]) -> Result<String, CodecError> {
    if let Some(bad) = workouts.iter().find(|w| !w.is_finite()) {
        return Err(CodecError::Encode(format!(
            "workout {} has a non-finite field",
            bad.id()
        )));
    }
    serde_json::to_string(workouts).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Decode a blob strictly, reporting why it could not be read.
///
/// A JSON `null` blob decodes to an empty list.
pub fn try_decode(blob: &str) -> Result<Vec<Workout>, CodecError> {
    let workouts: Option<Vec<Workout>> =
        serde_json::from_str(blob).map_err(|e| CodecError::Malformed(e.to_string()))?;
    Ok(workouts.unwrap_or_default())
}

/// Decode a stored blob, treating an absent or malformed blob as "no workouts".
pub fn decode(blob: Option<&str>) -> Vec<Workout> {
    let Some(blob) = blob else {
        tracing::debug!("No stored workouts");
        return Vec::new();
    };

    match try_decode(blob) {
        Ok(workouts) => {
            tracing::debug!(count = workouts.len(), "Decoded stored workouts");
            workouts
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable workout blob");
            Vec::new()
        }
    }
}

/// Errors from encoding or decoding the workout blob.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Failed to encode workouts: {0}")]
    Encode(String),

    #[error("Malformed workout blob: {0}")]
    Malformed(String),
}
