// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent user notices.

/// Application error type.
///
/// User-visible variants carry a blocking notice (see [`AppError::user_notice`]);
/// the rest are logged and recovered from.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Position unavailable")]
    PositionUnavailable,

    #[error("No map location selected")]
    NoLocationSelected,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub const INVALID_INPUT_NOTICE: &'static str = "Inputs have to be positive numbers!";
    pub const POSITION_NOTICE: &'static str = "Could not get your position";

    /// Text to show the user as a blocking notice, or `None` for errors that
    /// are recovered silently.
    pub fn user_notice(&self) -> Option<&'static str> {
        match self {
            AppError::InvalidInput(_) => Some(Self::INVALID_INPUT_NOTICE),
            AppError::PositionUnavailable => Some(Self::POSITION_NOTICE),
            AppError::NoLocationSelected => Some("Click on the map to pick a location first"),
            AppError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage error");
                None
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                None
            }
        }
    }
}

/// Result type alias for fallible operations
pub type Result<T> = std::result::Result<T, AppError>;
