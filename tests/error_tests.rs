// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use workout_map::error::AppError;

#[test]
fn test_user_visible_errors_have_notices() {
    let err = AppError::InvalidInput("distance".to_string());
    assert_eq!(err.user_notice(), Some("Inputs have to be positive numbers!"));

    let err = AppError::PositionUnavailable;
    assert_eq!(err.user_notice(), Some("Could not get your position"));

    assert!(AppError::NoLocationSelected.user_notice().is_some());
}

#[test]
fn test_silent_errors_have_no_notice() {
    let err = AppError::Storage("disk full".to_string());
    assert!(err.user_notice().is_none());

    let err = AppError::Internal(anyhow::anyhow!("boom"));
    assert!(err.user_notice().is_none());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        AppError::InvalidInput("bad".to_string()).to_string(),
        "Invalid input: bad"
    );
    assert_eq!(
        AppError::Storage("disk full".to_string()).to_string(),
        "Storage error: disk full"
    );
}
