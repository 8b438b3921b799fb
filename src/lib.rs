// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout-Map: log runs and rides at places picked on a map
//!
//! This crate provides the workout record model, the storage codec and the
//! store that keeps the workout list, its map markers and the persisted blob
//! in step.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
