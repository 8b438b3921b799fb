// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout-Map listing tool
//!
//! Restores the stored workouts and prints one line per workout, in the
//! order they appear in the list.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_map::{
    config::Config,
    db::FileStore,
    models::WorkoutSummary,
    services::WorkoutStore,
};

fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        path = %config.storage_path.display(),
        key = %config.storage_key,
        "Opening workout storage"
    );

    let kv = FileStore::new(&config.storage_path);
    let mut store: WorkoutStore<_, ()> = WorkoutStore::with_key(kv, config.storage_key.clone());
    let count = store.load_from_persistence();
    tracing::info!(count, "Workouts restored");

    for workout in store.records() {
        println!("{}", WorkoutSummary::from(workout));
    }

    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workout_map=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
