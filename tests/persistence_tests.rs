// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence tests against the file-backed store.
//!
//! Covers the full round trip through disk and reading blobs written by the
//! browser version of the app (JavaScript `Date` strings, integer numbers).

mod common;

use std::fs;
use std::path::PathBuf;

use common::{ride, run};
use workout_map::db::{keys, FileStore, KeyValueStore};
use workout_map::models::{Workout, WorkoutKind, WorkoutSummary};
use workout_map::services::{codec, WorkoutStore};

/// Generate a unique temp file path for test isolation.
fn temp_store_path(name: &str) -> PathBuf {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("workout-map-it-{}-{}.json", name, nanos))
}

const BROWSER_BLOB: &str = r#"[
  {"date":"2024-05-12T16:41:07.512Z","id":"5532067512","clicks":2,
   "coords":[51.50735,-0.12776],"distance":5.2,"duration":24,"type":"running",
   "cadence":178,"pace":4.615384615384615,"description":"Running on May 12"},
  {"date":"2024-05-13T06:02:44.090Z","id":"5580164090","clicks":0,
   "coords":[51.5,-0.1],"distance":27,"duration":95,"type":"cycling",
   "elevationGain":523,"speed":17.05263157894737,"description":"Cycling on May 13"}
]"#;

#[test]
fn test_round_trip_through_file() {
    let path = temp_store_path("roundtrip");
    let original = vec![
        run("1715532067512", 5.0, 25.0, 180.0),
        ride("1715580164090", 27.0, 95.0, 523.0),
    ];
    {
        let mut store = WorkoutStore::new(FileStore::new(&path));
        for w in &original {
            store.add(w.clone(), ());
        }
    }

    let mut restored: WorkoutStore<_, ()> = WorkoutStore::new(FileStore::new(&path));
    assert_eq!(restored.load_from_persistence(), 2);

    for (before, after) in original.iter().zip(restored.records()) {
        assert_eq!(before, after);
        assert_eq!(before.metric(), after.metric());
        assert_eq!(before.description(), after.description());
    }

    fs::remove_file(&path).ok();
}

#[test]
fn test_reads_browser_blob() {
    let workouts = codec::try_decode(BROWSER_BLOB).expect("browser blob decodes");

    assert_eq!(workouts.len(), 2);

    let first = &workouts[0];
    assert!(matches!(first, Workout::Running(_)));
    assert_eq!(first.id().as_str(), "5532067512");
    assert_eq!(first.clicks(), 2);
    assert_eq!(first.distance_km(), 5.2);
    assert_eq!(first.cadence_spm(), Some(178.0));
    assert_eq!(first.pace_min_per_km(), Some(4.615384615384615));
    assert_eq!(first.created_at().timestamp_millis(), 1_715_532_067_512);

    let second = &workouts[1];
    assert_eq!(second.kind(), WorkoutKind::Cycling);
    assert_eq!(second.elevation_gain_m(), Some(523.0));
    assert_eq!(second.speed_km_per_h(), Some(17.05263157894737));
    assert_eq!(
        WorkoutSummary::from(second).details[2].value,
        "17.1".to_string()
    );
}

#[test]
fn test_browser_blob_ids_advance_allocator() {
    let path = temp_store_path("browser");
    let kv = FileStore::new(&path);
    kv.set(keys::WORKOUTS, BROWSER_BLOB).unwrap();

    let mut store: WorkoutStore<_, ()> = WorkoutStore::new(kv);
    assert_eq!(store.load_from_persistence(), 2);

    // Ids from the browser are the last ten digits of a millisecond clock
    let at = chrono::DateTime::parse_from_rfc3339("1970-01-01T00:00:01Z").unwrap();
    let next = store.allocate_id(&at);
    assert_eq!(next.as_number(), Some(5_580_164_091));

    fs::remove_file(&path).ok();
}

#[test]
fn test_corrupt_file_loads_nothing() {
    let path = temp_store_path("corrupt");
    fs::write(&path, "{ this is not json").unwrap();

    let mut store: WorkoutStore<_, ()> = WorkoutStore::new(FileStore::new(&path));

    assert_eq!(store.load_from_persistence(), 0);
    assert!(store.is_empty());

    fs::remove_file(&path).ok();
}
