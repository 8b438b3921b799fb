//! Storage layer (opaque key-value slots).

pub mod kv;

pub use kv::{FileStore, KeyValueStore, MemoryStore};

/// Storage key names as constants.
pub mod keys {
    /// The serialized workout list
    pub const WORKOUTS: &str = "workouts";
}
