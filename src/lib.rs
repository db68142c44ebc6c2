//! # liftlog
//!
//! A workout planner and training log, usable both as a standalone binary
//! and as a library.
//!
//! The library is the persistence core: an embedded SQLite store holding the
//! workout plan graph (Workout → WorkoutExercise → Set templates), a
//! seed-time exercise catalog, and an append-only log of performed sets.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! liftlog = { version = "0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use liftlog::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new("./data/training.db").unwrap();
//! store.initialize().unwrap();
//!
//! let workout = store.create_workout("Push Day").unwrap();
//! store.add_exercise_to_workout(workout.id, "bench-press", Some("heavy")).unwrap();
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Includes the CLI binary. Disable with `default-features = false`.

pub mod error;
pub mod store;
pub mod types;
