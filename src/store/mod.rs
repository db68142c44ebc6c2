mod instance;
mod schema;
mod seed;
mod sqlite;

pub use instance::{init, instance};
pub use seed::SEED_EXERCISES;
pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
///
/// All reads return the deep shape (workouts populated with their exercises
/// and set templates); all calls are synchronous and either complete or
/// fail, with the two multi-row protocols (`replace_sets`, `log_session`)
/// running as single all-or-nothing transactions.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    /// Executes a seed script as one batch. Used once on first run to
    /// populate the exercise catalog.
    fn seed(&self, script: &str) -> Result<()>;

    // Exercise catalog (read-only after seeding)
    fn list_exercises(&self) -> Result<Vec<Exercise>>;
    fn get_exercise(&self, id: &str) -> Result<Option<Exercise>>;

    // Workout plan graph
    fn create_workout(&self, name: &str) -> Result<Workout>;
    fn get_workout(&self, id: i64) -> Result<Option<Workout>>;
    fn list_workouts(&self) -> Result<Vec<Workout>>;
    fn delete_workout(&self, id: i64) -> Result<()>;

    fn add_exercise_to_workout(
        &self,
        workout_id: i64,
        exercise_id: &str,
        note: Option<&str>,
    ) -> Result<WorkoutExercise>;
    fn remove_workout_exercise(&self, id: i64) -> Result<()>;

    // Set templates
    fn add_set_template(&self, we_id: i64, reps: i32, weight: f64) -> Result<SetTemplate>;
    fn update_set_template(&self, set_id: i64, reps: i32, weight: f64) -> Result<()>;
    fn list_sets_for_workout_exercise(&self, we_id: i64) -> Result<Vec<SetTemplate>>;

    /// Replaces every set template of a workout exercise with `new_sets`
    /// in one transaction. Readers see the old list or the new one, never
    /// a mix; an empty `new_sets` empties the list.
    fn replace_sets(&self, we_id: i64, new_sets: &[SetInput]) -> Result<()>;

    // Performed-set log (append-only)
    fn log_set(&self, entry: &NewPerformedSet) -> Result<()>;

    /// Logs a whole session in one transaction. Entries with `reps <= 0`
    /// are skipped silently; everything else is written in input order or
    /// not at all.
    fn log_session(&self, entries: &[NewPerformedSet]) -> Result<()>;
    fn list_performed_sets(&self) -> Result<Vec<PerformedSet>>;

    // Reporting
    fn weekly_volume(&self, exercise_id: &str) -> Result<Vec<WeeklyVolume>>;
}
