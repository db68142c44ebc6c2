use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parsed form of the exercise metadata document.
///
/// Catalog rows store a JSON blob; it is decoded once at load time and any
/// missing or malformed field simply comes out empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExerciseMeta {
    pub name: String,
    pub primary_muscles: Vec<String>,
    pub secondary_muscles: Vec<String>,
}

/// A catalog exercise, keyed by a stable human-readable slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub meta: ExerciseMeta,
}

impl Exercise {
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn primary_muscles(&self) -> &[String] {
        &self.meta.primary_muscles
    }

    pub fn secondary_muscles(&self) -> &[String] {
        &self.meta.secondary_muscles
    }

    /// Primary and secondary muscles as one list.
    pub fn muscles(&self) -> Vec<String> {
        let mut all = self.meta.primary_muscles.clone();
        all.extend(self.meta.secondary_muscles.iter().cloned());
        all
    }
}

/// A workout plan, eagerly populated with its exercises and their set
/// templates. This deep shape is what every read returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub name: String,
    pub exercises: Vec<WorkoutExercise>,
}

/// One exercise within a workout plan, with its target set templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub id: i64,
    pub workout_id: i64,
    pub exercise: Exercise,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub sets: Vec<SetTemplate>,
}

/// A planned target (reps at a weight), not a historical fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetTemplate {
    pub id: i64,
    pub workout_exercise_id: i64,
    pub reps: i32,
    pub weight: f64,
}

/// Reps/weight pair for building a replacement set list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SetInput {
    pub reps: i32,
    pub weight: f64,
}

/// An immutable history row recording what was actually done. Carries the
/// workout and exercise ids as plain values so it survives plan deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformedSet {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_id: String,
    pub performed_date: NaiveDate,
    pub set_no: i32,
    pub reps: i32,
    pub weight: f64,
}

/// A performed set about to be logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPerformedSet {
    pub workout_id: i64,
    pub exercise_id: String,
    pub performed_date: NaiveDate,
    pub set_no: i32,
    pub reps: i32,
    pub weight: f64,
}

/// One row of the weekly-volume report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyVolume {
    pub exercise_id: String,
    pub set_count: i64,
    pub calendar_week: String,
}
