pub const SCHEMA: &str = r#"
-- Exercise catalog: seeded once, read thereafter. The data column holds a
-- JSON document (name, primaryMuscles, secondaryMuscles).
CREATE TABLE IF NOT EXISTS exercises (
    id TEXT PRIMARY KEY,
    data TEXT NOT NULL DEFAULT '{}'
);

-- Workout plans. Deletion tombstones the row itself while the exercise
-- subtree is hard-removed.
CREATE TABLE IF NOT EXISTS workouts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(name) > 0),
    deleted_at TEXT
);

CREATE TABLE IF NOT EXISTS workout_exercises (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    workout_id INTEGER NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
    exercise_id TEXT NOT NULL REFERENCES exercises(id),
    note TEXT,
    deleted_at TEXT
);

-- Planned targets, owned by their workout exercise.
CREATE TABLE IF NOT EXISTS sets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    workout_exercise_id INTEGER NOT NULL REFERENCES workout_exercises(id) ON DELETE CASCADE,
    reps INTEGER NOT NULL,
    weight REAL NOT NULL
);

-- Training history. Deliberately no foreign keys: workout_id and
-- exercise_id are plain values so the log outlives the plan that
-- produced it.
CREATE TABLE IF NOT EXISTS performed_sets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    workout_id INTEGER NOT NULL,
    exercise_id TEXT NOT NULL,
    performed_date TEXT NOT NULL,
    set_no INTEGER NOT NULL,
    reps INTEGER NOT NULL,
    weight REAL NOT NULL
);

-- Create indexes
CREATE INDEX IF NOT EXISTS idx_workout_exercises_workout ON workout_exercises(workout_id);
CREATE INDEX IF NOT EXISTS idx_sets_workout_exercise ON sets(workout_exercise_id);
CREATE INDEX IF NOT EXISTS idx_performed_sets_exercise ON performed_sets(exercise_id);
CREATE INDEX IF NOT EXISTS idx_performed_sets_date ON performed_sets(performed_date);

-- Weekly training volume per exercise, for the reporting query.
CREATE VIEW IF NOT EXISTS vw_weekly_volume AS
SELECT exercise_id,
       COUNT(*) AS set_count,
       strftime('%Y-%W', performed_date) AS calendar_week
FROM performed_sets
GROUP BY exercise_id, calendar_week;
"#;
