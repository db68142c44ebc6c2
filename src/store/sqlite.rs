use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, Transaction, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns a guard to the underlying database connection.
    /// This allows consuming applications to execute custom SQL.
    pub fn connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn()
    }
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|e| {
        tracing::error!("Invalid date in database: '{}' - {}", s, e);
        NaiveDate::default()
    })
}

fn format_date(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Decodes an exercise metadata document. Missing fields default to empty;
/// a document that does not parse at all behaves like an empty one.
fn parse_meta(data: &str) -> ExerciseMeta {
    serde_json::from_str(data).unwrap_or_else(|e| {
        tracing::error!("Invalid exercise metadata in database: {}", e);
        ExerciseMeta::default()
    })
}

/// Maps SQLite constraint failures onto the typed taxonomy; everything else
/// stays a generic database error.
fn constraint_error(err: rusqlite::Error, context: &str) -> Error {
    match &err {
        rusqlite::Error::SqliteFailure(e, _) => match e.extended_code {
            rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Error::ForeignKey(context.to_string()),
            rusqlite::ffi::SQLITE_CONSTRAINT_CHECK | rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL => {
                Error::Validation(context.to_string())
            }
            _ => Error::Database(err),
        },
        _ => Error::Database(err),
    }
}

fn get_exercise_row(conn: &Connection, id: &str) -> Result<Option<Exercise>> {
    conn.query_row(
        "SELECT id, data FROM exercises WHERE id = ?1",
        params![id],
        |row| {
            Ok(Exercise {
                id: row.get(0)?,
                meta: parse_meta(&row.get::<_, String>(1)?),
            })
        },
    )
    .optional()
    .map_err(Error::from)
}

fn load_sets(conn: &Connection, we_id: i64) -> Result<Vec<SetTemplate>> {
    let mut stmt = conn.prepare(
        "SELECT id, workout_exercise_id, reps, weight
         FROM sets WHERE workout_exercise_id = ?1 ORDER BY id",
    )?;

    let rows = stmt.query_map(params![we_id], |row| {
        Ok(SetTemplate {
            id: row.get(0)?,
            workout_exercise_id: row.get(1)?,
            reps: row.get(2)?,
            weight: row.get(3)?,
        })
    })?;

    rows.collect::<std::result::Result<Vec<_>, _>>()
        .map_err(Error::from)
}

fn load_workout_exercises(conn: &Connection, workout_id: i64) -> Result<Vec<WorkoutExercise>> {
    let mut stmt = conn.prepare(
        "SELECT we.id, we.workout_id, we.note, e.id, e.data
         FROM workout_exercises we
         JOIN exercises e ON e.id = we.exercise_id
         WHERE we.workout_id = ?1 AND we.deleted_at IS NULL
         ORDER BY we.id",
    )?;

    let rows = stmt.query_map(params![workout_id], |row| {
        Ok(WorkoutExercise {
            id: row.get(0)?,
            workout_id: row.get(1)?,
            note: row.get(2)?,
            exercise: Exercise {
                id: row.get(3)?,
                meta: parse_meta(&row.get::<_, String>(4)?),
            },
            sets: Vec::new(),
        })
    })?;

    let mut exercises = rows.collect::<std::result::Result<Vec<_>, _>>()?;
    for we in &mut exercises {
        we.sets = load_sets(conn, we.id)?;
    }
    Ok(exercises)
}

fn insert_performed_set(tx: &Transaction<'_>, entry: &NewPerformedSet) -> Result<()> {
    tx.execute(
        "INSERT INTO performed_sets (workout_id, exercise_id, performed_date, set_no, reps, weight)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.workout_id,
            entry.exercise_id,
            format_date(&entry.performed_date),
            entry.set_no,
            entry.reps,
            entry.weight,
        ],
    )?;
    Ok(())
}

fn replace_sets_in_tx(tx: &Transaction<'_>, we_id: i64, new_sets: &[SetInput]) -> Result<()> {
    tx.execute(
        "DELETE FROM sets WHERE workout_exercise_id = ?1",
        params![we_id],
    )?;

    if new_sets.is_empty() {
        return Ok(());
    }

    let mut stmt = tx.prepare(
        "INSERT INTO sets (workout_exercise_id, reps, weight) VALUES (?1, ?2, ?3)",
    )?;
    for set in new_sets {
        stmt.execute(params![we_id, set.reps, set.weight])
            .map_err(|e| constraint_error(e, "workout exercise does not exist"))?;
    }
    Ok(())
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    fn seed(&self, script: &str) -> Result<()> {
        tracing::debug!("seeding exercise catalog");
        self.conn().execute_batch(script)?;
        Ok(())
    }

    // Exercise catalog

    fn list_exercises(&self) -> Result<Vec<Exercise>> {
        let conn = self.conn();
        let mut stmt = conn.prepare("SELECT id, data FROM exercises")?;

        let rows = stmt.query_map([], |row| {
            Ok(Exercise {
                id: row.get(0)?,
                meta: parse_meta(&row.get::<_, String>(1)?),
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn get_exercise(&self, id: &str) -> Result<Option<Exercise>> {
        let conn = self.conn();
        get_exercise_row(&conn, id)
    }

    // Workout plan graph

    fn create_workout(&self, name: &str) -> Result<Workout> {
        let conn = self.conn();
        conn.execute("INSERT INTO workouts (name) VALUES (?1)", params![name])
            .map_err(|e| constraint_error(e, "workout name must not be empty"))?;

        Ok(Workout {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
            exercises: Vec::new(),
        })
    }

    fn get_workout(&self, id: i64) -> Result<Option<Workout>> {
        let conn = self.conn();
        let workout = conn
            .query_row(
                "SELECT id, name FROM workouts WHERE id = ?1 AND deleted_at IS NULL",
                params![id],
                |row| {
                    Ok(Workout {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        exercises: Vec::new(),
                    })
                },
            )
            .optional()?;

        match workout {
            Some(mut w) => {
                w.exercises = load_workout_exercises(&conn, w.id)?;
                Ok(Some(w))
            }
            None => Ok(None),
        }
    }

    fn list_workouts(&self) -> Result<Vec<Workout>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare("SELECT id, name FROM workouts WHERE deleted_at IS NULL ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(Workout {
                id: row.get(0)?,
                name: row.get(1)?,
                exercises: Vec::new(),
            })
        })?;

        let mut workouts = rows.collect::<std::result::Result<Vec<Workout>, _>>()?;
        for w in &mut workouts {
            w.exercises = load_workout_exercises(&conn, w.id)?;
        }
        Ok(workouts)
    }

    fn delete_workout(&self, id: i64) -> Result<()> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let live: Option<i64> = tx
            .query_row(
                "SELECT id FROM workouts WHERE id = ?1 AND deleted_at IS NULL",
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        if live.is_none() {
            return Err(Error::NotFound);
        }

        // Set rows go with their parents via the declared cascade. History
        // in performed_sets carries no foreign keys and is never touched.
        tx.execute(
            "DELETE FROM workout_exercises WHERE workout_id = ?1",
            params![id],
        )?;
        tx.execute(
            "UPDATE workouts SET deleted_at = ?1 WHERE id = ?2",
            params![format_datetime(&Utc::now()), id],
        )?;

        tx.commit()?;
        Ok(())
    }

    fn add_exercise_to_workout(
        &self,
        workout_id: i64,
        exercise_id: &str,
        note: Option<&str>,
    ) -> Result<WorkoutExercise> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO workout_exercises (workout_id, exercise_id, note) VALUES (?1, ?2, ?3)",
            params![workout_id, exercise_id, note],
        )
        .map_err(|e| constraint_error(e, "workout or exercise does not exist"))?;

        let id = conn.last_insert_rowid();
        let exercise = get_exercise_row(&conn, exercise_id)?.ok_or(Error::NotFound)?;

        Ok(WorkoutExercise {
            id,
            workout_id,
            exercise,
            note: note.map(str::to_string),
            sets: Vec::new(),
        })
    }

    fn remove_workout_exercise(&self, id: i64) -> Result<()> {
        let rows = self.conn().execute(
            "DELETE FROM workout_exercises WHERE id = ?1",
            params![id],
        )?;

        if rows == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    // Set templates

    fn add_set_template(&self, we_id: i64, reps: i32, weight: f64) -> Result<SetTemplate> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO sets (workout_exercise_id, reps, weight) VALUES (?1, ?2, ?3)",
            params![we_id, reps, weight],
        )
        .map_err(|e| constraint_error(e, "workout exercise does not exist"))?;

        Ok(SetTemplate {
            id: conn.last_insert_rowid(),
            workout_exercise_id: we_id,
            reps,
            weight,
        })
    }

    fn update_set_template(&self, set_id: i64, reps: i32, weight: f64) -> Result<()> {
        let rows = self.conn().execute(
            "UPDATE sets SET reps = ?1, weight = ?2 WHERE id = ?3",
            params![reps, weight, set_id],
        )?;

        if rows == 0 {
            return Err(Error::NotFound);
        }
        Ok(())
    }

    fn list_sets_for_workout_exercise(&self, we_id: i64) -> Result<Vec<SetTemplate>> {
        let conn = self.conn();
        load_sets(&conn, we_id)
    }

    fn replace_sets(&self, we_id: i64, new_sets: &[SetInput]) -> Result<()> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let result = replace_sets_in_tx(&tx, we_id, new_sets);
        match result.and_then(|_| tx.commit().map_err(Error::from)) {
            Ok(()) => Ok(()),
            Err(e) => Err(Error::TransactionAborted(Box::new(e))),
        }
    }

    // Performed-set log

    fn log_set(&self, entry: &NewPerformedSet) -> Result<()> {
        // a zero-rep set was declined, not performed
        if entry.reps <= 0 {
            return Ok(());
        }

        self.conn().execute(
            "INSERT INTO performed_sets (workout_id, exercise_id, performed_date, set_no, reps, weight)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.workout_id,
                entry.exercise_id,
                format_date(&entry.performed_date),
                entry.set_no,
                entry.reps,
                entry.weight,
            ],
        )?;
        Ok(())
    }

    fn log_session(&self, entries: &[NewPerformedSet]) -> Result<()> {
        // filter first, then write the survivors atomically
        let loggable: Vec<&NewPerformedSet> = entries.iter().filter(|e| e.reps > 0).collect();
        if loggable.is_empty() {
            return Ok(());
        }

        let mut conn = self.conn();
        let tx = conn.transaction()?;

        let result = loggable
            .iter()
            .try_for_each(|entry| insert_performed_set(&tx, entry));
        match result.and_then(|_| tx.commit().map_err(Error::from)) {
            Ok(()) => Ok(()),
            Err(e) => Err(Error::TransactionAborted(Box::new(e))),
        }
    }

    fn list_performed_sets(&self) -> Result<Vec<PerformedSet>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, workout_id, exercise_id, performed_date, set_no, reps, weight
             FROM performed_sets
             ORDER BY performed_date DESC, exercise_id ASC, set_no ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(PerformedSet {
                id: row.get(0)?,
                workout_id: row.get(1)?,
                exercise_id: row.get(2)?,
                performed_date: parse_date(&row.get::<_, String>(3)?),
                set_no: row.get(4)?,
                reps: row.get(5)?,
                weight: row.get(6)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    // Reporting

    fn weekly_volume(&self, exercise_id: &str) -> Result<Vec<WeeklyVolume>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT exercise_id, set_count, calendar_week
             FROM vw_weekly_volume WHERE exercise_id = ?1
             ORDER BY calendar_week",
        )?;

        let rows = stmt.query_map(params![exercise_id], |row| {
            Ok(WeeklyVolume {
                exercise_id: row.get(0)?,
                set_count: row.get(1)?,
                calendar_week: row.get(2)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TEST_EXERCISES: &str = r#"
        INSERT INTO exercises (id, data) VALUES
            ('bench-press', '{"name":"Bench Press","primaryMuscles":["chest"],"secondaryMuscles":["triceps"]}'),
            ('squat', '{"name":"Back Squat","primaryMuscles":["quadriceps"],"secondaryMuscles":["glutes"]}'),
            ('pullups', '{"name":"Pullups","primaryMuscles":["lats"],"secondaryMuscles":[]}');
    "#;

    fn seeded_store() -> (TempDir, SqliteStore) {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path().join("test.db")).unwrap();
        store.initialize().unwrap();
        store.seed(TEST_EXERCISES).unwrap();
        (temp, store)
    }

    fn count(store: &SqliteStore, sql: &str) -> i64 {
        store
            .connection()
            .query_row(sql, [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn test_initialize_creates_tables() {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path().join("test.db")).unwrap();
        store.initialize().unwrap();

        let conn = store.conn();
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"exercises".to_string()));
        assert!(tables.contains(&"workouts".to_string()));
        assert!(tables.contains(&"workout_exercises".to_string()));
        assert!(tables.contains(&"sets".to_string()));
        assert!(tables.contains(&"performed_sets".to_string()));

        let views: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='view' AND name='vw_weekly_volume'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(views, 1);
    }

    #[test]
    fn test_exercise_catalog() {
        let (_temp, store) = seeded_store();

        let exercises = store.list_exercises().unwrap();
        assert_eq!(exercises.len(), 3);

        let bench = store.get_exercise("bench-press").unwrap().unwrap();
        assert_eq!(bench.name(), "Bench Press");
        assert_eq!(bench.primary_muscles(), ["chest".to_string()]);
        assert_eq!(bench.muscles(), vec!["chest", "triceps"]);

        assert!(store.get_exercise("leg-day-only").unwrap().is_none());
    }

    #[test]
    fn test_exercise_meta_defaults_when_missing() {
        let (_temp, store) = seeded_store();
        store
            .seed("INSERT INTO exercises (id, data) VALUES ('mystery', '{}'), ('broken', 'not json');")
            .unwrap();

        let mystery = store.get_exercise("mystery").unwrap().unwrap();
        assert_eq!(mystery.name(), "");
        assert!(mystery.primary_muscles().is_empty());

        let broken = store.get_exercise("broken").unwrap().unwrap();
        assert_eq!(broken.name(), "");
        assert!(broken.muscles().is_empty());
    }

    #[test]
    fn test_create_workout_rejects_empty_name() {
        let (_temp, store) = seeded_store();

        let result = store.create_workout("");
        assert!(matches!(result, Err(Error::Validation(_))));

        let workout = store.create_workout("Push Day").unwrap();
        assert_eq!(workout.name, "Push Day");
        assert!(workout.exercises.is_empty());
    }

    #[test]
    fn test_deep_fetch_shape() {
        let (_temp, store) = seeded_store();

        let workout = store.create_workout("Push Day").unwrap();
        let we = store
            .add_exercise_to_workout(workout.id, "bench-press", Some("heavy"))
            .unwrap();
        store.add_set_template(we.id, 10, 60.0).unwrap();
        store.add_set_template(we.id, 8, 65.0).unwrap();

        let fetched = store.get_workout(workout.id).unwrap().unwrap();
        assert_eq!(fetched.name, "Push Day");
        assert_eq!(fetched.exercises.len(), 1);
        assert_eq!(fetched.exercises[0].exercise.name(), "Bench Press");
        assert_eq!(fetched.exercises[0].note.as_deref(), Some("heavy"));
        assert_eq!(fetched.exercises[0].sets.len(), 2);
        assert_eq!(fetched.exercises[0].sets[0].reps, 10);
        assert_eq!(fetched.exercises[0].sets[1].weight, 65.0);

        let all = store.list_workouts().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].exercises[0].sets.len(), 2);
    }

    #[test]
    fn test_add_exercise_requires_existing_rows() {
        let (_temp, store) = seeded_store();
        let workout = store.create_workout("Pull Day").unwrap();

        let result = store.add_exercise_to_workout(workout.id, "no-such-exercise", None);
        assert!(matches!(result, Err(Error::ForeignKey(_))));

        let result = store.add_exercise_to_workout(9999, "squat", None);
        assert!(matches!(result, Err(Error::ForeignKey(_))));
    }

    #[test]
    fn test_delete_workout_cascades_and_tombstones() {
        let (_temp, store) = seeded_store();

        let workout = store.create_workout("Leg Day").unwrap();
        for exercise in ["squat", "pullups"] {
            let we = store
                .add_exercise_to_workout(workout.id, exercise, None)
                .unwrap();
            for _ in 0..3 {
                store.add_set_template(we.id, 5, 100.0).unwrap();
            }
        }

        store.delete_workout(workout.id).unwrap();

        assert_eq!(count(&store, "SELECT COUNT(*) FROM workout_exercises"), 0);
        assert_eq!(count(&store, "SELECT COUNT(*) FROM sets"), 0);
        // the workout row survives as a tombstone, hidden from reads
        assert_eq!(count(&store, "SELECT COUNT(*) FROM workouts"), 1);
        assert_eq!(
            count(
                &store,
                "SELECT COUNT(*) FROM workouts WHERE deleted_at IS NOT NULL"
            ),
            1
        );
        assert!(store.get_workout(workout.id).unwrap().is_none());
        assert!(store.list_workouts().unwrap().is_empty());

        // already deleted, so a second delete finds nothing
        assert!(matches!(
            store.delete_workout(workout.id),
            Err(Error::NotFound)
        ));
        assert!(matches!(store.delete_workout(9999), Err(Error::NotFound)));
    }

    #[test]
    fn test_remove_workout_exercise_cascades_sets() {
        let (_temp, store) = seeded_store();

        let workout = store.create_workout("Push Day").unwrap();
        let we = store
            .add_exercise_to_workout(workout.id, "bench-press", None)
            .unwrap();
        store.add_set_template(we.id, 10, 60.0).unwrap();

        store.remove_workout_exercise(we.id).unwrap();
        assert_eq!(count(&store, "SELECT COUNT(*) FROM sets"), 0);
        assert!(store.get_workout(workout.id).unwrap().unwrap().exercises.is_empty());

        assert!(matches!(
            store.remove_workout_exercise(we.id),
            Err(Error::NotFound)
        ));
    }

    #[test]
    fn test_update_set_template() {
        let (_temp, store) = seeded_store();

        let workout = store.create_workout("Push Day").unwrap();
        let we = store
            .add_exercise_to_workout(workout.id, "bench-press", None)
            .unwrap();
        let set = store.add_set_template(we.id, 10, 60.0).unwrap();

        store.update_set_template(set.id, 12, 62.5).unwrap();
        let sets = store.list_sets_for_workout_exercise(we.id).unwrap();
        assert_eq!(sets[0].reps, 12);
        assert_eq!(sets[0].weight, 62.5);

        assert!(matches!(
            store.update_set_template(9999, 1, 1.0),
            Err(Error::NotFound)
        ));
    }

    #[test]
    fn test_replace_sets() {
        let (_temp, store) = seeded_store();

        let workout = store.create_workout("Push Day").unwrap();
        let we = store
            .add_exercise_to_workout(workout.id, "bench-press", Some("heavy"))
            .unwrap();
        store.add_set_template(we.id, 10, 60.0).unwrap();
        store.add_set_template(we.id, 8, 65.0).unwrap();

        store
            .replace_sets(we.id, &[SetInput { reps: 5, weight: 70.0 }])
            .unwrap();

        let sets = store.list_sets_for_workout_exercise(we.id).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].reps, 5);
        assert_eq!(sets[0].weight, 70.0);

        // replacing with nothing empties the list without error
        store.replace_sets(we.id, &[]).unwrap();
        assert!(store.list_sets_for_workout_exercise(we.id).unwrap().is_empty());
    }

    #[test]
    fn test_replace_sets_rolls_back_whole_batch() {
        let (_temp, store) = seeded_store();

        let workout = store.create_workout("Push Day").unwrap();
        let we = store
            .add_exercise_to_workout(workout.id, "bench-press", None)
            .unwrap();
        store.add_set_template(we.id, 10, 60.0).unwrap();

        // a dangling parent id fails the insert step and aborts the protocol
        let result = store.replace_sets(9999, &[SetInput { reps: 5, weight: 70.0 }]);
        assert!(matches!(result, Err(Error::TransactionAborted(_))));

        let sets = store.list_sets_for_workout_exercise(we.id).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].reps, 10);
    }

    #[test]
    fn test_log_session_filters_zero_reps() {
        let (_temp, store) = seeded_store();

        let entry = |set_no: i32, reps: i32| NewPerformedSet {
            workout_id: 1,
            exercise_id: "bench-press".to_string(),
            performed_date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
            set_no,
            reps,
            weight: 60.0,
        };

        store
            .log_session(&[entry(1, 5), entry(2, 0), entry(3, 3)])
            .unwrap();

        let logged = store.list_performed_sets().unwrap();
        assert_eq!(logged.len(), 2);
        assert_eq!(logged[0].reps, 5);
        assert_eq!(logged[1].reps, 3);
    }

    #[test]
    fn test_log_set_skips_zero_reps() {
        let (_temp, store) = seeded_store();

        let declined = NewPerformedSet {
            workout_id: 1,
            exercise_id: "squat".to_string(),
            performed_date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
            set_no: 1,
            reps: 0,
            weight: 100.0,
        };
        store.log_set(&declined).unwrap();
        assert!(store.list_performed_sets().unwrap().is_empty());

        store
            .log_set(&NewPerformedSet {
                reps: 5,
                ..declined
            })
            .unwrap();
        assert_eq!(store.list_performed_sets().unwrap().len(), 1);
    }

    #[test]
    fn test_history_survives_plan_deletion() {
        let (_temp, store) = seeded_store();

        let workout = store.create_workout("Push Day").unwrap();
        let we = store
            .add_exercise_to_workout(workout.id, "bench-press", None)
            .unwrap();
        store.add_set_template(we.id, 10, 60.0).unwrap();

        store
            .log_set(&NewPerformedSet {
                workout_id: workout.id,
                exercise_id: "bench-press".to_string(),
                performed_date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
                set_no: 1,
                reps: 10,
                weight: 60.0,
            })
            .unwrap();

        store.delete_workout(workout.id).unwrap();

        let logged = store.list_performed_sets().unwrap();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].workout_id, workout.id);
        assert_eq!(logged[0].exercise_id, "bench-press");
    }

    #[test]
    fn test_weekly_volume() {
        let (_temp, store) = seeded_store();

        let entry = |date: NaiveDate, set_no: i32, exercise: &str| NewPerformedSet {
            workout_id: 1,
            exercise_id: exercise.to_string(),
            performed_date: date,
            set_no,
            reps: 8,
            weight: 0.0,
        };

        let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let wednesday = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        let next_monday = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();

        store
            .log_session(&[
                entry(monday, 1, "pullups"),
                entry(monday, 2, "pullups"),
                entry(wednesday, 1, "pullups"),
                entry(next_monday, 1, "pullups"),
                entry(monday, 1, "squat"),
            ])
            .unwrap();

        let volume = store.weekly_volume("pullups").unwrap();
        assert_eq!(volume.len(), 2);
        assert_eq!(volume[0].set_count, 3);
        assert_eq!(volume[1].set_count, 1);
        assert!(volume.iter().all(|v| v.exercise_id == "pullups"));
    }
}
