use std::path::PathBuf;

use anyhow::bail;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use liftlog::store::{self, Store};
use liftlog::types::{NewPerformedSet, SetInput, Workout};

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "A workout planner and training log", long_about = None)]
struct Cli {
    /// Path to the training database (defaults to ~/Documents/training.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the exercise catalog
    Exercises,

    /// Workout plan commands
    Workout {
        #[command(subcommand)]
        command: WorkoutCommands,
    },

    /// Log one performed set
    Log {
        /// Workout id the set belongs to
        #[arg(long)]
        workout: i64,

        /// Exercise slug (see `liftlog exercises`)
        #[arg(long)]
        exercise: String,

        /// Ordinal of the set within the session
        #[arg(long, default_value_t = 1)]
        set_no: i32,

        #[arg(long)]
        reps: i32,

        #[arg(long)]
        weight: f64,

        /// Calendar date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the performed-set history
    History,

    /// Weekly set volume for one exercise
    Volume { exercise: String },
}

#[derive(Subcommand)]
enum WorkoutCommands {
    /// List all workouts with their exercises and set templates
    List,

    /// Show a single workout
    Show { id: i64 },

    /// Create a workout
    Create { name: String },

    /// Delete a workout and its whole exercise subtree
    Delete { id: i64 },

    /// Add a catalog exercise to a workout
    AddExercise {
        id: i64,
        exercise: String,
        #[arg(long)]
        note: Option<String>,
    },

    /// Remove an exercise (and its set templates) from a workout
    RemoveExercise { workout_exercise: i64 },

    /// Replace all set templates of a workout exercise, e.g. `5x100 5x102.5`
    SetTemplates {
        workout_exercise: i64,
        sets: Vec<String>,
    },
}

fn default_db_path() -> anyhow::Result<PathBuf> {
    match dirs::home_dir() {
        Some(home) => Ok(home.join("Documents").join("training.db")),
        None => bail!("cannot determine home directory; pass --db"),
    }
}

/// Parses a `REPSxWEIGHT` pair like `5x100` or `8x62.5`.
fn parse_set_input(s: &str) -> anyhow::Result<SetInput> {
    let Some((reps, weight)) = s.split_once(['x', 'X']) else {
        bail!("invalid set '{s}', expected REPSxWEIGHT (e.g. 5x100)");
    };
    Ok(SetInput {
        reps: reps.parse()?,
        weight: weight.parse()?,
    })
}

fn print_workout(workout: &Workout) {
    println!("#{} {}", workout.id, workout.name);
    for we in &workout.exercises {
        let note = we
            .note
            .as_deref()
            .map(|n| format!(" ({n})"))
            .unwrap_or_default();
        println!("  [{}] {}{}", we.id, we.exercise.name(), note);
        for set in &we.sets {
            println!("      {} x {:.1}", set.reps, set.weight);
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("liftlog=info".parse()?))
        .init();

    let cli = Cli::parse();

    let db_path = match cli.db {
        Some(path) => path,
        None => default_db_path()?,
    };
    let store = store::init(&db_path)?;

    match cli.command {
        Commands::Exercises => {
            for exercise in store.list_exercises()? {
                println!(
                    "{:<24} {:<24} {}",
                    exercise.id,
                    exercise.name(),
                    exercise.muscles().join(", ")
                );
            }
        }

        Commands::Workout { command } => match command {
            WorkoutCommands::List => {
                for workout in store.list_workouts()? {
                    print_workout(&workout);
                }
            }
            WorkoutCommands::Show { id } => match store.get_workout(id)? {
                Some(workout) => print_workout(&workout),
                None => bail!("no workout with id {id}"),
            },
            WorkoutCommands::Create { name } => {
                let workout = store.create_workout(&name)?;
                println!("created workout #{} {}", workout.id, workout.name);
            }
            WorkoutCommands::Delete { id } => {
                store.delete_workout(id)?;
                println!("deleted workout #{id}");
            }
            WorkoutCommands::AddExercise { id, exercise, note } => {
                let we = store.add_exercise_to_workout(id, &exercise, note.as_deref())?;
                println!("added {} to workout #{} as [{}]", exercise, id, we.id);
            }
            WorkoutCommands::RemoveExercise { workout_exercise } => {
                store.remove_workout_exercise(workout_exercise)?;
                println!("removed workout exercise [{workout_exercise}]");
            }
            WorkoutCommands::SetTemplates {
                workout_exercise,
                sets,
            } => {
                let new_sets = sets
                    .iter()
                    .map(|s| parse_set_input(s))
                    .collect::<anyhow::Result<Vec<_>>>()?;
                store.replace_sets(workout_exercise, &new_sets)?;
                println!(
                    "workout exercise [{}] now has {} set templates",
                    workout_exercise,
                    new_sets.len()
                );
            }
        },

        Commands::Log {
            workout,
            exercise,
            set_no,
            reps,
            weight,
            date,
        } => {
            store.log_set(&NewPerformedSet {
                workout_id: workout,
                exercise_id: exercise,
                performed_date: date.unwrap_or_else(|| Local::now().date_naive()),
                set_no,
                reps,
                weight,
            })?;
            if reps > 0 {
                println!("logged set {set_no}: {reps} x {weight:.1}");
            } else {
                println!("skipped set {set_no}: zero reps are not logged");
            }
        }

        Commands::History => {
            for set in store.list_performed_sets()? {
                println!(
                    "{} {:<24} set {} {:>3} x {:.1}",
                    set.performed_date, set.exercise_id, set.set_no, set.reps, set.weight
                );
            }
        }

        Commands::Volume { exercise } => {
            for row in store.weekly_volume(&exercise)? {
                println!("{} {:<24} {} sets", row.calendar_week, row.exercise_id, row.set_count);
            }
        }
    }

    Ok(())
}
