/// First-run catalog: a basic set of barbell, dumbbell and bodyweight
/// movements. Slugs are stable identifiers; the JSON document carries the
/// display name and muscle groups.
pub const SEED_EXERCISES: &str = r#"
INSERT INTO exercises (id, data) VALUES
    ('bench-press', '{"name":"Bench Press","primaryMuscles":["chest"],"secondaryMuscles":["triceps","shoulders"]}'),
    ('incline-bench-press', '{"name":"Incline Bench Press","primaryMuscles":["chest"],"secondaryMuscles":["triceps","shoulders"]}'),
    ('overhead-press', '{"name":"Overhead Press","primaryMuscles":["shoulders"],"secondaryMuscles":["triceps"]}'),
    ('squat', '{"name":"Back Squat","primaryMuscles":["quadriceps"],"secondaryMuscles":["glutes","lower back"]}'),
    ('front-squat', '{"name":"Front Squat","primaryMuscles":["quadriceps"],"secondaryMuscles":["glutes","core"]}'),
    ('deadlift', '{"name":"Deadlift","primaryMuscles":["lower back"],"secondaryMuscles":["glutes","hamstrings","forearms"]}'),
    ('romanian-deadlift', '{"name":"Romanian Deadlift","primaryMuscles":["hamstrings"],"secondaryMuscles":["glutes","lower back"]}'),
    ('barbell-row', '{"name":"Barbell Row","primaryMuscles":["middle back"],"secondaryMuscles":["lats","biceps"]}'),
    ('pullups', '{"name":"Pullups","primaryMuscles":["lats"],"secondaryMuscles":["biceps","middle back"]}'),
    ('chinups', '{"name":"Chinups","primaryMuscles":["lats"],"secondaryMuscles":["biceps"]}'),
    ('dips', '{"name":"Dips","primaryMuscles":["triceps"],"secondaryMuscles":["chest","shoulders"]}'),
    ('pushups', '{"name":"Pushups","primaryMuscles":["chest"],"secondaryMuscles":["triceps","shoulders"]}'),
    ('lat-pulldown', '{"name":"Lat Pulldown","primaryMuscles":["lats"],"secondaryMuscles":["biceps"]}'),
    ('dumbbell-curl', '{"name":"Dumbbell Curl","primaryMuscles":["biceps"],"secondaryMuscles":["forearms"]}'),
    ('triceps-pushdown', '{"name":"Triceps Pushdown","primaryMuscles":["triceps"],"secondaryMuscles":[]}'),
    ('lateral-raise', '{"name":"Lateral Raise","primaryMuscles":["shoulders"],"secondaryMuscles":[]}'),
    ('leg-press', '{"name":"Leg Press","primaryMuscles":["quadriceps"],"secondaryMuscles":["glutes"]}'),
    ('leg-curl', '{"name":"Leg Curl","primaryMuscles":["hamstrings"],"secondaryMuscles":[]}'),
    ('calf-raise', '{"name":"Calf Raise","primaryMuscles":["calves"],"secondaryMuscles":[]}'),
    ('plank', '{"name":"Plank","primaryMuscles":["core"],"secondaryMuscles":["shoulders"]}');
"#;
