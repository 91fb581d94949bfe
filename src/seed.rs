//! Global exercise catalog.
//!
//! Seeding is all-or-nothing: if any global exercise already exists the
//! routine does nothing, so it is safe to run on every startup.

use rusqlite::TransactionBehavior;

use crate::db::DbPool;
use crate::error::Result;
use crate::repositories::exercise_repo::count_global;

pub struct CatalogEntry {
    pub name: &'static str,
    pub muscle_group: &'static str,
}

const fn entry(name: &'static str, muscle_group: &'static str) -> CatalogEntry {
    CatalogEntry { name, muscle_group }
}

/// Six-day split library.
pub const CATALOG: &[CatalogEntry] = &[
    entry("Flat Barbell Bench Press", "Chest"),
    entry("Incline Barbell Bench Press", "Chest"),
    entry("Decline Barbell Bench Press", "Chest"),
    entry("Flat Dumbbell Bench Press", "Chest"),
    entry("Incline Dumbbell Bench Press", "Chest"),
    entry("Pec Deck Fly", "Chest"),
    entry("Cable Crossover", "Chest"),
    entry("Incline Machine Chest Press", "Chest"),
    entry("Dips", "Chest"),
    entry("Barbell Deadlift", "Back"),
    entry("Dumbbell Pullover", "Back"),
    entry("Straight-Arm Cable Pulldown", "Back"),
    entry("Wide-Grip Lat Pulldown", "Back"),
    entry("Close-Grip Lat Pulldown", "Back"),
    entry("Seated Cable Row", "Back"),
    entry("Machine Seated Row", "Back"),
    entry("Pull-ups", "Back"),
    entry("Barbell Bent-Over Row", "Back"),
    entry("Tricep Rope Pushdown", "Triceps"),
    entry("V-Bar Tricep Pushdown", "Triceps"),
    entry("EZ-Bar Skullcrusher", "Triceps"),
    entry("Dumbbell Overhead Tricep Extension", "Triceps"),
    entry("Cable Overhead Tricep Extension", "Triceps"),
    entry("Barbell Bicep Curl", "Biceps"),
    entry("Dumbbell Hammer Curl", "Biceps"),
    entry("Cable Rope Hammer Curl", "Biceps"),
    entry("Dumbbell Concentration Curl", "Biceps"),
    entry("EZ-Bar Preacher Curl", "Biceps"),
    entry("Incline Dumbbell Curl", "Biceps"),
    entry("Smith Machine Overhead Press", "Shoulders"),
    entry("Seated Dumbbell Overhead Press", "Shoulders"),
    entry("Dumbbell Front Raise", "Shoulders"),
    entry("Dumbbell Lateral Raise", "Shoulders"),
    entry("Reverse Pec Deck Fly", "Shoulders"),
    entry("Smith Machine Behind-the-Neck Press", "Shoulders"),
    entry("Cable Lateral Raise", "Shoulders"),
    entry("Barbell Shrugs", "Shoulders"),
    entry("Bodyweight Squat", "Legs"),
    entry("Barbell Back Squat", "Legs"),
    entry("Leg Extension", "Legs"),
    entry("Seated Leg Curl", "Legs"),
    entry("Leg Press", "Legs"),
    entry("Walking Lunges", "Legs"),
    entry("Romanian Deadlift RDL", "Legs"),
    entry("Standing Calf Raises", "Legs"),
    entry("Cable Crunch", "Abs"),
    entry("Hanging Leg Raise", "Abs"),
    entry("Dumbbell Wrist Curl", "Forearms"),
    entry("Reverse Barbell Curl", "Forearms"),
];

/// `"Romanian Deadlift (RDL)"` -> `"romanian_deadlift_rdl.svg"`
pub fn image_filename(name: &str) -> String {
    let stem: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .map(|c| if matches!(c, ' ' | '-') { '_' } else { c })
        .collect();
    format!("{stem}.svg")
}

/// Insert the catalog as global exercises unless any global exercise exists.
///
/// Returns the number of rows inserted.
pub fn seed_global_exercises(pool: &DbPool) -> Result<usize> {
    let mut conn = pool.get()?;
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let existing = count_global(&tx)?;

    if existing > 0 {
        tracing::info!(existing, "Global exercises already present, skipping seed");
        return Ok(0);
    }

    {
        let mut stmt = tx.prepare(
            "INSERT INTO exercises (name, muscle_group, image_url, owner_id)
             VALUES (?, ?, ?, NULL)",
        )?;
        for exercise in CATALOG {
            stmt.execute(rusqlite::params![
                exercise.name,
                exercise.muscle_group,
                image_filename(exercise.name)
            ])?;
        }
    }

    tx.commit()?;

    tracing::info!(inserted = CATALOG.len(), "Seeded global exercises");
    Ok(CATALOG.len())
}
