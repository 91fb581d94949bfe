use chrono::NaiveDateTime;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{timestamp, FromSqliteRow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub user_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
}

impl FromSqliteRow for Workout {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            start_time: row.get("start_time")?,
            end_time: row.get("end_time")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_id: i64,
    pub set_number: i32,
    pub weight: f64,
    pub reps: i32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl WorkoutSet {
    /// Single-set volume, weight × reps.
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

impl FromSqliteRow for WorkoutSet {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            workout_id: row.get("workout_id")?,
            exercise_id: row.get("exercise_id")?,
            set_number: row.get("set_number")?,
            weight: row.get("weight")?,
            reps: row.get("reps")?,
            start_time: row.get("start_time")?,
            end_time: row.get("end_time")?,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkoutSet {
    pub exercise_id: i64,
    pub set_number: i32,
    pub weight: f64,
    pub reps: i32,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub start_time: NaiveDateTime,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub end_time: NaiveDateTime,
}

/// A finished session, submitted as one batch.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkout {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub start_time: NaiveDateTime,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub end_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub sets: Vec<CreateWorkoutSet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutWithSets {
    #[serde(flatten)]
    pub workout: Workout,
    pub sets: Vec<WorkoutSet>,
}
