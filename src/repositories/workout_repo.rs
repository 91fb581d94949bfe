use chrono::Local;
use rusqlite::{Connection, TransactionBehavior};

use super::ensure_user_exists;
use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{CreateWorkout, FromSqliteRow, Workout, WorkoutSet, WorkoutWithSets};

#[derive(Clone)]
pub struct WorkoutRepository {
    pool: DbPool,
}

impl WorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Persist a finished workout and all of its sets in one transaction.
    ///
    /// The user and every referenced exercise are checked inside the
    /// transaction; any failure drops it uncommitted, so neither the workout
    /// nor any of its sets remain. The write lock is taken up front so
    /// concurrent finishes queue on the busy timeout instead of failing.
    pub async fn finish(&self, user_id: i64, input: CreateWorkout) -> Result<WorkoutWithSets> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

            ensure_user_exists(&tx, user_id)?;

            let end_time = input
                .end_time
                .unwrap_or_else(|| Local::now().naive_local());

            tx.execute(
                "INSERT INTO workouts (user_id, start_time, end_time) VALUES (?, ?, ?)",
                rusqlite::params![user_id, input.start_time, end_time],
            )?;
            let workout = Workout {
                id: tx.last_insert_rowid(),
                user_id,
                start_time: input.start_time,
                end_time: Some(end_time),
            };

            let mut sets = Vec::with_capacity(input.sets.len());
            for set in input.sets {
                ensure_exercise_visible(&tx, set.exercise_id, user_id)?;

                tx.execute(
                    "INSERT INTO workout_sets
                     (workout_id, exercise_id, set_number, weight, reps, start_time, end_time)
                     VALUES (?, ?, ?, ?, ?, ?, ?)",
                    rusqlite::params![
                        workout.id,
                        set.exercise_id,
                        set.set_number,
                        set.weight,
                        set.reps,
                        set.start_time,
                        set.end_time
                    ],
                )?;

                sets.push(WorkoutSet {
                    id: tx.last_insert_rowid(),
                    workout_id: workout.id,
                    exercise_id: set.exercise_id,
                    set_number: set.set_number,
                    weight: set.weight,
                    reps: set.reps,
                    start_time: set.start_time,
                    end_time: set.end_time,
                });
            }

            tx.commit()?;

            tracing::debug!(
                workout_id = workout.id,
                user_id,
                sets = sets.len(),
                "Workout finished"
            );

            Ok(WorkoutWithSets { workout, sets })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Every workout the user has logged, oldest first.
    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<Workout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt =
                conn.prepare("SELECT * FROM workouts WHERE user_id = ? ORDER BY start_time, id")?;
            let workouts = stmt
                .query_map([user_id], Workout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(workouts)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Every set across all of the user's workouts.
    pub async fn find_sets_by_user(&self, user_id: i64) -> Result<Vec<WorkoutSet>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT ws.* FROM workout_sets ws
                 JOIN workouts w ON ws.workout_id = w.id
                 WHERE w.user_id = ?
                 ORDER BY ws.id",
            )?;
            let sets = stmt
                .query_map([user_id], WorkoutSet::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(sets)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Every set of one exercise across the user's workouts.
    pub async fn find_sets_by_user_and_exercise(
        &self,
        user_id: i64,
        exercise_id: i64,
    ) -> Result<Vec<WorkoutSet>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT ws.* FROM workout_sets ws
                 JOIN workouts w ON ws.workout_id = w.id
                 WHERE w.user_id = ? AND ws.exercise_id = ?
                 ORDER BY ws.set_number, ws.id",
            )?;
            let sets = stmt
                .query_map([user_id, exercise_id], WorkoutSet::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(sets)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

fn ensure_exercise_visible(conn: &Connection, exercise_id: i64, user_id: i64) -> Result<()> {
    let visible: bool = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM exercises
            WHERE id = ? AND (owner_id = ? OR owner_id IS NULL)
        )",
        [exercise_id, user_id],
        |row| row.get(0),
    )?;

    if visible {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("Exercise {exercise_id} not found")))
    }
}
