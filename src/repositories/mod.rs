pub mod exercise_repo;
pub mod metric_repo;
pub mod user_repo;
pub mod workout_repo;

pub use exercise_repo::ExerciseRepository;
pub use metric_repo::MetricRepository;
pub use user_repo::UserRepository;
pub use workout_repo::WorkoutRepository;

use rusqlite::Connection;

use crate::error::{AppError, Result};

/// Fail with `NotFound` unless `user_id` names an existing user.
///
/// Takes a bare connection so it can run inside a caller's transaction.
pub(crate) fn ensure_user_exists(conn: &Connection, user_id: i64) -> Result<()> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)",
        [user_id],
        |row| row.get(0),
    )?;

    if exists {
        Ok(())
    } else {
        Err(AppError::NotFound("User not found".to_string()))
    }
}
