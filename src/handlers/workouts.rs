use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::{CreateWorkout, WorkoutWithSets};
use crate::repositories::WorkoutRepository;

#[derive(Clone)]
pub struct WorkoutsState {
    pub workout_repo: WorkoutRepository,
}

/// Save a completed session with all of its sets.
pub async fn finish(
    State(state): State<WorkoutsState>,
    Path(user_id): Path<i64>,
    Json(form): Json<CreateWorkout>,
) -> Result<Json<WorkoutWithSets>> {
    let workout = state.workout_repo.finish(user_id, form).await?;
    Ok(Json(workout))
}
