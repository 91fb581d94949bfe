use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{AppError, Result};
use crate::models::{CreateExercise, Exercise};
use crate::repositories::ExerciseRepository;

#[derive(Clone)]
pub struct ExercisesState {
    pub exercise_repo: ExerciseRepository,
}

pub async fn list(
    State(state): State<ExercisesState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Exercise>>> {
    let exercises = state.exercise_repo.find_visible_for_user(user_id).await?;
    Ok(Json(exercises))
}

pub async fn create(
    State(state): State<ExercisesState>,
    Path(user_id): Path<i64>,
    Json(form): Json<CreateExercise>,
) -> Result<Json<Exercise>> {
    if form.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Exercise name is required".to_string(),
        ));
    }

    let exercise = state.exercise_repo.create(user_id, form).await?;
    Ok(Json(exercise))
}
