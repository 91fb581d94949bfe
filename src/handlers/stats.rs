use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::repositories::WorkoutRepository;
use crate::stats::{self, PersonalRecords, StatsSummary};

#[derive(Clone)]
pub struct StatsState {
    pub workout_repo: WorkoutRepository,
}

pub async fn personal_records(
    State(state): State<StatsState>,
    Path((user_id, exercise_id)): Path<(i64, i64)>,
) -> Result<Json<PersonalRecords>> {
    let sets = state
        .workout_repo
        .find_sets_by_user_and_exercise(user_id, exercise_id)
        .await?;

    Ok(Json(stats::personal_records(&sets)))
}

pub async fn summary(
    State(state): State<StatsState>,
    Path(user_id): Path<i64>,
) -> Result<Json<StatsSummary>> {
    let sets = state.workout_repo.find_sets_by_user(user_id).await?;
    let starts: Vec<_> = state
        .workout_repo
        .find_by_user(user_id)
        .await?
        .into_iter()
        .map(|workout| workout.start_time)
        .collect();

    Ok(Json(stats::summarize(&sets, &starts)))
}
