pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod migrations;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod stats;
pub mod version;

use db::DbPool;
use handlers::{auth, exercises, health, metrics, stats as stats_handlers, workouts};
use repositories::{ExerciseRepository, MetricRepository, UserRepository, WorkoutRepository};
use routes::AppStates;

/// Wire repositories into per-feature handler states.
pub fn build_states(pool: DbPool) -> AppStates {
    let user_repo = UserRepository::new(pool.clone());
    let exercise_repo = ExerciseRepository::new(pool.clone());
    let workout_repo = WorkoutRepository::new(pool.clone());
    let metric_repo = MetricRepository::new(pool.clone());

    AppStates {
        auth: auth::AuthState { user_repo },
        exercises: exercises::ExercisesState { exercise_repo },
        workouts: workouts::WorkoutsState {
            workout_repo: workout_repo.clone(),
        },
        stats: stats_handlers::StatsState { workout_repo },
        metrics: metrics::MetricsState { metric_repo },
        health: health::HealthState { pool },
    }
}
