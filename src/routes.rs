use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::{auth, exercises, health, metrics, stats, workouts};

pub struct AppStates {
    pub auth: auth::AuthState,
    pub exercises: exercises::ExercisesState,
    pub workouts: workouts::WorkoutsState,
    pub stats: stats::StatsState,
    pub metrics: metrics::MetricsState,
    pub health: health::HealthState,
}

/// JSON API routes, with the front-end served from `static_dir` for any
/// path that no route claims.
pub fn create_router(states: AppStates, static_dir: &Path) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        .with_state(states.health)
        // Auth routes
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .with_state(states.auth)
        // Exercise routes
        .route(
            "/exercises/{user_id}",
            get(exercises::list).post(exercises::create),
        )
        .with_state(states.exercises)
        // Workout routes
        .route("/workouts/{user_id}", post(workouts::finish))
        .with_state(states.workouts)
        // Stats routes
        .route("/prs/{user_id}/{exercise_id}", get(stats::personal_records))
        .route("/stats/{user_id}", get(stats::summary))
        .with_state(states.stats)
        // Body metric routes
        .route(
            "/metrics/{user_id}",
            get(metrics::list).post(metrics::create),
        )
        .with_state(states.metrics)
        // Static front-end
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}
