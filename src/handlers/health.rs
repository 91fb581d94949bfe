use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::db::DbPool;
use crate::version::GIT_VERSION;

#[derive(Clone)]
pub struct HealthState {
    pub pool: DbPool,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    git_version: &'static str,
}

/// Liveness plus a `SELECT 1` round-trip through the pool.
pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let pool = state.pool.clone();
    let database_ok = tokio::task::spawn_blocking(move || database_reachable(&pool))
        .await
        .unwrap_or(false);

    let (status, code) = if database_ok {
        ("ok", StatusCode::OK)
    } else {
        tracing::warn!("Health check could not reach the database");
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    (
        code,
        Json(HealthResponse {
            status,
            database: if database_ok { "ok" } else { "unavailable" },
            git_version: GIT_VERSION,
        }),
    )
}

fn database_reachable(pool: &DbPool) -> bool {
    match pool.get() {
        Ok(conn) => {
            let ping: rusqlite::Result<i64> = conn.query_row("SELECT 1", [], |row| row.get(0));
            ping.is_ok()
        }
        Err(_) => false,
    }
}
