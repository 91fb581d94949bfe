use chrono::Local;

use super::ensure_user_exists;
use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{BodyMetric, CreateBodyMetric, FromSqliteRow};

#[derive(Clone)]
pub struct MetricRepository {
    pool: DbPool,
}

impl MetricRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Log a body-weight reading; `date` defaults to now.
    pub async fn create(&self, user_id: i64, input: CreateBodyMetric) -> Result<BodyMetric> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            ensure_user_exists(&conn, user_id)?;

            let date = input.date.unwrap_or_else(|| Local::now().naive_local());
            conn.execute(
                "INSERT INTO body_metrics (user_id, date, body_weight) VALUES (?, ?, ?)",
                rusqlite::params![user_id, date, input.body_weight],
            )?;

            Ok(BodyMetric {
                id: conn.last_insert_rowid(),
                user_id,
                body_weight: input.body_weight,
                date,
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<BodyMetric>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt =
                conn.prepare("SELECT * FROM body_metrics WHERE user_id = ? ORDER BY date, id")?;
            let metrics = stmt
                .query_map([user_id], BodyMetric::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(metrics)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
