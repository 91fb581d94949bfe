use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::{BodyMetric, CreateBodyMetric};
use crate::repositories::MetricRepository;

#[derive(Clone)]
pub struct MetricsState {
    pub metric_repo: MetricRepository,
}

pub async fn list(
    State(state): State<MetricsState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<BodyMetric>>> {
    let metrics = state.metric_repo.find_by_user(user_id).await?;
    Ok(Json(metrics))
}

pub async fn create(
    State(state): State<MetricsState>,
    Path(user_id): Path<i64>,
    Json(form): Json<CreateBodyMetric>,
) -> Result<Json<BodyMetric>> {
    let metric = state.metric_repo.create(user_id, form).await?;
    Ok(Json(metric))
}
