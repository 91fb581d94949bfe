use chrono::NaiveDateTime;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{timestamp, FromSqliteRow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMetric {
    pub id: i64,
    pub user_id: i64,
    pub body_weight: f64,
    pub date: NaiveDateTime,
}

impl FromSqliteRow for BodyMetric {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            body_weight: row.get("body_weight")?,
            date: row.get("date")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBodyMetric {
    pub body_weight: f64,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub date: Option<NaiveDateTime>,
}
