use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// An exercise with no `owner_id` is part of the global catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub muscle_group: String,
    pub image_url: Option<String>,
    pub owner_id: Option<i64>,
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            muscle_group: row.get("muscle_group")?,
            image_url: row.get("image_url")?,
            owner_id: row.get("owner_id")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateExercise {
    pub name: String,
    pub muscle_group: String,
    #[serde(default)]
    pub image_url: Option<String>,
}
