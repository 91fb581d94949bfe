use rusqlite::Row;

/// Maps a `SELECT *`-style row onto a model by column name.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}
