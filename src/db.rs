use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Foreign keys are off by default in SQLite and must be enabled per connection.
fn with_foreign_keys(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

pub fn create_pool(database_url: &str) -> Result<DbPool, r2d2::Error> {
    let path = database_url.strip_prefix("sqlite:").unwrap_or(database_url);
    // Remove query parameters (e.g., ?mode=rwc)
    let path = path.split('?').next().unwrap_or(path);

    if path == ":memory:" {
        return create_memory_pool();
    }

    let manager = with_foreign_keys(SqliteConnectionManager::file(Path::new(path)));
    Pool::builder().max_size(5).build(manager)
}

/// Every in-memory connection is its own database, so the pool holds exactly one.
pub fn create_memory_pool() -> Result<DbPool, r2d2::Error> {
    let manager = with_foreign_keys(SqliteConnectionManager::memory());
    Pool::builder().max_size(1).build(manager)
}
