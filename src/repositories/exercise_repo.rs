use rusqlite::Connection;

use super::ensure_user_exists;
use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{CreateExercise, Exercise, FromSqliteRow};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

/// Number of exercises in the global catalog.
///
/// Takes a bare connection so seeding can call it inside its transaction.
pub(crate) fn count_global(conn: &Connection) -> Result<i64> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM exercises WHERE owner_id IS NULL",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The user's own exercises plus the global catalog, by id.
    pub async fn find_visible_for_user(&self, user_id: i64) -> Result<Vec<Exercise>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT * FROM exercises WHERE owner_id = ? OR owner_id IS NULL ORDER BY id",
            )?;
            let exercises = stmt
                .query_map([user_id], Exercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Create an exercise owned by `user_id`, which must exist.
    pub async fn create(&self, user_id: i64, input: CreateExercise) -> Result<Exercise> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            ensure_user_exists(&conn, user_id)?;

            conn.execute(
                "INSERT INTO exercises (name, muscle_group, image_url, owner_id)
                 VALUES (?, ?, ?, ?)",
                rusqlite::params![input.name, input.muscle_group, input.image_url, user_id],
            )?;

            Ok(Exercise {
                id: conn.last_insert_rowid(),
                name: input.name,
                muscle_group: input.muscle_group,
                image_url: input.image_url,
                owner_id: Some(user_id),
            })
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::migrations::run_migrations_for_tests;

    fn setup_test_db() -> DbPool {
        let pool = create_memory_pool().expect("Failed to create test database");
        run_migrations_for_tests(&pool).expect("Failed to run migrations");
        pool
    }

    fn create_test_user(pool: &DbPool, username: &str) -> i64 {
        let conn = pool.get().unwrap();
        conn.execute(
            "INSERT INTO users (username, password_hash) VALUES (?, ?)",
            rusqlite::params![username, "hash"],
        )
        .unwrap();
        conn.last_insert_rowid()
    }

    fn create_global_exercise(pool: &DbPool, name: &str) -> i64 {
        let conn = pool.get().unwrap();
        conn.execute(
            "INSERT INTO exercises (name, muscle_group) VALUES (?, 'Legs')",
            [name],
        )
        .unwrap();
        conn.last_insert_rowid()
    }

    fn input(name: &str, muscle_group: &str) -> CreateExercise {
        CreateExercise {
            name: name.to_string(),
            muscle_group: muscle_group.to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_exercise() {
        let pool = setup_test_db();
        let user_id = create_test_user(&pool, "user1");
        let repo = ExerciseRepository::new(pool);

        let exercise = repo
            .create(user_id, input("Bench Press", "Chest"))
            .await
            .unwrap();

        assert_eq!(exercise.name, "Bench Press");
        assert_eq!(exercise.muscle_group, "Chest");
        assert_eq!(exercise.owner_id, Some(user_id));
        assert!(exercise.id > 0);
    }

    #[tokio::test]
    async fn test_create_for_missing_user_is_not_found() {
        let repo = ExerciseRepository::new(setup_test_db());

        let err = repo
            .create(99, input("Bench Press", "Chest"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_find_visible_for_user() {
        let pool = setup_test_db();
        let user1 = create_test_user(&pool, "user1");
        let user2 = create_test_user(&pool, "user2");
        let global = create_global_exercise(&pool, "Leg Press");
        let repo = ExerciseRepository::new(pool);

        let own = repo
            .create(user1, input("Bench Press", "Chest"))
            .await
            .unwrap();
        let other = repo
            .create(user2, input("Deadlift", "Back"))
            .await
            .unwrap();

        let visible: Vec<i64> = repo
            .find_visible_for_user(user1)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();

        assert_eq!(visible, vec![global, own.id]);
        assert!(!visible.contains(&other.id));
    }

    #[tokio::test]
    async fn test_unknown_user_sees_only_global() {
        let pool = setup_test_db();
        let user1 = create_test_user(&pool, "user1");
        create_global_exercise(&pool, "Leg Press");
        let repo = ExerciseRepository::new(pool);
        repo.create(user1, input("Bench Press", "Chest"))
            .await
            .unwrap();

        let visible = repo.find_visible_for_user(404).await.unwrap();

        assert_eq!(visible.len(), 1);
        assert!(visible[0].owner_id.is_none());
    }

    #[tokio::test]
    async fn test_count_global_ignores_owned_exercises() {
        let pool = setup_test_db();
        let user1 = create_test_user(&pool, "user1");
        create_global_exercise(&pool, "Leg Press");
        create_global_exercise(&pool, "Leg Extension");
        let repo = ExerciseRepository::new(pool.clone());
        repo.create(user1, input("Bench Press", "Chest"))
            .await
            .unwrap();

        let conn = pool.get().unwrap();
        assert_eq!(count_global(&conn).unwrap(), 2);
    }
}
