#![allow(dead_code)]

use std::path::Path;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use gym_tracker::db::{create_memory_pool, DbPool};
use gym_tracker::migrations::run_migrations_for_tests;
use gym_tracker::models::{CreateExercise, Exercise, User};
use gym_tracker::repositories::{ExerciseRepository, UserRepository};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    gym_tracker::routes::create_router(
        gym_tracker::build_states(pool),
        &Path::new(env!("CARGO_MANIFEST_DIR")).join("static"),
    )
}

pub async fn create_test_user(pool: &DbPool, username: &str, password: &str) -> User {
    let user_repo = UserRepository::new(pool.clone());
    user_repo.create(username, password).await.unwrap()
}

pub async fn create_test_exercise(
    pool: &DbPool,
    user_id: i64,
    name: &str,
    muscle_group: &str,
) -> Exercise {
    let exercise_repo = ExerciseRepository::new(pool.clone());
    exercise_repo
        .create(
            user_id,
            CreateExercise {
                name: name.to_string(),
                muscle_group: muscle_group.to_string(),
                image_url: None,
            },
        )
        .await
        .unwrap()
}

pub fn create_global_exercise(pool: &DbPool, name: &str, muscle_group: &str) -> i64 {
    let conn = pool.get().unwrap();
    conn.execute(
        "INSERT INTO exercises (name, muscle_group) VALUES (?, ?)",
        [name, muscle_group],
    )
    .unwrap();
    conn.last_insert_rowid()
}

pub fn count_rows(pool: &DbPool, table: &str) -> i64 {
    let conn = pool.get().unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .unwrap()
}

/// Send a request to a fresh clone of the router and decode the JSON body.
///
/// Non-JSON bodies come back as `Value::Null`.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}
