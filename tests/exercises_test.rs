mod common;

use axum::http::StatusCode;
use gym_tracker::seed;
use serde_json::{json, Value};

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_create_exercise_success() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let user = common::create_test_user(&pool, "alice", "password123").await;

    let (status, body) = common::post_json(
        &app,
        &format!("/exercises/{}", user.id),
        json!({
            "name": "Landmine Press",
            "muscle_group": "Shoulders",
            "image_url": "landmine_press.gif"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Landmine Press");
    assert_eq!(body["muscle_group"], "Shoulders");
    assert_eq!(body["image_url"], "landmine_press.gif");
    assert_eq!(body["owner_id"], user.id);
    assert!(body["id"].as_i64().is_some());
}

#[tokio::test]
async fn test_create_exercise_without_image() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let user = common::create_test_user(&pool, "alice", "password123").await;

    let (status, body) = common::post_json(
        &app,
        &format!("/exercises/{}", user.id),
        json!({ "name": "Sled Push", "muscle_group": "Legs" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["image_url"].is_null());
}

#[tokio::test]
async fn test_create_exercise_empty_name_rejected() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let user = common::create_test_user(&pool, "alice", "password123").await;

    let (status, body) = common::post_json(
        &app,
        &format!("/exercises/{}", user.id),
        json!({ "name": "  ", "muscle_group": "Legs" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Exercise name is required");
    assert_eq!(common::count_rows(&pool, "exercises"), 0);
}

#[tokio::test]
async fn test_create_exercise_for_unknown_user_not_found() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let (status, body) = common::post_json(
        &app,
        "/exercises/42",
        json!({ "name": "Sled Push", "muscle_group": "Legs" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "User not found");
    assert_eq!(common::count_rows(&pool, "exercises"), 0);
}

#[tokio::test]
async fn test_list_returns_own_and_global_only() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let alice = common::create_test_user(&pool, "alice", "password123").await;
    let bob = common::create_test_user(&pool, "bob", "password123").await;

    let global = common::create_global_exercise(&pool, "Leg Press", "Legs");
    let mine = common::create_test_exercise(&pool, alice.id, "Cossack Squat", "Legs").await;
    let theirs = common::create_test_exercise(&pool, bob.id, "Zercher Squat", "Legs").await;

    let (status, body) = common::get_json(&app, &format!("/exercises/{}", alice.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![global, mine.id]);
    assert!(!ids(&body).contains(&theirs.id));

    let (_, body) = common::get_json(&app, &format!("/exercises/{}", bob.id)).await;
    assert_eq!(ids(&body), vec![global, theirs.id]);
}

#[tokio::test]
async fn test_list_never_leaks_other_users_exercises() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    seed::seed_global_exercises(&pool).unwrap();

    let mut users = Vec::new();
    for name in ["alice", "bob", "carol"] {
        let user = common::create_test_user(&pool, name, "password123").await;
        common::create_test_exercise(&pool, user.id, &format!("{name}'s curl"), "Biceps").await;
        common::create_test_exercise(&pool, user.id, &format!("{name}'s row"), "Back").await;
        users.push(user);
    }

    for user in &users {
        let (_, body) = common::get_json(&app, &format!("/exercises/{}", user.id)).await;
        let exercises = body.as_array().unwrap();

        assert_eq!(exercises.len(), seed::CATALOG.len() + 2);
        for exercise in exercises {
            let owner = &exercise["owner_id"];
            assert!(
                owner.is_null() || *owner == json!(user.id),
                "user {} saw {exercise}",
                user.id
            );
        }
    }
}

#[tokio::test]
async fn test_list_is_stable_across_calls() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    seed::seed_global_exercises(&pool).unwrap();
    let user = common::create_test_user(&pool, "alice", "password123").await;
    common::create_test_exercise(&pool, user.id, "Cossack Squat", "Legs").await;

    let uri = format!("/exercises/{}", user.id);
    let (_, first) = common::get_json(&app, &uri).await;
    let (_, second) = common::get_json(&app, &uri).await;

    assert_eq!(first, second);
    let listed = ids(&first);
    let mut sorted = listed.clone();
    sorted.sort_unstable();
    assert_eq!(listed, sorted);
}

#[tokio::test]
async fn test_list_for_unknown_user_returns_global_catalog() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    seed::seed_global_exercises(&pool).unwrap();

    let (status, body) = common::get_json(&app, "/exercises/999").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), seed::CATALOG.len());
}

#[tokio::test]
async fn test_non_numeric_user_id_rejected() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let (status, _) = common::get_json(&app, "/exercises/alice").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
