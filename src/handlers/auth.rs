use axum::{extract::State, http::StatusCode, Json};

use crate::error::{AppError, Result};
use crate::models::{Credentials, LoginResponse, UserResponse};
use crate::repositories::{user_repo::DUPLICATE_USERNAME, UserRepository};

pub const INVALID_CREDENTIALS: &str = "Incorrect username or password";

#[derive(Clone)]
pub struct AuthState {
    pub user_repo: UserRepository,
}

pub async fn register(
    State(state): State<AuthState>,
    Json(form): Json<Credentials>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    if form.username.trim().is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }

    if state
        .user_repo
        .find_by_username(&form.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(DUPLICATE_USERNAME.to_string()));
    }

    let user = state
        .user_repo
        .create(&form.username, &form.password)
        .await?;

    tracing::info!(user_id = user.id, "Registered user");

    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn login(
    State(state): State<AuthState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LoginResponse>> {
    let user = state
        .user_repo
        .verify_password(&credentials.username, &credentials.password)
        .await?;

    match user {
        Some(user) => Ok(Json(LoginResponse::success(user))),
        None => {
            tracing::debug!(username = %credentials.username, "Rejected login");
            Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))
        }
    }
}
