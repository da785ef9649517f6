// src/handlers/user.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::AppError, models::user::UserProfileResponse, store::Db};

/// Get a user's profile with their recipes embedded.
pub async fn get_user(
    State(db): State<Db>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let store = db.read()?;

    let user = store
        .user(user_id)
        .cloned()
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    let recipes = store.recipes_by_user(user_id);

    Ok(Json(UserProfileResponse { user, recipes }))
}
