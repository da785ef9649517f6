// src/handlers/interaction.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::comment::{CommentResponse, CreateCommentRequest},
    store::Db,
    utils::{html::clean_text, jwt::Claims},
};

/// Toggle Like on a recipe. Flips the viewer's flag and moves the like
/// counter in lockstep; returns the new total.
pub async fn toggle_like(
    State(db): State<Db>,
    Extension(claims): Extension<Claims>,
    Path(recipe_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = claims.user_id();

    let mut store = db.write()?;
    let (liked, likes) = store
        .toggle_like(viewer_id, recipe_id)
        .ok_or(AppError::NotFound("Recipe not found".to_string()))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "liked": liked,
        "likes": likes,
    })))
}

/// Toggle Save on a recipe. Flag only, no counter.
pub async fn toggle_save(
    State(db): State<Db>,
    Extension(claims): Extension<Claims>,
    Path(recipe_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = claims.user_id();

    let mut store = db.write()?;
    let saved = store
        .toggle_save(viewer_id, recipe_id)
        .ok_or(AppError::NotFound("Recipe not found".to_string()))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "saved": saved,
    })))
}

/// Toggle Tried on a recipe. Flips the viewer's flag and moves the tried
/// counter in lockstep.
pub async fn toggle_tried(
    State(db): State<Db>,
    Extension(claims): Extension<Claims>,
    Path(recipe_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = claims.user_id();

    let mut store = db.write()?;
    let (tried, tried_count) = store
        .toggle_tried(viewer_id, recipe_id)
        .ok_or(AppError::NotFound("Recipe not found".to_string()))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "tried": tried,
        "triedCount": tried_count,
    })))
}

/// Create a new comment. Bumps the recipe's comment counter.
pub async fn create_comment(
    State(db): State<Db>,
    Extension(claims): Extension<Claims>,
    Path(recipe_id): Path<i64>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let user_id = claims.user_id();

    let mut store = db.write()?;

    if store.recipe(recipe_id).is_none() {
        return Err(AppError::NotFound("Recipe not found".to_string()));
    }

    let comment = store.insert_comment(recipe_id, user_id, clean_text(&payload.content));

    if let Some(recipe) = store.recipe_mut(recipe_id) {
        recipe.comments += 1;
    }

    let username = store
        .user(user_id)
        .map(|u| u.username.clone())
        .unwrap_or_default();

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "comment": CommentResponse {
                id: comment.id,
                recipe_id: comment.recipe_id,
                user_id: comment.user_id,
                username,
                content: comment.content,
                created_at: comment.created_at,
            },
        })),
    ))
}

/// List all comments for a recipe, oldest first, with author usernames.
pub async fn list_comments(
    State(db): State<Db>,
    Path(recipe_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let store = db.read()?;

    if store.recipe(recipe_id).is_none() {
        return Err(AppError::NotFound("Recipe not found".to_string()));
    }

    let comments: Vec<CommentResponse> = store
        .comments_for(recipe_id)
        .into_iter()
        .map(|c| {
            let username = store
                .user(c.user_id)
                .map(|u| u.username.clone())
                .unwrap_or_default();
            CommentResponse {
                id: c.id,
                recipe_id: c.recipe_id,
                user_id: c.user_id,
                username,
                content: c.content,
                created_at: c.created_at,
            }
        })
        .collect();

    Ok(Json(comments))
}
