// src/handlers/recipe.rs

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    feed,
    models::recipe::{CreateRecipeRequest, FeedParams, RecipeResponse},
    store::{Db, NewRecipe},
    utils::{html::clean_text, jwt::viewer_from_headers},
};

/// List the feed: every recipe joined with its owning user.
///
/// Optional `?q=` and `?tag=` apply the feed filter server-side. When the
/// request carries a bearer token, the viewer's interaction flags are
/// materialized onto each item; anonymous requests get all-false flags.
pub async fn list_recipes(
    State(db): State<Db>,
    State(config): State<Config>,
    headers: HeaderMap,
    Query(params): Query<FeedParams>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = viewer_from_headers(&headers, &config.jwt_secret);

    let store = db.read()?;
    let filtered = feed::filter_recipes(
        store.recipes(),
        params.q.as_deref(),
        params.tag.as_deref(),
    );

    let items: Vec<RecipeResponse> = filtered
        .into_iter()
        .map(|recipe| {
            let user = store.user(recipe.user_id).cloned();
            let flags = viewer
                .map(|v| store.interaction(v, recipe.id))
                .unwrap_or_default();
            RecipeResponse::new(recipe, user, flags)
        })
        .collect();

    Ok(Json(items))
}

/// Publish a recipe. Increments the owner's post count as a side effect.
pub async fn create_recipe(
    State(db): State<Db>,
    Json(payload): Json<CreateRecipeRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let mut store = db.write()?;

    if store.user(payload.user_id).is_none() {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    let recipe = store.insert_recipe(NewRecipe {
        user_id: payload.user_id,
        title: clean_text(&payload.title),
        description: clean_text(&payload.description),
        caption: payload.caption.as_deref().map(clean_text),
        full_recipe: payload.full_recipe.as_deref().map(clean_text),
        image: payload.image,
        tags: payload.tags,
    });

    if let Some(owner) = store.user_mut(payload.user_id) {
        owner.posts += 1;
    }

    tracing::info!("Recipe {} published by user {}", recipe.id, recipe.user_id);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "recipe": recipe,
        })),
    ))
}
