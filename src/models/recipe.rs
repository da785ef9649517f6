// src/models/recipe.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::User;
use crate::store::Interaction;

/// A published recipe. Holds only shared state: per-viewer flags live in the
/// interaction map and are materialized into `RecipeResponse` per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,

    /// Owning user, by id. A relation, not ownership: no referential
    /// integrity is enforced against the user set.
    pub user_id: i64,

    pub title: String,
    pub description: String,
    pub caption: Option<String>,

    /// Long-form instructions.
    pub full_recipe: Option<String>,

    /// Image URI.
    pub image: String,

    pub likes: u32,
    pub comments: u32,
    pub tried_count: u32,

    pub tags: Vec<String>,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for publishing a recipe. The client sends the author id in the body;
/// this endpoint predates the token-carrying engagement routes.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Title length must be between 1 and 100 chars"
    ))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 2000,
        message = "Description length must be between 1 and 2000 chars"
    ))]
    pub description: String,

    #[validate(length(min = 1, max = 500))]
    pub image: String,

    pub user_id: i64,

    #[validate(length(max = 500))]
    pub caption: Option<String>,

    #[validate(length(max = 10000))]
    pub full_recipe: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// Query parameters for the feed: free-text search and a single tag filter.
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    pub q: Option<String>,
    pub tag: Option<String>,
}

/// Feed item: the recipe joined with its owner, plus the requesting viewer's
/// interaction flags (all false for anonymous requests).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    #[serde(flatten)]
    pub recipe: Recipe,

    pub user: Option<User>,

    pub is_liked: bool,
    pub is_saved: bool,
    pub is_tried: bool,
}

impl RecipeResponse {
    pub fn new(recipe: Recipe, user: Option<User>, flags: Interaction) -> Self {
        Self {
            recipe,
            user,
            is_liked: flags.liked,
            is_saved: flags.saved,
            is_tried: flags.tried,
        }
    }
}
