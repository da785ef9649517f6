// src/models/user.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::recipe::Recipe;

/// A registered account. Counters are plain non-negative integers mutated
/// independently (publishing a recipe bumps `posts`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,

    /// Unique display handle.
    pub username: String,

    /// Unique login email.
    pub email: String,

    /// Argon2 password hash. The two seed accounts carry none.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password_hash: Option<String>,

    pub followers: u32,
    pub following: u32,
    pub posts: u32,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for registration.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username length must be between 3 and 50 characters."
    ))]
    pub username: String,

    #[validate(email(message = "A valid email address is required."))]
    pub email: String,

    #[validate(length(
        min = 4,
        max = 128,
        message = "Password length must be between 4 and 128 characters."
    ))]
    pub password: String,
}

/// DTO for login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email address is required."))]
    pub email: String,

    #[validate(length(max = 128))]
    #[serde(default)]
    pub password: String,
}

/// Profile view: the user record with their recipes embedded.
#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    #[serde(flatten)]
    pub user: User,
    pub recipes: Vec<Recipe>,
}
