// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::user::{LoginRequest, RegisterRequest},
    store::Db,
    utils::{
        hash::{hash_password, verify_password},
        jwt::sign_jwt,
    },
};

/// Registers a new user.
///
/// Hashes the password using Argon2 before storing it.
/// Returns 201 Created with the user object (excluding the hash) and a token.
pub async fn register(
    State(db): State<Db>,
    State(config): State<Config>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let hashed_password = hash_password(&payload.password)?;

    let user = {
        let mut store = db.write()?;

        if store.user_by_email(&payload.email).is_some() {
            return Err(AppError::Conflict(format!(
                "Email '{}' is already registered",
                payload.email
            )));
        }
        if store.user_by_username(&payload.username).is_some() {
            return Err(AppError::Conflict(format!(
                "Username '{}' already exists",
                payload.username
            )));
        }

        store.insert_user(&payload.username, &payload.email, Some(hashed_password))
    };

    tracing::info!("Registered user '{}' (id {})", user.username, user.id);

    let token = sign_jwt(user.id, &config.jwt_secret, config.jwt_expiration)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "user": user,
            "token": token,
        })),
    ))
}

/// Authenticates a user and returns a JWT token.
///
/// Resolves the account by email; an unknown email is a 401. Accounts with a
/// stored hash (everyone who registered through the API) must also present
/// the matching password. The seed accounts carry no hash and resolve by
/// email alone, keeping the demo flows working.
pub async fn login(
    State(db): State<Db>,
    State(config): State<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let user = {
        let store = db.read()?;
        store
            .user_by_email(&payload.email)
            .cloned()
            .ok_or(AppError::AuthError("User not found".to_string()))?
    };

    if let Some(hash) = &user.password_hash {
        if !verify_password(&payload.password, hash)? {
            return Err(AppError::AuthError("Invalid password".to_string()));
        }
    }

    let token = sign_jwt(user.id, &config.jwt_secret, config.jwt_expiration)?;

    Ok(Json(json!({
        "success": true,
        "user": user,
        "token": token,
    })))
}
