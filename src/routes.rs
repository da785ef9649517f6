// src/routes.rs

use axum::{
    Router,
    http::Method,
    middleware,
    routing::{get, post},
};
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};

use crate::{
    handlers::{auth, interaction, leaderboard, recipe, user},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, recipes, users, leaderboard).
/// * Engagement routes (toggles, commenting) require a bearer token; the
///   per-viewer interaction state needs a viewer identity.
/// * Applies global middleware (Trace, CORS) and injects global state.
pub fn create_router(state: AppState) -> Router {
    // The mobile client ships no Origin header; web builds may come from
    // anywhere, so CORS stays open like the original demo backend.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let recipe_routes = Router::new()
        .route("/", get(recipe::list_recipes).post(recipe::create_recipe))
        .route("/{id}/comments", get(interaction::list_comments))
        // Protected engagement routes
        .merge(
            Router::new()
                .route("/{id}/like", post(interaction::toggle_like))
                .route("/{id}/save", post(interaction::toggle_save))
                .route("/{id}/tried", post(interaction::toggle_tried))
                .route("/{id}/comments", post(interaction::create_comment))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        );

    let user_routes = Router::new().route("/{id}", get(user::get_user));

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/recipes", recipe_routes)
        .nest("/api/users", user_routes)
        .route("/api/leaderboard", get(leaderboard::get_leaderboard))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
