// src/handlers/leaderboard.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::{
    error::AppError, leaderboard, models::leaderboard::LeaderboardParams, store::Db,
};

/// Users ranked by aggregate recipe likes (or an alternate metric via
/// `?sort=followers|posts`), recomputed from the current snapshot.
pub async fn get_leaderboard(
    State(db): State<Db>,
    Query(params): Query<LeaderboardParams>,
) -> Result<impl IntoResponse, AppError> {
    let store = db.read()?;
    let ranked = leaderboard::rank(
        store.users(),
        store.recipes(),
        params.sort.unwrap_or_default(),
    );

    Ok(Json(ranked))
}
