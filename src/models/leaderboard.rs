// src/models/leaderboard.rs

use serde::{Deserialize, Serialize};

/// Derived leaderboard row: a user paired with their computed like total.
/// Recomputed from scratch on every query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: i64,
    pub username: String,
    pub followers: u32,
    pub following: u32,
    pub posts: u32,
    pub total_likes: u64,
}

/// Ranking metric. Total likes is the default; followers and posts mirror
/// the client's alternate sort buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Likes,
    Followers,
    Posts,
}

/// Query parameters for the leaderboard.
#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    pub sort: Option<SortKey>,
}
