// src/leaderboard.rs

//! Leaderboard ranking: per-user like totals aggregated across owned recipes,
//! ordered descending by the selected metric.
//!
//! Totals are recomputed from scratch on every call; nothing is cached. The
//! sort is stable, so tied users keep their relative input (registration)
//! order.

use crate::models::leaderboard::{LeaderboardEntry, SortKey};
use crate::models::recipe::Recipe;
use crate::models::user::User;

pub fn rank(users: &[User], recipes: &[Recipe], sort: SortKey) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = users
        .iter()
        .map(|user| LeaderboardEntry {
            id: user.id,
            username: user.username.clone(),
            followers: user.followers,
            following: user.following,
            posts: user.posts,
            total_likes: recipes
                .iter()
                .filter(|r| r.user_id == user.id)
                .map(|r| u64::from(r.likes))
                .sum(),
        })
        .collect();

    entries.sort_by(|a, b| metric(b, sort).cmp(&metric(a, sort)));
    entries
}

fn metric(entry: &LeaderboardEntry, sort: SortKey) -> u64 {
    match sort {
        SortKey::Likes => entry.total_likes,
        SortKey::Followers => u64::from(entry.followers),
        SortKey::Posts => u64::from(entry.posts),
    }
}
