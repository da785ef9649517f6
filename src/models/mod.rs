// src/models/mod.rs

pub mod comment;
pub mod leaderboard;
pub mod recipe;
pub mod user;
