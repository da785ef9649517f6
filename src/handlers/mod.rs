// src/handlers/mod.rs

pub mod auth;
pub mod interaction;
pub mod leaderboard;
pub mod recipe;
pub mod user;
