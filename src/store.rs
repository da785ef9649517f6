// src/store.rs

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use serde::Serialize;

use crate::error::AppError;
use crate::models::comment::Comment;
use crate::models::recipe::Recipe;
use crate::models::user::User;

/// One viewer's relationship to one recipe. Kept out of the shared `Recipe`
/// record and keyed by (viewer, recipe) so flags never leak across viewers.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Interaction {
    pub liked: bool,
    pub saved: bool,
    pub tried: bool,
}

/// Fields supplied by the client when publishing a recipe.
#[derive(Debug)]
pub struct NewRecipe {
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub caption: Option<String>,
    pub full_recipe: Option<String>,
    pub image: String,
    pub tags: Vec<String>,
}

/// Process-lifetime storage. Everything lives in plain collections and is
/// reseeded on every start; restarting the server resets all data.
#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    recipes: Vec<Recipe>,
    comments: Vec<Comment>,
    interactions: HashMap<(i64, i64), Interaction>,
    next_user_id: i64,
    next_recipe_id: i64,
    next_comment_id: i64,
}

impl Store {
    pub fn new() -> Self {
        Self {
            next_user_id: 1,
            next_recipe_id: 1,
            next_comment_id: 1,
            ..Self::default()
        }
    }

    /// The two demo users and two demo recipes every fresh process starts with.
    pub fn seeded() -> Self {
        let mut store = Self::new();

        let foodie = store.insert_user("foodie123", "foodie@example.com", None);
        let chef = store.insert_user("chef_master", "chef@example.com", None);
        let (foodie_id, chef_id) = (foodie.id, chef.id);

        if let Some(u) = store.user_mut(foodie_id) {
            u.followers = 150;
            u.following = 75;
            u.posts = 12;
        }
        if let Some(u) = store.user_mut(chef_id) {
            u.followers = 320;
            u.following = 100;
            u.posts = 25;
        }

        let cookies = store.insert_recipe(NewRecipe {
            user_id: foodie_id,
            title: "Chocolate Chip Cookies".to_string(),
            description: "Classic homemade cookies".to_string(),
            caption: None,
            full_recipe: None,
            image: "https://via.placeholder.com/300x200".to_string(),
            tags: vec![
                "dessert".to_string(),
                "quick".to_string(),
                "comfort".to_string(),
            ],
        });
        let tacos = store.insert_recipe(NewRecipe {
            user_id: chef_id,
            title: "Beef Tacos".to_string(),
            description: "Authentic Mexican tacos".to_string(),
            caption: None,
            full_recipe: None,
            image: "https://via.placeholder.com/300x200".to_string(),
            tags: vec!["spicy".to_string(), "quick".to_string()],
        });

        let (cookies_id, tacos_id) = (cookies.id, tacos.id);
        if let Some(r) = store.recipe_mut(cookies_id) {
            r.likes = 45;
        }
        if let Some(r) = store.recipe_mut(tacos_id) {
            r.likes = 78;
        }

        store
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_mut(&mut self, id: i64) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn insert_user(
        &mut self,
        username: &str,
        email: &str,
        password_hash: Option<String>,
    ) -> User {
        let user = User {
            id: self.next_user_id,
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            followers: 0,
            following: 0,
            posts: 0,
            created_at: Utc::now(),
        };
        self.next_user_id += 1;
        self.users.push(user.clone());
        user
    }

    pub fn recipe(&self, id: i64) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn recipe_mut(&mut self, id: i64) -> Option<&mut Recipe> {
        self.recipes.iter_mut().find(|r| r.id == id)
    }

    pub fn recipes_by_user(&self, user_id: i64) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn insert_recipe(&mut self, new: NewRecipe) -> Recipe {
        let recipe = Recipe {
            id: self.next_recipe_id,
            user_id: new.user_id,
            title: new.title,
            description: new.description,
            caption: new.caption,
            full_recipe: new.full_recipe,
            image: new.image,
            likes: 0,
            comments: 0,
            tried_count: 0,
            tags: new.tags,
            created_at: Utc::now(),
        };
        self.next_recipe_id += 1;
        self.recipes.push(recipe.clone());
        recipe
    }

    /// The viewer's flags for a recipe; all false until first touched.
    pub fn interaction(&self, viewer_id: i64, recipe_id: i64) -> Interaction {
        self.interactions
            .get(&(viewer_id, recipe_id))
            .copied()
            .unwrap_or_default()
    }

    /// Flips the viewer's `liked` flag and moves the like counter in
    /// lockstep. Returns the new flag and total, or None for an unknown id.
    pub fn toggle_like(&mut self, viewer_id: i64, recipe_id: i64) -> Option<(bool, u32)> {
        self.recipe(recipe_id)?;
        let flags = self
            .interactions
            .entry((viewer_id, recipe_id))
            .or_default();
        flags.liked = !flags.liked;
        let liked = flags.liked;

        let recipe = self.recipe_mut(recipe_id)?;
        recipe.likes = if liked {
            recipe.likes + 1
        } else {
            recipe.likes.saturating_sub(1)
        };
        Some((liked, recipe.likes))
    }

    /// Flips the viewer's `saved` flag. No counter side effect.
    pub fn toggle_save(&mut self, viewer_id: i64, recipe_id: i64) -> Option<bool> {
        self.recipe(recipe_id)?;
        let flags = self
            .interactions
            .entry((viewer_id, recipe_id))
            .or_default();
        flags.saved = !flags.saved;
        Some(flags.saved)
    }

    /// Flips the viewer's `tried` flag and moves the tried counter in lockstep.
    pub fn toggle_tried(&mut self, viewer_id: i64, recipe_id: i64) -> Option<(bool, u32)> {
        self.recipe(recipe_id)?;
        let flags = self
            .interactions
            .entry((viewer_id, recipe_id))
            .or_default();
        flags.tried = !flags.tried;
        let tried = flags.tried;

        let recipe = self.recipe_mut(recipe_id)?;
        recipe.tried_count = if tried {
            recipe.tried_count + 1
        } else {
            recipe.tried_count.saturating_sub(1)
        };
        Some((tried, recipe.tried_count))
    }

    pub fn comments_for(&self, recipe_id: i64) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| c.recipe_id == recipe_id)
            .cloned()
            .collect()
    }

    pub fn insert_comment(&mut self, recipe_id: i64, user_id: i64, content: String) -> Comment {
        let comment = Comment {
            id: self.next_comment_id,
            recipe_id,
            user_id,
            content,
            created_at: Utc::now(),
        };
        self.next_comment_id += 1;
        self.comments.push(comment.clone());
        comment
    }
}

/// Shared handle to the store. Clones are cheap; handlers take short
/// read/write critical sections around a single request.
#[derive(Clone)]
pub struct Db(Arc<RwLock<Store>>);

impl Db {
    pub fn seeded() -> Self {
        Self(Arc::new(RwLock::new(Store::seeded())))
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, Store>, AppError> {
        self.0
            .read()
            .map_err(|e| AppError::InternalServerError(format!("store lock poisoned: {}", e)))
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, AppError> {
        self.0
            .write()
            .map_err(|e| AppError::InternalServerError(format!("store lock poisoned: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_contains_two_users_and_two_recipes() {
        let store = Store::seeded();
        assert_eq!(store.users().len(), 2);
        assert_eq!(store.recipes().len(), 2);
        assert_eq!(store.recipe(1).map(|r| r.likes), Some(45));
        assert_eq!(store.recipe(2).map(|r| r.likes), Some(78));
    }

    #[test]
    fn like_toggle_round_trips_counter_and_flag() {
        let mut store = Store::seeded();

        let (liked, likes) = store.toggle_like(1, 1).expect("recipe exists");
        assert!(liked);
        assert_eq!(likes, 46);
        assert!(store.interaction(1, 1).liked);

        let (liked, likes) = store.toggle_like(1, 1).expect("recipe exists");
        assert!(!liked);
        assert_eq!(likes, 45);
        assert!(!store.interaction(1, 1).liked);
    }

    #[test]
    fn tried_toggle_moves_its_own_counter() {
        let mut store = Store::seeded();

        let (tried, count) = store.toggle_tried(2, 1).expect("recipe exists");
        assert!(tried);
        assert_eq!(count, 1);

        // The like counter is untouched.
        assert_eq!(store.recipe(1).map(|r| r.likes), Some(45));
    }

    #[test]
    fn save_toggle_has_no_counter_side_effect() {
        let mut store = Store::seeded();
        let before = store.recipe(2).cloned().expect("recipe exists");

        assert_eq!(store.toggle_save(1, 2), Some(true));
        assert_eq!(store.toggle_save(1, 2), Some(false));

        let after = store.recipe(2).expect("recipe exists");
        assert_eq!(before.likes, after.likes);
        assert_eq!(before.tried_count, after.tried_count);
    }

    #[test]
    fn flags_are_scoped_per_viewer() {
        let mut store = Store::seeded();

        let _ = store.toggle_like(1, 1);
        assert!(store.interaction(1, 1).liked);
        assert!(!store.interaction(2, 1).liked);
    }

    #[test]
    fn toggles_on_unknown_recipe_return_none() {
        let mut store = Store::seeded();
        assert!(store.toggle_like(1, 999).is_none());
        assert!(store.toggle_save(1, 999).is_none());
        assert!(store.toggle_tried(1, 999).is_none());
    }
}
