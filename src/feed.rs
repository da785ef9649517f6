// src/feed.rs

//! Feed filtering: the combined text-query and tag predicate applied to the
//! recipe list before display.
//!
//! Pure and stable: the output is a subsequence of the input in its original
//! order. The free-text query matches title, description, or any tag
//! case-insensitively; the tag filter is an exact, case-sensitive membership
//! test. Both compose by logical AND.

use crate::models::recipe::Recipe;

pub fn filter_recipes(recipes: &[Recipe], query: Option<&str>, tag: Option<&str>) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|r| matches_query(r, query) && matches_tag(r, tag))
        .cloned()
        .collect()
}

fn matches_query(recipe: &Recipe, query: Option<&str>) -> bool {
    let Some(q) = query else {
        return true;
    };
    if q.is_empty() {
        return true;
    }
    let q = q.to_lowercase();
    recipe.title.to_lowercase().contains(&q)
        || recipe.description.to_lowercase().contains(&q)
        || recipe.tags.iter().any(|t| t.to_lowercase().contains(&q))
}

fn matches_tag(recipe: &Recipe, tag: Option<&str>) -> bool {
    match tag {
        Some(t) => recipe.tags.iter().any(|x| x == t),
        None => true,
    }
}
