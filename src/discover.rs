use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::warn;

use crate::controllers::{
    get_active_shared_recipes, get_profiles_by_ids, get_recipes_by_ids, increment_view_count,
};
use crate::error::Result;
use crate::models::api::SharedListing;

/// Assemble the community feed: active listings joined in memory to their
/// recipes and sharer profiles, newest listing first.
///
/// A listing whose recipe row no longer exists is dropped. Missing sharer
/// profiles only degrade the attribution fields to `None`; the listing
/// itself stays.
pub async fn fetch_shared_listings(pool: &SqlitePool) -> Result<Vec<SharedListing>> {
    let shared = get_active_shared_recipes(pool).await?;
    if shared.is_empty() {
        return Ok(Vec::new());
    }

    let recipe_ids: Vec<i64> = shared.iter().map(|s| s.recipe_id).collect();
    let recipes: HashMap<i64, _> = get_recipes_by_ids(pool, &recipe_ids)
        .await?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();

    let sharer_ids: Vec<i64> = shared.iter().map(|s| s.shared_by).collect();
    let profiles: HashMap<i64, _> = get_profiles_by_ids(pool, &sharer_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    let listings = shared
        .into_iter()
        .filter_map(|s| {
            let recipe = recipes.get(&s.recipe_id)?;
            let profile = profiles.get(&s.shared_by);

            Some(SharedListing {
                id: s.id,
                recipe_id: s.recipe_id,
                shared_by: s.shared_by,
                title: s.title,
                description: s.description,
                view_count: s.view_count,
                created_at: s.created_at,
                recipe_name: recipe.name.clone(),
                recipe_description: recipe.description.clone(),
                recipe_ingredients: recipe.ingredients.clone(),
                recipe_instructions: recipe.instructions.clone(),
                recipe_cooking_time: recipe.cooking_time.clone(),
                recipe_servings: recipe.servings,
                recipe_difficulty: recipe.difficulty,
                sharer_name: profile.and_then(|p| p.full_name.clone()),
                sharer_email: profile.and_then(|p| p.email.clone()),
            })
        })
        .collect();

    Ok(listings)
}

/// The community feed as held by one viewer.
pub struct DiscoverFeed {
    listings: Vec<SharedListing>,
}

impl DiscoverFeed {
    pub async fn load(pool: &SqlitePool) -> Result<Self> {
        Ok(Self {
            listings: fetch_shared_listings(pool).await?,
        })
    }

    pub fn listings(&self) -> &[SharedListing] {
        &self.listings
    }

    /// Listings matching the query; an empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&SharedListing> {
        self.listings.iter().filter(|l| l.matches(query)).collect()
    }

    /// Best-effort view bump for every listing of `recipe_id`.
    ///
    /// The remote increment may fail; the failure is logged and swallowed
    /// while the local count is bumped regardless, so displayed counts can
    /// drift from persisted ones until the next reload.
    pub async fn record_view(&mut self, pool: &SqlitePool, recipe_id: i64) {
        if let Err(e) = increment_view_count(pool, recipe_id).await {
            warn!("view count update failed for recipe {recipe_id}: {e}");
        }

        for listing in self
            .listings
            .iter_mut()
            .filter(|l| l.recipe_id == recipe_id)
        {
            listing.view_count += 1;
        }
    }
}
