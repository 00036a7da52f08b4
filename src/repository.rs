use sqlx::SqlitePool;

use crate::controllers;
use crate::error::{PantryChefError, Result};
use crate::models::api::{GeneratedRecipe, NewRecipe};
use crate::models::{CollectionRecord, IngredientSet, RecipeRecord};

/// Client-held view of one user's collections and saved recipes.
///
/// Mirrors the store lazily: [`refresh`](Self::refresh) re-fetches
/// wholesale, and mutations patch the local copy on success. Membership
/// queries answer from the local copy only, so they are stale until the
/// next refresh if another session has written in the meantime; there is
/// no live subscription. Two sessions refreshing concurrently race, and
/// the later refresh wins.
pub struct CollectionRepository {
    pool: SqlitePool,
    user_id: Option<i64>,
    collections: Vec<CollectionRecord>,
    recipes: Vec<RecipeRecord>,
}

impl CollectionRepository {
    /// A signed-out repository; every mutation fails with `NotSignedIn`
    /// until a user is set.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            user_id: None,
            collections: Vec::new(),
            recipes: Vec::new(),
        }
    }

    pub fn signed_in(pool: SqlitePool, user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::new(pool)
        }
    }

    /// Switch the session. Clears the cache; call `refresh` afterwards.
    pub fn set_user(&mut self, user_id: Option<i64>) {
        self.user_id = user_id;
        self.collections.clear();
        self.recipes.clear();
    }

    fn require_user(&self) -> Result<i64> {
        self.user_id.ok_or(PantryChefError::NotSignedIn)
    }

    /// Wholesale re-fetch of the user's collections and their recipes.
    /// Signed out, this just clears the cache.
    pub async fn refresh(&mut self) -> Result<()> {
        let Some(user_id) = self.user_id else {
            self.collections.clear();
            self.recipes.clear();
            return Ok(());
        };

        let collections = controllers::get_user_collections(&self.pool, user_id).await?;
        let ids: Vec<i64> = collections.iter().map(|c| c.id).collect();
        let recipes = controllers::get_recipes_for_collections(&self.pool, &ids).await?;

        self.collections = collections;
        self.recipes = recipes;

        Ok(())
    }

    pub fn collections(&self) -> &[CollectionRecord] {
        &self.collections
    }

    /// Answered from the cache; stale until the next `refresh` if another
    /// session has written.
    pub fn is_recipe_in_collection(&self, collection_id: i64, recipe_id: i64) -> bool {
        self.recipes
            .iter()
            .any(|r| r.collection_id == collection_id && r.id == recipe_id)
    }

    /// Answered from the cache; same staleness caveat as membership.
    pub fn collection_recipes(&self, collection_id: i64) -> Vec<&RecipeRecord> {
        self.recipes
            .iter()
            .filter(|r| r.collection_id == collection_id)
            .collect()
    }

    pub async fn create_collection(
        &mut self,
        name: &str,
        description: Option<&str>,
        color: &str,
        is_public: bool,
    ) -> Result<i64> {
        let user_id = self.require_user()?;
        let id = controllers::create_collection(
            &self.pool,
            user_id,
            name,
            description,
            color,
            is_public,
        )
        .await?;

        let record = controllers::get_collection(&self.pool, user_id, id).await?;
        // Newest first, like the listing order
        self.collections.insert(0, record);

        Ok(id)
    }

    pub async fn update_collection(
        &mut self,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
        color: Option<&str>,
        is_public: Option<bool>,
    ) -> Result<()> {
        let user_id = self.require_user()?;
        let updated = controllers::update_collection(
            &self.pool,
            user_id,
            id,
            name,
            description,
            color,
            is_public,
        )
        .await?;

        if let Some(slot) = self.collections.iter_mut().find(|c| c.id == id) {
            *slot = updated;
        }

        Ok(())
    }

    pub async fn delete_collection(&mut self, id: i64) -> Result<()> {
        let user_id = self.require_user()?;
        controllers::delete_collection(&self.pool, user_id, id).await?;

        self.collections.retain(|c| c.id != id);
        self.recipes.retain(|r| r.collection_id != id);

        Ok(())
    }

    pub async fn add_recipe_to_collection(
        &mut self,
        collection_id: i64,
        recipe: &NewRecipe,
    ) -> Result<i64> {
        let user_id = self.require_user()?;
        let id =
            controllers::add_recipe_to_collection(&self.pool, user_id, collection_id, recipe)
                .await?;

        let record = controllers::get_recipe(&self.pool, id).await?;
        self.recipes.push(record);

        Ok(id)
    }

    pub async fn remove_recipe_from_collection(
        &mut self,
        collection_id: i64,
        recipe_id: i64,
    ) -> Result<()> {
        let user_id = self.require_user()?;
        controllers::remove_recipe_from_collection(&self.pool, user_id, collection_id, recipe_id)
            .await?;

        self.recipes
            .retain(|r| !(r.id == recipe_id && r.collection_id == collection_id));

        Ok(())
    }

    /// The save dialog's behavior: make the set of collections holding a
    /// copy of `recipe` equal to `selected`.
    ///
    /// Copies are matched by recipe name within each cached collection.
    /// Deselected copies are removed, newly selected collections get an
    /// independent copy tagged with the source ingredients. Returns the ids
    /// of the inserted rows.
    pub async fn save_generated_recipe(
        &mut self,
        recipe: &GeneratedRecipe,
        source: &IngredientSet,
        selected: &[i64],
    ) -> Result<Vec<i64>> {
        self.require_user()?;

        // Remove copies from collections that are no longer selected
        let deselected: Vec<(i64, i64)> = self
            .recipes
            .iter()
            .filter(|r| r.name == recipe.name && !selected.contains(&r.collection_id))
            .map(|r| (r.collection_id, r.id))
            .collect();

        for (collection_id, recipe_id) in deselected {
            self.remove_recipe_from_collection(collection_id, recipe_id)
                .await?;
        }

        // Add to newly selected collections
        let payload = recipe.to_new_recipe(source);
        let mut inserted = Vec::new();

        for &collection_id in selected {
            let already_there = self
                .recipes
                .iter()
                .any(|r| r.collection_id == collection_id && r.name == recipe.name);

            if !already_there {
                inserted.push(self.add_recipe_to_collection(collection_id, &payload).await?);
            }
        }

        Ok(inserted)
    }
}
