use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, IngredientSet};

/// Normalized output of the generation flow.
///
/// Lives only in memory until the user saves it into a collection.
/// `servings` is whatever the provider reported; an absent value stays
/// absent rather than being defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cooking_time: String,
    pub servings: Option<i64>,
    pub difficulty: Difficulty,
}

impl GeneratedRecipe {
    /// Save payload for this recipe, tagged with the ingredient set that
    /// produced it.
    pub fn to_new_recipe(&self, source: &IngredientSet) -> NewRecipe {
        NewRecipe {
            name: self.name.clone(),
            description: Some(self.description.clone()),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            cooking_time: self.cooking_time.clone(),
            servings: self.servings,
            difficulty: self.difficulty,
            source_ingredients: Some(source.iter().map(str::to_string).collect()),
        }
    }
}

/// Insert payload for saving a recipe into a collection.
///
/// `servings` stays optional here while the column is NOT NULL: an absent
/// upstream value surfaces as the store's own constraint error at save
/// time instead of being silently defaulted.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cooking_time: String,
    pub servings: Option<i64>,
    pub difficulty: Difficulty,
    pub source_ingredients: Option<Vec<String>>,
}
