mod collection_controller;
mod profile_controller;
mod recipe_controller;
mod shared_recipe_controller;

pub use collection_controller::{
    create_collection, delete_collection, get_collection, get_user_collections, update_collection,
};
pub use profile_controller::{create_profile, get_profiles_by_ids};
pub use recipe_controller::{
    add_recipe_to_collection, get_recipe, get_recipes_by_ids, get_recipes_for_collections,
    remove_recipe_from_collection,
};
pub use shared_recipe_controller::{
    get_active_shared_recipes, increment_view_count, share_recipe,
};
