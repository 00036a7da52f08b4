use pantrychef::controllers::{create_profile, share_recipe};
use pantrychef::discover::DiscoverFeed;
use pantrychef::generator::generate_recipes;
use pantrychef::models::api::GeneratedRecipe;
use pantrychef::models::{Difficulty, IngredientSet};
use pantrychef::repository::CollectionRepository;
use pantrychef::spoonacular::{
    ExtendedIngredient, InstructionStep, AnalyzedInstruction, RecipeApi, RecipeCandidate,
    RecipeInformation,
};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

async fn setup_db() -> SqlitePool {
    // Create an in-memory database with migrations
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Canned provider standing in for the recipe-data API.
struct CannedApi;

impl RecipeApi for CannedApi {
    async fn find_by_ingredients(
        &self,
        ingredients: &str,
        limit: u32,
    ) -> pantrychef::error::Result<Vec<RecipeCandidate>> {
        assert_eq!(ingredients, "chicken,rice");
        assert_eq!(limit, 3);
        Ok(vec![
            RecipeCandidate {
                id: 1,
                title: Some("Chicken Fried Rice".to_string()),
            },
            RecipeCandidate {
                id: 2,
                title: Some("Slow Braised Chicken".to_string()),
            },
        ])
    }

    async fn recipe_information(&self, id: u64) -> pantrychef::error::Result<RecipeInformation> {
        let info = match id {
            1 => RecipeInformation {
                title: "Chicken Fried Rice".to_string(),
                summary: Some("<p>Weeknight <b>classic</b>.</p>".to_string()),
                extended_ingredients: Some(vec![
                    ExtendedIngredient {
                        original: "2 chicken breasts, diced".to_string(),
                    },
                    ExtendedIngredient {
                        original: "2 cups cooked rice".to_string(),
                    },
                ]),
                analyzed_instructions: Some(vec![AnalyzedInstruction {
                    steps: vec![
                        InstructionStep {
                            step: "Fry the chicken.".to_string(),
                        },
                        InstructionStep {
                            step: "Add the rice.".to_string(),
                        },
                    ],
                }]),
                ready_in_minutes: 20,
                servings: Some(2),
            },
            _ => RecipeInformation {
                title: "Slow Braised Chicken".to_string(),
                summary: None,
                extended_ingredients: None,
                analyzed_instructions: None,
                ready_in_minutes: 90,
                servings: None,
            },
        };
        Ok(info)
    }
}

#[tokio::test]
async fn test_generate_and_save_roundtrip() {
    let pool = setup_db().await;

    // Generate from a canned provider
    let mut ingredients = IngredientSet::new();
    ingredients.add("chicken");
    ingredients.add("rice");
    ingredients.add("chicken"); // exact duplicate, ignored

    let recipes = generate_recipes(&CannedApi, &ingredients)
        .await
        .expect("Failed to generate recipes");

    assert_eq!(recipes.len(), 2);

    let fried_rice = &recipes[0];
    assert_eq!(fried_rice.name, "Chicken Fried Rice");
    assert_eq!(fried_rice.description, "Weeknight classic.");
    assert_eq!(fried_rice.cooking_time, "20 minutes");
    assert_eq!(fried_rice.difficulty, Difficulty::Easy);
    assert_eq!(fried_rice.servings, Some(2));

    let braise = &recipes[1];
    assert_eq!(braise.description, "A delicious recipe.");
    assert!(braise.ingredients.is_empty());
    assert!(braise.instructions.is_empty());
    assert_eq!(braise.difficulty, Difficulty::Hard);
    assert_eq!(braise.servings, None);

    // Save the first result into a collection
    let user_id = create_profile(&pool, Some("cook@example.com"), Some("Cook"))
        .await
        .expect("Failed to create profile");
    let mut repo = CollectionRepository::signed_in(pool.clone(), user_id);

    let collection_id = repo
        .create_collection("Weeknight", Some("Fast dinners"), "from-purple-500 to-pink-500", false)
        .await
        .expect("Failed to create collection");

    let inserted = repo
        .save_generated_recipe(fried_rice, &ingredients, &[collection_id])
        .await
        .expect("Failed to save recipe");
    assert_eq!(inserted.len(), 1);

    // The saved copy carries the generated fields and the source ingredients
    let saved = repo.collection_recipes(collection_id);
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name, "Chicken Fried Rice");
    assert_eq!(saved[0].ingredients, fried_rice.ingredients);
    assert_eq!(saved[0].instructions, fried_rice.instructions);
    assert_eq!(saved[0].cooking_time, "20 minutes");
    assert_eq!(saved[0].difficulty, Difficulty::Easy);
    assert_eq!(
        saved[0].source_ingredients,
        Some(vec!["chicken".to_string(), "rice".to_string()])
    );
}

#[tokio::test]
async fn test_share_discover_and_cascade_delete() {
    let pool = setup_db().await;

    let sharer_id = create_profile(&pool, Some("alex@example.com"), Some("Alex"))
        .await
        .expect("Failed to create profile");
    let mut repo = CollectionRepository::signed_in(pool.clone(), sharer_id);

    let collection_id = repo
        .create_collection("Public Favorites", None, "from-green-500 to-emerald-500", true)
        .await
        .expect("Failed to create collection");

    let curry = GeneratedRecipe {
        name: "Coconut Curry".to_string(),
        description: "Warm and fragrant.".to_string(),
        ingredients: vec![
            "1 can coconut milk".to_string(),
            "2 chicken breasts".to_string(),
        ],
        instructions: vec!["Simmer everything.".to_string()],
        cooking_time: "40 minutes".to_string(),
        servings: Some(4),
        difficulty: Difficulty::Medium,
    };

    let source: IngredientSet = ["coconut milk", "chicken"].into_iter().collect();
    let inserted = repo
        .save_generated_recipe(&curry, &source, &[collection_id])
        .await
        .expect("Failed to save recipe");
    let recipe_id = inserted[0];

    share_recipe(&pool, sharer_id, recipe_id, "Family curry night", Some("Our staple"))
        .await
        .expect("Failed to share recipe");

    // Discovery sees the listing with recipe fields and attribution
    let mut feed = DiscoverFeed::load(&pool).await.expect("Failed to load feed");
    assert_eq!(feed.listings().len(), 1);

    let listing = &feed.listings()[0];
    assert_eq!(listing.title, "Family curry night");
    assert_eq!(listing.recipe_name, "Coconut Curry");
    assert_eq!(listing.recipe_difficulty, Difficulty::Medium);
    assert_eq!(listing.sharer_name, Some("Alex".to_string()));

    // Ingredient-only search hits
    assert_eq!(feed.search("chicken").len(), 1);
    assert!(feed.search("beef").is_empty());

    // Views are counted
    feed.record_view(&pool, recipe_id).await;
    assert_eq!(feed.listings()[0].view_count, 1);

    // Deleting the collection removes its recipes; the listing dangles and
    // discovery filters it out
    repo.delete_collection(collection_id)
        .await
        .expect("Failed to delete collection");

    let feed = DiscoverFeed::load(&pool).await.expect("Failed to reload feed");
    assert!(feed.listings().is_empty());
}

#[tokio::test]
async fn test_two_sessions_race_later_refresh_wins() {
    let pool = setup_db().await;

    let user_id = create_profile(&pool, Some("me@example.com"), None)
        .await
        .expect("Failed to create profile");

    let mut tab_a = CollectionRepository::signed_in(pool.clone(), user_id);
    let mut tab_b = CollectionRepository::signed_in(pool.clone(), user_id);

    tab_a
        .create_collection("From tab A", None, "from-blue-500 to-cyan-500", false)
        .await
        .expect("Failed to create collection");

    // Tab B has not refreshed and knows nothing about tab A's write
    assert!(tab_b.collections().is_empty());

    tab_b.refresh().await.expect("Failed to refresh");
    assert_eq!(tab_b.collections().len(), 1);
    assert_eq!(tab_b.collections()[0].name, "From tab A");
}
