// ABOUTME: Integration tests for the recipe service
// ABOUTME: Covers listing with combined criteria, CRUD round-trips, and not-found paths

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use recipe_manager::database::ingredients::IngredientsManager;
use recipe_manager::database::Database;
use recipe_manager::search::SearchCriteria;
use recipe_manager::services::{RecipeRequest, RecipesService};

fn request(
    is_vegetarian: bool,
    servings: i64,
    instructions: &str,
    ingredients: &[&str],
) -> RecipeRequest {
    RecipeRequest {
        is_vegetarian,
        servings,
        instructions: instructions.to_owned(),
        ingredients: ingredients.iter().map(|s| (*s).to_owned()).collect(),
    }
}

/// Seed the three-recipe catalog used by the search scenarios
async fn seed_catalog(db: &Database) -> RecipesService {
    let service = RecipesService::new(db);
    service
        .create(&request(true, 3, "instructions1", &["ingredient1", "ingredient2"]))
        .await
        .unwrap();
    service
        .create(&request(false, 5, "instructions2", &["ingredient2", "ingredient3"]))
        .await
        .unwrap();
    service
        .create(&request(false, 0, "instructions3", &["ingredient4", "ingredient5"]))
        .await
        .unwrap();
    service
}

fn instructions_of(views: &[recipe_manager::services::RecipeView]) -> Vec<&str> {
    views.iter().map(|v| v.instructions.as_str()).collect()
}

#[tokio::test]
async fn test_list_with_empty_criteria_returns_all_in_storage_order() {
    let db = common::test_database().await;
    let service = seed_catalog(&db).await;

    let views = service.list(&SearchCriteria::default()).await.unwrap();
    assert_eq!(
        instructions_of(&views),
        vec!["instructions1", "instructions2", "instructions3"]
    );
}

#[tokio::test]
async fn test_list_with_included_ingredient() {
    let db = common::test_database().await;
    let service = seed_catalog(&db).await;

    let criteria = SearchCriteria {
        included_ingredients: vec!["ingredient2".to_owned()],
        ..SearchCriteria::default()
    };
    let views = service.list(&criteria).await.unwrap();
    assert_eq!(instructions_of(&views), vec!["instructions1", "instructions2"]);
}

#[tokio::test]
async fn test_list_with_excluded_ingredient() {
    let db = common::test_database().await;
    let service = seed_catalog(&db).await;

    let criteria = SearchCriteria {
        excluded_ingredients: vec!["ingredient2".to_owned()],
        ..SearchCriteria::default()
    };
    let views = service.list(&criteria).await.unwrap();
    assert_eq!(instructions_of(&views), vec!["instructions3"]);
}

#[tokio::test]
async fn test_list_with_instructions_substring() {
    let db = common::test_database().await;
    let service = seed_catalog(&db).await;

    let criteria = SearchCriteria {
        instructions: Some("tions3".to_owned()),
        ..SearchCriteria::default()
    };
    let views = service.list(&criteria).await.unwrap();
    assert_eq!(instructions_of(&views), vec!["instructions3"]);
}

#[tokio::test]
async fn test_list_with_servings() {
    let db = common::test_database().await;
    let service = seed_catalog(&db).await;

    let criteria = SearchCriteria {
        servings: Some(3),
        ..SearchCriteria::default()
    };
    let views = service.list(&criteria).await.unwrap();
    assert_eq!(instructions_of(&views), vec!["instructions1"]);
}

#[tokio::test]
async fn test_list_with_vegetarian_flag() {
    let db = common::test_database().await;
    let service = seed_catalog(&db).await;

    let criteria = SearchCriteria {
        is_vegetarian: Some(true),
        ..SearchCriteria::default()
    };
    let views = service.list(&criteria).await.unwrap();
    assert_eq!(instructions_of(&views), vec!["instructions1"]);
}

#[tokio::test]
async fn test_list_on_empty_catalog_returns_empty_vec() {
    let db = common::test_database().await;
    let service = RecipesService::new(&db);

    let views = service.list(&SearchCriteria::default()).await.unwrap();
    assert!(views.is_empty());
}

#[tokio::test]
async fn test_create_then_get_returns_equal_view() {
    let db = common::test_database().await;
    let service = RecipesService::new(&db);

    let created = service
        .create(&request(true, 2, "whisk and bake", &["egg", "flour", "egg"]))
        .await
        .unwrap();
    assert_eq!(created.ingredients, vec!["egg", "flour", "egg"]);

    let fetched = service.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_shares_ingredient_identities_across_recipes() {
    let db = common::test_database().await;
    let service = RecipesService::new(&db);
    let ingredients = IngredientsManager::new(db.pool().clone());

    service.create(&request(false, 1, "a", &["salt"])).await.unwrap();
    service.create(&request(false, 1, "b", &["salt"])).await.unwrap();

    // One identity ever exists for a name, however many recipes use it
    let salt = ingredients.find_by_name("salt").await.unwrap().unwrap();
    let resolved_again = ingredients.resolve("salt").await.unwrap();
    assert_eq!(salt.id, resolved_again.id);
}

#[tokio::test]
async fn test_create_rejects_negative_servings() {
    let db = common::test_database().await;
    let service = RecipesService::new(&db);

    let error = service
        .create(&request(false, -1, "x", &[]))
        .await
        .unwrap_err();
    assert_eq!(
        error.code,
        recipe_manager::errors::ErrorCode::InvalidInput
    );
}

#[tokio::test]
async fn test_update_replaces_everything() {
    let db = common::test_database().await;
    let service = RecipesService::new(&db);

    let created = service
        .create(&request(false, 2, "old", &["salt"]))
        .await
        .unwrap();
    let updated = service
        .update(created.id, &request(true, 8, "new", &["oil", "basil"]))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert!(updated.is_vegetarian);
    assert_eq!(updated.servings, 8);
    assert_eq!(updated.ingredients, vec!["oil", "basil"]);

    let fetched = service.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_id_mutates_nothing() {
    let db = common::test_database().await;
    let service = seed_catalog(&db).await;
    let ingredients = IngredientsManager::new(db.pool().clone());

    let result = service
        .update(999, &request(true, 1, "ghost", &["brand-new-ingredient"]))
        .await
        .unwrap();
    assert!(result.is_none());

    // No recipe changed and no ingredient row appeared
    let views = service.list(&SearchCriteria::default()).await.unwrap();
    assert_eq!(
        instructions_of(&views),
        vec!["instructions1", "instructions2", "instructions3"]
    );
    assert!(ingredients
        .find_by_name("brand-new-ingredient")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_delete_twice_signals_not_found_second_time() {
    let db = common::test_database().await;
    let service = RecipesService::new(&db);

    let created = service.create(&request(false, 1, "x", &[])).await.unwrap();

    assert!(service.delete(created.id).await.unwrap());
    assert!(!service.delete(created.id).await.unwrap());
}

#[tokio::test]
async fn test_get_missing_returns_none() {
    let db = common::test_database().await;
    let service = RecipesService::new(&db);

    assert!(service.get(1).await.unwrap().is_none());
}
