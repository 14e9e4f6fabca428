//! Recipes (`/api/recipes`).
//!
//! Recipes are addressed by slug. Ingredients and instructions are kept as
//! raw JSON; their shape varies between Mealie releases and nothing in this
//! crate needs to look inside them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{MealieClient, Pagination, PaginationQuery, Result};
use crate::services::{organizers::Organizer, path_segment};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub recipe_yield: Option<String>,
    #[serde(default)]
    pub total_time: Option<String>,
    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub perform_time: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub recipe_category: Vec<Organizer>,
    #[serde(default)]
    pub tags: Vec<Organizer>,
    #[serde(default)]
    pub tools: Vec<Organizer>,
    #[serde(default)]
    pub org_url: Option<String>,
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(flatten)]
    pub summary: RecipeSummary,
    #[serde(default)]
    pub recipe_ingredient: Vec<serde_json::Value>,
    #[serde(default)]
    pub recipe_instructions: Vec<serde_json::Value>,
    #[serde(default)]
    pub notes: Vec<serde_json::Value>,
    #[serde(default)]
    pub extras: Option<serde_json::Value>,
}

/// Filters accepted by `GET /api/recipes` on top of paging.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub cookbook: Option<String>,
    pub require_all_categories: Option<bool>,
    pub require_all_tags: Option<bool>,
    pub require_all_tools: Option<bool>,
    pub require_all_foods: Option<bool>,
}

#[derive(Debug, Serialize)]
struct CreateRecipe<'a> {
    name: &'a str,
}

pub struct RecipesService<'a> {
    client: &'a MealieClient,
}

impl<'a> RecipesService<'a> {
    pub fn new(client: &'a MealieClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &RecipeQuery) -> Result<Pagination<RecipeSummary>> {
        self.client.get_with("/api/recipes", query).await
    }

    pub async fn get(&self, slug: &str) -> Result<Recipe> {
        self.client
            .get(&format!("/api/recipes/{}", path_segment(slug)))
            .await
    }

    /// Creates an empty recipe and returns its slug.
    pub async fn create(&self, name: &str) -> Result<String> {
        self.client.post("/api/recipes", &CreateRecipe { name }).await
    }

    pub async fn update(&self, slug: &str, recipe: &Recipe) -> Result<Recipe> {
        self.client
            .put(&format!("/api/recipes/{}", path_segment(slug)), recipe)
            .await
    }

    /// Partial update; only the fields present in `changes` are touched.
    pub async fn patch(&self, slug: &str, changes: &serde_json::Value) -> Result<Recipe> {
        self.client
            .patch(&format!("/api/recipes/{}", path_segment(slug)), changes)
            .await
    }

    /// The deleted recipe, or `None` when the server answers with no body.
    pub async fn delete(&self, slug: &str) -> Result<Option<Recipe>> {
        self.client
            .delete(&format!("/api/recipes/{}", path_segment(slug)))
            .await
    }
}
