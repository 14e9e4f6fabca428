//! Ingredient foods (`/api/foods`).

use serde::{Deserialize, Serialize};

use crate::client::{MealieClient, Pagination, PaginationQuery, Result};
use crate::services::{path_segment, SuccessResponse};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientFood {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub plural_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub label_id: Option<String>,
    #[serde(default)]
    pub aliases: Vec<FoodAlias>,
    #[serde(default)]
    pub households_with_ingredient_food: Vec<String>,
    #[serde(default)]
    pub extras: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodAlias {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIngredientFood {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_id: Option<String>,
    #[serde(default)]
    pub aliases: Vec<FoodAlias>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct MergeFoods<'a> {
    from_food: &'a str,
    to_food: &'a str,
}

pub struct FoodsService<'a> {
    client: &'a MealieClient,
}

impl<'a> FoodsService<'a> {
    pub fn new(client: &'a MealieClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &PaginationQuery) -> Result<Pagination<IngredientFood>> {
        self.client.get_with("/api/foods", query).await
    }

    pub async fn get(&self, id: &str) -> Result<IngredientFood> {
        self.client.get(&format!("/api/foods/{}", path_segment(id))).await
    }

    pub async fn create(&self, food: &CreateIngredientFood) -> Result<IngredientFood> {
        self.client.post("/api/foods", food).await
    }

    pub async fn update(&self, id: &str, food: &CreateIngredientFood) -> Result<IngredientFood> {
        self.client.put(&format!("/api/foods/{}", path_segment(id)), food).await
    }

    /// The deleted item, or `None` when the server answers with no body.
    pub async fn delete(&self, id: &str) -> Result<Option<IngredientFood>> {
        self.client.delete(&format!("/api/foods/{}", path_segment(id))).await
    }

    /// Moves every reference from `from_food` to `to_food` and deletes
    /// `from_food`.
    pub async fn merge(&self, from_food: &str, to_food: &str) -> Result<SuccessResponse> {
        let body = MergeFoods { from_food, to_food };
        self.client.put("/api/foods/merge", &body).await
    }
}
