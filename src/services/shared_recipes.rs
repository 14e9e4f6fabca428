//! Recipe share tokens (`/api/shared/recipes`).
//!
//! A share token grants read access to a single recipe without an account,
//! until it expires.

use chrono::{DateTime, Utc};
use serde::{de::IgnoredAny, Deserialize, Serialize};

use crate::client::{MealieClient, Result};
use crate::services::path_segment;

/// Share token as listed by `GET /api/shared/recipes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeShareToken {
    pub id: String,
    #[serde(default)]
    pub recipe_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Only populated by the single-token endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeShareToken {
    pub recipe_id: String,
    /// Server default is 30 days from now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListParams<'a> {
    recipe_id: Option<&'a str>,
}

pub struct SharedRecipesService<'a> {
    client: &'a MealieClient,
}

impl<'a> SharedRecipesService<'a> {
    pub fn new(client: &'a MealieClient) -> Self {
        Self { client }
    }

    /// Lists share tokens, optionally only those for one recipe.
    pub async fn list(&self, recipe_id: Option<&str>) -> Result<Vec<RecipeShareToken>> {
        self.client
            .get_with("/api/shared/recipes", &ListParams { recipe_id })
            .await
    }

    pub async fn get(&self, id: &str) -> Result<RecipeShareToken> {
        self.client
            .get(&format!("/api/shared/recipes/{}", path_segment(id)))
            .await
    }

    pub async fn create(&self, request: &CreateRecipeShareToken) -> Result<RecipeShareToken> {
        self.client.post("/api/shared/recipes", request).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete::<IgnoredAny>(&format!("/api/shared/recipes/{}", path_segment(id)))
            .await?;
        Ok(())
    }
}
