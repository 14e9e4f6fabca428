//! Ingredient units (`/api/units`).

use serde::{Deserialize, Serialize};

use crate::client::{MealieClient, Pagination, PaginationQuery, Result};
use crate::services::{path_segment, SuccessResponse};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientUnit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub plural_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub plural_abbreviation: Option<String>,
    #[serde(default)]
    pub use_abbreviation: bool,
    /// Render amounts as fractions (`1/2`) instead of decimals.
    #[serde(default = "default_fraction")]
    pub fraction: bool,
    #[serde(default)]
    pub aliases: Vec<UnitAlias>,
}

fn default_fraction() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitAlias {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIngredientUnit {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural_name: Option<String>,
    pub description: String,
    pub abbreviation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural_abbreviation: Option<String>,
    pub use_abbreviation: bool,
    pub fraction: bool,
    pub aliases: Vec<UnitAlias>,
}

impl CreateIngredientUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plural_name: None,
            description: String::new(),
            abbreviation: String::new(),
            plural_abbreviation: None,
            use_abbreviation: false,
            fraction: true,
            aliases: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct MergeUnits<'a> {
    from_unit: &'a str,
    to_unit: &'a str,
}

pub struct UnitsService<'a> {
    client: &'a MealieClient,
}

impl<'a> UnitsService<'a> {
    pub fn new(client: &'a MealieClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &PaginationQuery) -> Result<Pagination<IngredientUnit>> {
        self.client.get_with("/api/units", query).await
    }

    pub async fn get(&self, id: &str) -> Result<IngredientUnit> {
        self.client.get(&format!("/api/units/{}", path_segment(id))).await
    }

    pub async fn create(&self, unit: &CreateIngredientUnit) -> Result<IngredientUnit> {
        self.client.post("/api/units", unit).await
    }

    pub async fn update(&self, id: &str, unit: &CreateIngredientUnit) -> Result<IngredientUnit> {
        self.client.put(&format!("/api/units/{}", path_segment(id)), unit).await
    }

    /// The deleted item, or `None` when the server answers with no body.
    pub async fn delete(&self, id: &str) -> Result<Option<IngredientUnit>> {
        self.client.delete(&format!("/api/units/{}", path_segment(id))).await
    }

    pub async fn merge(&self, from_unit: &str, to_unit: &str) -> Result<SuccessResponse> {
        let body = MergeUnits { from_unit, to_unit };
        self.client.put("/api/units/merge", &body).await
    }
}
