//! The current user's household (`/api/households`).

use serde::{Deserialize, Serialize};

use crate::client::{MealieClient, Result};
use crate::services::users::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub group_id: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub preferences: Option<HouseholdPreferences>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub private_household: bool,
    pub lock_recipe_edits_from_other_households: bool,
    /// 0 is Sunday.
    pub first_day_of_week: u8,
    pub recipe_public: bool,
    pub recipe_show_nutrition: bool,
    pub recipe_show_assets: bool,
    pub recipe_landscape_view: bool,
    pub recipe_disable_comments: bool,
    #[serde(default)]
    pub recipe_disable_amount: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdStatistics {
    pub total_recipes: u64,
    pub total_users: u64,
    pub total_categories: u64,
    pub total_tags: u64,
    pub total_tools: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPermissions {
    pub user_id: String,
    #[serde(default)]
    pub can_manage_household: bool,
    #[serde(default)]
    pub can_manage: bool,
    #[serde(default)]
    pub can_invite: bool,
    #[serde(default)]
    pub can_organize: bool,
}

pub struct HouseholdsService<'a> {
    client: &'a MealieClient,
}

impl<'a> HouseholdsService<'a> {
    pub fn new(client: &'a MealieClient) -> Self {
        Self { client }
    }

    pub async fn get_self(&self) -> Result<Household> {
        self.client.get("/api/households/self").await
    }

    pub async fn get_preferences(&self) -> Result<HouseholdPreferences> {
        self.client.get("/api/households/preferences").await
    }

    pub async fn update_preferences(
        &self,
        preferences: &HouseholdPreferences,
    ) -> Result<HouseholdPreferences> {
        self.client
            .put("/api/households/preferences", preferences)
            .await
    }

    pub async fn members(&self) -> Result<Vec<User>> {
        self.client.get("/api/households/members").await
    }

    pub async fn statistics(&self) -> Result<HouseholdStatistics> {
        self.client.get("/api/households/statistics").await
    }

    /// Requires the caller to be a household manager.
    pub async fn set_member_permissions(&self, permissions: &SetPermissions) -> Result<User> {
        self.client
            .put("/api/households/permissions", permissions)
            .await
    }
}
