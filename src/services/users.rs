use serde::{Deserialize, Serialize};

use crate::client::{MealieClient, Result};

/// The logged-in user as returned by `/api/users/self`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub household: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub household_id: Option<String>,
    #[serde(default)]
    pub can_invite: bool,
    #[serde(default)]
    pub can_manage: bool,
    #[serde(default)]
    pub can_organize: bool,
}

pub struct UsersService<'a> {
    client: &'a MealieClient,
}

impl<'a> UsersService<'a> {
    pub fn new(client: &'a MealieClient) -> Self {
        Self { client }
    }

    pub async fn get_self(&self) -> Result<User> {
        self.client.get("/api/users/self").await
    }
}
