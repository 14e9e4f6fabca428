use serde::{Deserialize, Serialize};

use crate::client::{MealieClient, Result};

/// Public server information from `/api/app/about`. Needs no token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub version: String,
    #[serde(default)]
    pub production: bool,
    #[serde(default)]
    pub demo_status: bool,
    #[serde(default)]
    pub allow_signup: bool,
    #[serde(default)]
    pub default_group_slug: Option<String>,
    #[serde(default)]
    pub default_household_slug: Option<String>,
}

pub struct AppService<'a> {
    client: &'a MealieClient,
}

impl<'a> AppService<'a> {
    pub fn new(client: &'a MealieClient) -> Self {
        Self { client }
    }

    pub async fn about(&self) -> Result<AppInfo> {
        self.client.get("/api/app/about").await
    }
}
