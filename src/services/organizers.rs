//! Recipe organizers: categories, tags and tools.
//!
//! All three live under `/api/organizers/<kind>` and share one shape, so a
//! single service takes the [`OrganizerKind`] as its first argument.

use serde::{de::IgnoredAny, Deserialize, Serialize};

use crate::client::{MealieClient, Pagination, PaginationQuery, Result};
use crate::services::path_segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganizerKind {
    Categories,
    Tags,
    Tools,
}

impl OrganizerKind {
    fn base_path(self) -> &'static str {
        match self {
            OrganizerKind::Categories => "/api/organizers/categories",
            OrganizerKind::Tags => "/api/organizers/tags",
            OrganizerKind::Tools => "/api/organizers/tools",
        }
    }
}

/// A category, tag or tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub group_id: Option<String>,
    /// Tools only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub households_with_tool: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateOrganizer {
    pub name: String,
}

pub struct OrganizersService<'a> {
    client: &'a MealieClient,
}

impl<'a> OrganizersService<'a> {
    pub fn new(client: &'a MealieClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        kind: OrganizerKind,
        query: &PaginationQuery,
    ) -> Result<Pagination<Organizer>> {
        self.client.get_with(kind.base_path(), query).await
    }

    pub async fn get(&self, kind: OrganizerKind, id: &str) -> Result<Organizer> {
        self.client
            .get(&format!("{}/{}", kind.base_path(), path_segment(id)))
            .await
    }

    pub async fn get_by_slug(&self, kind: OrganizerKind, slug: &str) -> Result<Organizer> {
        self.client
            .get(&format!("{}/slug/{}", kind.base_path(), path_segment(slug)))
            .await
    }

    pub async fn create(&self, kind: OrganizerKind, name: &str) -> Result<Organizer> {
        let body = CreateOrganizer {
            name: name.to_string(),
        };
        self.client.post(kind.base_path(), &body).await
    }

    pub async fn update(&self, kind: OrganizerKind, organizer: &Organizer) -> Result<Organizer> {
        self.client
            .put(
                &format!("{}/{}", kind.base_path(), path_segment(&organizer.id)),
                organizer,
            )
            .await
    }

    pub async fn delete(&self, kind: OrganizerKind, id: &str) -> Result<()> {
        self.client
            .delete::<IgnoredAny>(&format!("{}/{}", kind.base_path(), path_segment(id)))
            .await?;
        Ok(())
    }
}
