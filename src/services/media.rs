//! Binary media under `/api/media`.
//!
//! Every method here goes through the binary verbs, so bodies are returned
//! as-is and never parsed as JSON.

use crate::client::{Blob, ByteStream, MealieClient, Result};
use crate::services::path_segment;

/// The renditions Mealie stores for each recipe image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageVariant {
    #[default]
    Original,
    Min,
    Tiny,
}

impl ImageVariant {
    pub fn file_name(self) -> &'static str {
        match self {
            ImageVariant::Original => "original.webp",
            ImageVariant::Min => "min-original.webp",
            ImageVariant::Tiny => "tiny-original.webp",
        }
    }
}

pub struct MediaService<'a> {
    client: &'a MealieClient,
}

impl<'a> MediaService<'a> {
    pub fn new(client: &'a MealieClient) -> Self {
        Self { client }
    }

    pub fn recipe_image_path(recipe_id: &str, variant: ImageVariant) -> String {
        format!(
            "/api/media/recipes/{}/images/{}",
            path_segment(recipe_id),
            variant.file_name()
        )
    }

    /// Absolute URL of a recipe image, e.g. for an `<img>` tag.
    pub fn recipe_image_url(&self, recipe_id: &str, variant: ImageVariant) -> String {
        self.client.url(&Self::recipe_image_path(recipe_id, variant))
    }

    pub async fn recipe_image(&self, recipe_id: &str, variant: ImageVariant) -> Result<Blob> {
        self.client
            .get_blob(&Self::recipe_image_path(recipe_id, variant))
            .await
    }

    pub async fn recipe_image_stream(
        &self,
        recipe_id: &str,
        variant: ImageVariant,
    ) -> Result<ByteStream> {
        self.client
            .get_stream(&Self::recipe_image_path(recipe_id, variant))
            .await
    }

    pub async fn timeline_event_image(
        &self,
        recipe_id: &str,
        event_id: &str,
        variant: ImageVariant,
    ) -> Result<Blob> {
        let path = format!(
            "/api/media/recipes/{}/images/timeline/{}/{}",
            path_segment(recipe_id),
            path_segment(event_id),
            variant.file_name()
        );
        self.client.get_blob(&path).await
    }

    pub async fn recipe_asset(&self, recipe_id: &str, file_name: &str) -> Result<Blob> {
        let path = format!(
            "/api/media/recipes/{}/assets/{}",
            path_segment(recipe_id),
            path_segment(file_name)
        );
        self.client.get_blob(&path).await
    }

    pub async fn recipe_asset_stream(&self, recipe_id: &str, file_name: &str) -> Result<ByteStream> {
        let path = format!(
            "/api/media/recipes/{}/assets/{}",
            path_segment(recipe_id),
            path_segment(file_name)
        );
        self.client.get_stream(&path).await
    }

    /// Profile image, usually `profile.webp`.
    pub async fn user_image(&self, user_id: &str, file_name: &str) -> Result<Blob> {
        let path = format!(
            "/api/media/users/{}/{}",
            path_segment(user_id),
            path_segment(file_name)
        );
        self.client.get_blob(&path).await
    }
}
