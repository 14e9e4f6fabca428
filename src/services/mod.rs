//! Resource services.
//!
//! Each service borrows a [`MealieClient`](crate::client::MealieClient) and
//! maps one group of endpoints onto the client's verbs. They add no retries,
//! caching or validation of their own. Obtain them through the accessors on
//! the client, e.g. `client.foods()`.

pub mod app;
pub mod auth;
pub mod foods;
pub mod households;
pub mod media;
pub mod organizers;
pub mod recipes;
pub mod shared_recipes;
pub mod units;
pub mod users;

use serde::{Deserialize, Serialize};

pub use app::AppService;
pub use auth::AuthService;
pub use foods::FoodsService;
pub use households::HouseholdsService;
pub use media::MediaService;
pub use organizers::OrganizersService;
pub use recipes::RecipesService;
pub use shared_recipes::SharedRecipesService;
pub use units::UnitsService;
pub use users::UsersService;

/// Generic acknowledgement body used by merge and bulk endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub message: String,
    #[serde(default)]
    pub error: bool,
}

/// Percent-encodes a caller-supplied id, slug or file name for use as one
/// path segment.
pub(crate) fn path_segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}
