//! Response containers shared by every service.
//!
//! - [`Blob`] - a fully buffered binary body (images, assets)
//! - [`ByteStream`] - a streaming reader over a binary body
//! - [`Pagination`] / [`PaginationQuery`] - Mealie's standard list envelope

use bytes::Bytes;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

/// Binary response body with the content type the server declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl Blob {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Chunks of a binary response body as they arrive.
pub type ByteStream = BoxStream<'static, reqwest::Result<Bytes>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

/// Paging and filtering parameters accepted by Mealie list endpoints.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    pub page: Option<u32>,
    /// `-1` asks the server for every item.
    pub per_page: Option<i32>,
    pub order_by: Option<String>,
    pub order_direction: Option<OrderDirection>,
    pub query_filter: Option<String>,
    pub search: Option<String>,
}

impl PaginationQuery {
    pub fn page(page: u32, per_page: i32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            ..Self::default()
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }
}

/// Standard list envelope returned by paginated endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    pub page: u32,
    pub per_page: i32,
    pub total: u64,
    pub total_pages: u32,
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}
