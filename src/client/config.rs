//! Client configuration.

use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Connection settings for a Mealie server.
///
/// `base_url` is the server root (no `/api` suffix). The token, when given,
/// is copied into the client and can be rotated later with
/// [`MealieClient::set_token`](crate::client::MealieClient::set_token).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    /// Log request details through `tracing` at info level.
    pub debug: bool,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            debug: false,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Reads `MEALIE_BASE_URL`, `MEALIE_TOKEN` and `MEALIE_DEBUG`.
    ///
    /// Missing values fall back to [`DEFAULT_BASE_URL`], no token and debug
    /// off. An empty `MEALIE_TOKEN` counts as unset.
    pub fn from_env() -> Self {
        let base_url = env::var("MEALIE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let token = env::var("MEALIE_TOKEN").ok().filter(|t| !t.is_empty());
        let debug = env::var("MEALIE_DEBUG")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Self {
            base_url,
            token,
            debug,
        }
    }
}
