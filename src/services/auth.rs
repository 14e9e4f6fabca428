//! Login and token refresh.
//!
//! Mealie issues bearer tokens from `/api/auth/token`, which takes an OAuth2
//! password form rather than JSON. The service only fetches tokens; storing
//! one is the caller's job (see [`MealieClient::login`]).

use serde::{Deserialize, Serialize};

use crate::client::{MealieClient, Result};

/// Token returned by `/api/auth/token` and `/api/auth/refresh`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Serialize)]
struct LoginForm<'a> {
    username: &'a str,
    password: &'a str,
    remember_me: bool,
}

pub struct AuthService<'a> {
    client: &'a MealieClient,
}

impl<'a> AuthService<'a> {
    pub fn new(client: &'a MealieClient) -> Self {
        Self { client }
    }

    /// `username` may be the account's username or email.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthToken> {
        tracing::debug!("Requesting token for user: {}", username);
        let form = LoginForm {
            username,
            password,
            remember_me: false,
        };
        self.client.post_form("/api/auth/token", &form).await
    }

    /// Exchanges the current token for a fresh one.
    pub async fn refresh(&self) -> Result<AuthToken> {
        self.client.get("/api/auth/refresh").await
    }
}

impl MealieClient {
    /// Logs in and stores the returned token on this client.
    ///
    /// On failure the previous token, if any, is left in place.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let token = self.auth().login(username, password).await?;
        self.set_token(token.access_token);
        tracing::debug!("Received token: {}", self.token_preview().unwrap_or_default());
        Ok(())
    }

    /// Preview of the current token safe to print in logs.
    pub fn token_preview(&self) -> Option<String> {
        self.token()
            .map(|t| format!("{}...", t.chars().take(10).collect::<String>()))
    }
}
