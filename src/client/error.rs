//! Error types returned by the Mealie client.
//!
//! Every non-2xx response becomes a [`MealieError`] carrying the status code,
//! status text and the raw body text. Transport and decoding failures are
//! passed through untouched in their own [`Error`] variants so callers can
//! tell "the server said no" apart from "the request never completed".

use reqwest::StatusCode;

/// Normalized error for any non-success HTTP response.
///
/// There is no taxonomy by status; branch on [`MealieError::status_code`]
/// when a specific code matters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct MealieError {
    message: String,
    status_code: u16,
    status_text: String,
    response: String,
}

impl MealieError {
    /// Builds the error from a response status and its body text.
    pub fn new(status: StatusCode, response: String) -> Self {
        let status_code = status.as_u16();
        let status_text = status.canonical_reason().unwrap_or("Unknown Status").to_string();

        let mut message = format!("{} {}", status_code, status_text);
        if let Some(detail) = detail_from_body(&response) {
            message.push_str(": ");
            message.push_str(&detail);
        }

        Self {
            message,
            status_code,
            status_text,
            response,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Raw response body text, empty if it could not be read.
    pub fn response(&self) -> &str {
        &self.response
    }

    /// The response body parsed as JSON, if it is JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.response).ok()
    }

    /// Mealie's `detail` field from the error body.
    ///
    /// FastAPI validation errors put a list under `detail`; only plain
    /// strings and `{"message": ...}` objects are surfaced here.
    pub fn detail(&self) -> Option<String> {
        detail_from_body(&self.response)
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == StatusCode::NOT_FOUND.as_u16()
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code == StatusCode::UNAUTHORIZED.as_u16()
    }
}

fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Object(detail) => detail
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
        _ => None,
    }
}

/// Every failure the client can surface.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] MealieError),

    /// The request could not be sent or the response could not be read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A success response body was not valid JSON for the requested type.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body or query parameters could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    /// The normalized HTTP error, if this is one.
    pub fn as_api(&self) -> Option<&MealieError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.as_api().map(MealieError::status_code)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
