use futures::StreamExt;
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::client::{
    config::ClientConfig,
    error::{Error, MealieError, Result},
    query::build_query,
    types::{Blob, ByteStream},
};
use crate::services::{
    AppService, AuthService, FoodsService, HouseholdsService, MediaService, OrganizersService,
    RecipesService, SharedRecipesService, UnitsService, UsersService,
};

const HTTP_TARGET: &str = "mealie_client::http";

/// Request dispatcher shared by every resource service.
///
/// Builds absolute URLs from the configured base address, attaches the bearer
/// token when one is set, sends the request and classifies the response.
/// Any non-2xx status becomes [`Error::Api`]; nothing is retried.
#[derive(Debug, Clone)]
pub struct MealieClient {
    base_url: String,
    http: Client,
    token: Option<String>,
    debug: bool,
}

impl MealieClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Uses a caller-built `reqwest::Client`, e.g. one with a timeout.
    pub fn with_http_client(config: ClientConfig, http: Client) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            token: config.token,
            debug: config.debug,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Absolute URL for a server-relative path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    // Service views

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    pub fn app(&self) -> AppService<'_> {
        AppService::new(self)
    }

    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    pub fn foods(&self) -> FoodsService<'_> {
        FoodsService::new(self)
    }

    pub fn units(&self) -> UnitsService<'_> {
        UnitsService::new(self)
    }

    pub fn organizers(&self) -> OrganizersService<'_> {
        OrganizersService::new(self)
    }

    pub fn recipes(&self) -> RecipesService<'_> {
        RecipesService::new(self)
    }

    pub fn shared_recipes(&self) -> SharedRecipesService<'_> {
        SharedRecipesService::new(self)
    }

    pub fn media(&self) -> MediaService<'_> {
        MediaService::new(self)
    }

    pub fn households(&self) -> HouseholdsService<'_> {
        HouseholdsService::new(self)
    }

    // JSON verbs

    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch(self.request(Method::GET, path, None)).await?;
        read_json(response).await
    }

    /// GET with query parameters. See [`build_query`] for how `params` is
    /// flattened.
    pub async fn get_with<T, P>(&self, path: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let query = build_query(params)?;
        let response = self.dispatch(self.request(Method::GET, path, Some(&query))).await?;
        read_json(response).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = with_json(self.request(Method::POST, path, None), body)?;
        read_json(self.dispatch(builder).await?).await
    }

    pub async fn post_empty<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch(self.request(Method::POST, path, None)).await?;
        read_json(response).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form<T, F>(&self, path: &str, form: &F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path, None).form(form);
        read_json(self.dispatch(builder).await?).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = with_json(self.request(Method::PUT, path, None), body)?;
        read_json(self.dispatch(builder).await?).await
    }

    pub async fn put_empty<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch(self.request(Method::PUT, path, None)).await?;
        read_json(response).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = with_json(self.request(Method::PATCH, path, None), body)?;
        read_json(self.dispatch(builder).await?).await
    }

    /// DELETE. An empty or 204 body decodes as JSON `null`, so `()` and
    /// `Option<_>` targets succeed without a payload.
    pub async fn delete<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch(self.request(Method::DELETE, path, None)).await?;
        read_json(response).await
    }

    // Binary verbs

    /// Buffers a binary body. The body is never parsed as JSON, whatever
    /// content type the server declares.
    pub async fn get_blob(&self, path: &str) -> Result<Blob> {
        let response = self.dispatch(self.request(Method::GET, path, None)).await?;
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?;

        Ok(Blob {
            content_type,
            bytes,
        })
    }

    /// Streams a binary body chunk by chunk.
    pub async fn get_stream(&self, path: &str) -> Result<ByteStream> {
        let response = self.dispatch(self.request(Method::GET, path, None)).await?;
        Ok(response.bytes_stream().boxed())
    }

    fn request(&self, method: Method, path: &str, query: Option<&str>) -> RequestBuilder {
        let mut url = self.url(path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(query);
        }

        let mut builder = self.http.request(method, &url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response> {
        let (client, request) = builder.build_split();
        let request = request?;
        let method = request.method().clone();
        let url = request.url().clone();

        if self.debug {
            tracing::info!(
                target: HTTP_TARGET,
                %method,
                %url,
                authenticated = request.headers().contains_key(header::AUTHORIZATION),
                "sending request"
            );
        }

        let response = client.execute(request).await?;
        let status = response.status();

        if self.debug {
            tracing::info!(target: HTTP_TARGET, %method, %url, %status, "received response");
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MealieError::new(status, body).into());
        }

        Ok(response)
    }
}

fn with_json<B>(builder: RequestBuilder, body: &B) -> Result<RequestBuilder>
where
    B: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec(body).map_err(Error::Encode)?;
    Ok(builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(bytes))
}

async fn read_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    if response.status() == StatusCode::NO_CONTENT {
        return serde_json::from_value(serde_json::Value::Null).map_err(Error::Decode);
    }

    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_value(serde_json::Value::Null).map_err(Error::Decode);
    }

    serde_json::from_slice(&bytes).map_err(Error::Decode)
}
