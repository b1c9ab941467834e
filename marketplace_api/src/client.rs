//! HTTP client for the marketplace REST API.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::{
    errors::truncate_body,
    normalize::{normalize_detail, normalize_list, Page},
    query::Query,
    Error,
};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3005";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for building a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub timeout: Duration,
    /// Bearer token sent as `Authorization` on every request.
    pub token: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            token: None,
        }
    }
}

/// HTTP client for the marketplace REST API.
///
/// The raw methods return the response body as JSON; the typed methods run it
/// through [`crate::normalize`]. Non-success statuses are mapped to [`Error`]
/// variants and are never retried.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API, without a trailing slash.
    base_api_url: String,
    token: Option<String>,
}

impl Client {
    /// Creates a client pointing at [`DEFAULT_BASE_URL`].
    pub fn new() -> Result<Self, Error> {
        Self::with_options(ClientOptions::default())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_options(ClientOptions {
            base_url: base_url.to_string(),
            ..ClientOptions::default()
        })
    }

    pub fn with_options(options: ClientOptions) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self {
            http,
            base_api_url: options.base_url.trim_end_matches('/').to_string(),
            token: options.token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: Option<&(dyn Query + Sync)>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn send<B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(%method, %url, "Sending request");
        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header("accept", "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method, url, e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            tracing::error!(
                "{} {} failed with status {}: {}",
                method,
                url,
                status,
                truncate_body(&body)
            );
            return Err(Error::from_status(status.as_u16(), &body));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str::<Value>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse response: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::MalformedResponse(e.to_string())
        })
    }

    /// GETs `path` and returns the raw JSON body.
    pub async fn get_raw(&self, path: &str, query: Option<&(dyn Query + Sync)>) -> Result<Value, Error> {
        let url = self.get_url(path, query)?;
        self.send::<()>(Method::GET, url, None).await
    }

    /// POSTs `body` as JSON to `path` and returns the raw JSON body.
    pub async fn post_raw<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, Error> {
        let url = self.get_url(path, None)?;
        self.send(Method::POST, url, Some(body)).await
    }

    /// PUTs `body` as JSON to `path` and returns the raw JSON body.
    pub async fn put_raw<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, Error> {
        let url = self.get_url(path, None)?;
        self.send(Method::PUT, url, Some(body)).await
    }

    /// DELETEs `path` and returns the raw JSON body (`Null` when empty).
    pub async fn delete_raw(&self, path: &str) -> Result<Value, Error> {
        let url = self.get_url(path, None)?;
        self.send::<()>(Method::DELETE, url, None).await
    }

    /// Fetches one page of a list endpoint.
    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &(dyn Query + Sync),
    ) -> Result<Page<T>, Error> {
        let raw = self.get_raw(path, Some(query)).await?;
        Ok(normalize_list(&raw, query.page_request()))
    }

    /// Fetches a single entity.
    pub async fn detail<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let raw = self.get_raw(path, None).await?;
        normalize_detail(&raw)
    }

    /// Creates an entity and returns it as echoed back by the server.
    pub async fn create<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let raw = self.post_raw(path, body).await?;
        normalize_detail(&raw)
    }

    /// Replaces an entity and returns it as echoed back by the server.
    pub async fn update<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let raw = self.put_raw(path, body).await?;
        normalize_detail(&raw)
    }

    /// Deletes an entity. Whatever body the server sends back is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        self.delete_raw(path).await.map(|_| ())
    }
}
