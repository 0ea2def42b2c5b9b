//! HTTP transport carrying the static authorization header.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde_json::Value;

use super::ApiRequest;
use crate::config::ClientConfig;
use crate::error::DiscordError;

/// Sends one request and returns the decoded response body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value>;
}

/// reqwest-backed [`Transport`].
///
/// Transport failures and non-success statuses are returned as the original
/// `reqwest::Error`, so callers can downcast to inspect the status code.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    api_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut auth_value = HeaderValue::from_str(config.token())
            .map_err(|e| DiscordError::InvalidToken(e.to_string()))?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);
        debug!("Using Discord token {}", config.masked_token());

        let client = Client::builder()
            .user_agent(config.user_agent())
            .default_headers(headers)
            .build()?;

        Ok(Self::from_client(client, config.api_url()))
    }

    /// Wraps an already configured reqwest Client.
    pub fn from_client(client: Client, api_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[tracing::instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = format!("{}{}", self.api_url, request.path);
        debug!("{} {}...", request.method, url);

        let mut builder = self.client.request(request.method, &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let response = response.error_for_status()?;
        let bytes = response.bytes().await?;

        decode_body(&bytes)
    }
}

/// Empty bodies (e.g. `204 No Content`) decode to `null`.
fn decode_body(bytes: &[u8]) -> Result<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).context("Failed to parse JSON response from Discord API")
}
