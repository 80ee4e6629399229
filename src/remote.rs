//! Remote translation lookup.
//!
//! One HTTP request per call, bounded by the configured timeout. Every kind of
//! failure (transport, status, payload shape) is reported as
//! `TranslateError::RemoteUnavailable` so the orchestrator can fall back.

use crate::config::{Config, RemoteProvider};
use crate::error::TranslateError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

const USER_AGENT: &str = concat!("quick-translate/", env!("CARGO_PKG_VERSION"));

/// A source of remote translations.
#[async_trait]
pub trait RemoteResolve: Send + Sync {
    /// Translate `text` from `source` to `target`.
    ///
    /// Returns the service's text verbatim, or `RemoteUnavailable`.
    async fn resolve(&self, text: &str, source: &str, target: &str)
        -> Result<String, TranslateError>;
}

/// MyMemory `GET /get` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    /// Numeric in practice, but some error responses send it as a string
    response_status: serde_json::Value,
    response_data: Option<MyMemoryData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryData {
    translated_text: String,
}

/// LibreTranslate `POST /translate` request
#[derive(Debug, Serialize)]
struct LibreTranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibreTranslateResponse {
    translated_text: String,
}

fn is_success_status(status: &serde_json::Value) -> bool {
    match status {
        serde_json::Value::Number(n) => n.as_u64() == Some(200),
        serde_json::Value::String(s) => s.trim() == "200",
        _ => false,
    }
}

/// HTTP-backed resolver for the configured provider.
#[derive(Debug, Clone)]
pub struct RemoteResolver {
    client: reqwest::Client,
    provider: RemoteProvider,
    api_url: String,
    api_key: Option<String>,
}

impl RemoteResolver {
    pub fn new(config: &Config) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TranslateError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            provider: config.provider,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn provider(&self) -> RemoteProvider {
        self.provider
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, TranslateError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        Err(TranslateError::RemoteUnavailable(format!(
            "translation API error ({}): {}",
            status, body
        )))
    }

    async fn resolve_mymemory(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let langpair = format!("{}|{}", source, target);
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let payload: MyMemoryResponse = response.json().await.map_err(|e| {
            TranslateError::RemoteUnavailable(format!("malformed MyMemory response: {}", e))
        })?;

        if !is_success_status(&payload.response_status) {
            return Err(TranslateError::RemoteUnavailable(format!(
                "MyMemory responseStatus {}",
                payload.response_status
            )));
        }

        payload
            .response_data
            .map(|data| data.translated_text)
            .ok_or_else(|| {
                TranslateError::RemoteUnavailable(
                    "MyMemory response contained no responseData".to_string(),
                )
            })
    }

    async fn resolve_libretranslate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let request = LibreTranslateRequest {
            q: text,
            source,
            target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let payload: LibreTranslateResponse = response.json().await.map_err(|e| {
            TranslateError::RemoteUnavailable(format!(
                "malformed LibreTranslate response: {}",
                e
            ))
        })?;

        Ok(payload.translated_text)
    }
}

#[async_trait]
impl RemoteResolve for RemoteResolver {
    async fn resolve(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        debug!(
            "Requesting {:?} translation {} -> {} ({} chars)",
            self.provider,
            source,
            target,
            text.chars().count()
        );

        match self.provider {
            RemoteProvider::MyMemory => self.resolve_mymemory(text, source, target).await,
            RemoteProvider::LibreTranslate => {
                self.resolve_libretranslate(text, source, target).await
            }
        }
    }
}
