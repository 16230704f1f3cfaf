//! Redis-over-REST key-value client
//!
//! Speaks the command-per-path protocol of hosted Redis REST services:
//! `GET {url}/get/{key}` and `POST {url}/set/{key}` with the value as body,
//! both answering `{"result": ...}` or `{"error": "..."}`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::GraphStore;
use crate::error::StoreError;

#[derive(Debug, Deserialize)]
struct KvResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Client for a REST key-value endpoint authenticated with a bearer token
#[derive(Debug, Clone)]
pub struct RestKvStore {
    client: Client,
    base_url: String,
    token: String,
}

impl RestKvStore {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, token)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token: token.into(),
        }
    }

    fn command_url(&self, command: &str, key: &str) -> String {
        format!("{}/{}/{}", self.base_url, command, urlencoding::encode(key))
    }

    async fn into_result(response: reqwest::Response) -> Result<Option<Value>, StoreError> {
        let status = response.status();
        let body = response.text().await?;
        let parsed: KvResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(StoreError::backend(format!("status {status}")));
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(error) = parsed.error {
            return Err(StoreError::Backend(error));
        }
        if !status.is_success() {
            return Err(StoreError::backend(format!("status {status}")));
        }
        Ok(parsed.result.filter(|v| !v.is_null()))
    }
}

#[async_trait]
impl GraphStore for RestKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let response = self
            .client
            .get(self.command_url("get", key))
            .bearer_auth(&self.token)
            .send()
            .await?;

        Ok(Self::into_result(response).await?.map(|value| match value {
            Value::String(s) => s,
            other => other.to_string(),
        }))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.command_url("set", key))
            .bearer_auth(&self.token)
            .body(value)
            .send()
            .await?;

        Self::into_result(response).await?;
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "rest-kv"
    }
}
