use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{PitwallError, Result};

/// Something that answers JSON POSTs on endpoint paths.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait AiBackend {
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value>;
}

pub struct AiClient {
    http: Client,
    config: ApiConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: String,
}

impl AiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn health(&self) -> Result<Health> {
        let url = self.config.endpoint(&self.config.health_path)?;
        let response = self.http.get(url).send().await?;
        let data = Self::read_json(response).await?;
        serde_json::from_value(data).map_err(PitwallError::Decode)
    }

    async fn send<T: Serialize>(&self, path: &str, body: &T) -> Result<Value> {
        let url = self.config.endpoint(path)?;
        debug!(%url, "POST");

        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn read_json(response: reqwest::Response) -> Result<Value> {
        if !response.status().is_success() {
            return Err(PitwallError::Api {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let body = response.text().await?;
        match serde_json::from_str(&body).map_err(PitwallError::Decode)? {
            Value::Null => Err(PitwallError::EmptyResponse),
            data => Ok(data),
        }
    }
}

#[async_trait(?Send)]
impl AiBackend for AiClient {
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        self.send(path, body).await
    }
}
