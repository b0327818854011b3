//! Practicum API adapter (reqwest).
//!
//! Implements the `hwbot-core` StatusSource port over the homework-statuses
//! HTTP endpoint. Every transport or HTTP-status failure maps to
//! `Error::EndpointUnreachable`; schema checks live in the core.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use hwbot_core::{config::Config, errors::Error, ports::StatusSource, Result};

#[derive(Clone, Debug)]
pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.request_timeout)
            .build()
            .map_err(|e| Error::Config(format!("http client build failed: {e}")))?;

        Ok(Self {
            http,
            endpoint: cfg.endpoint.clone(),
            token: cfg.practicum_token.clone(),
        })
    }

    fn unreachable(&self, cause: impl std::fmt::Display) -> Error {
        Error::EndpointUnreachable {
            endpoint: self.endpoint.clone(),
            cause: cause.to_string(),
        }
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch_updates(&self, since: i64) -> Result<serde_json::Value> {
        debug!(since, "requesting homework statuses");

        let resp = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", since)])
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        if resp.status() != StatusCode::OK {
            return Err(self.unreachable(format!("status {}", resp.status())));
        }

        let payload = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| self.unreachable(e))?;

        debug!("homework statuses received");
        Ok(payload)
    }
}
