// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Thin HTTP client shared by every source.
//!
//! One `reqwest::Client` (connection pool, timeout, user agent) is built per
//! run and cloned into each pipeline.

use crate::config::Config;
use crate::error::{Result, ScoutError};
use serde::Serialize;
use std::time::Duration;

/// Longest response body excerpt kept in error messages.
const BODY_EXCERPT_LEN: usize = 200;

/// HTTP client for the stats sources.
#[derive(Clone)]
pub struct SourceClient {
    http: reqwest::Client,
}

impl SourceClient {
    /// Create a client with the configured per-request deadline and user agent.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ScoutError::Internal(anyhow::anyhow!("HTTP client build: {}", e)))?;

        Ok(Self { http })
    }

    /// GET a document as text.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await?;
        let response = self.check_response(response).await?;
        Ok(response.text().await?)
    }

    /// GET a JSON document without assuming its shape.
    pub async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST a JSON body and return the untyped JSON response.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<serde_json::Value> {
        let response = self.http.post(url).json(body).send().await?;
        let response = self.check_response(response).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// POST with no body under its own deadline, discarding the response.
    pub async fn post_empty(&self, url: &str, timeout: Duration) -> Result<()> {
        let response = self.http.post(url).timeout(timeout).send().await?;
        self.check_response(response).await?;
        Ok(())
    }

    /// Check response status and return error if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        let excerpt: String = body.chars().take(BODY_EXCERPT_LEN).collect();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScoutError::NotFound(format!("{} returned 404", url)));
        }

        tracing::debug!(status = %status, url = %url, "Source returned error status");
        Err(ScoutError::Transport(format!(
            "HTTP {} from {}: {}",
            status, url, excerpt
        )))
    }
}
