// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session context resolution.
//!
//! The profile backend serves its data under a path containing the site's
//! current build id. The id is embedded in every profile page as a JSON blob,
//! so one reference page is fetched before any pipeline starts.

use crate::config::Config;
use crate::error::{Result, ScoutError};
use crate::models::SessionToken;
use crate::services::client::SourceClient;
use scraper::{Html, Selector};

/// Fetch the reference profile page and read the build id from it.
///
/// Any failure here is fatal to the run: transport problems surface as
/// `UpstreamUnavailable`, a page without the blob as `SchemaMismatch`.
pub async fn resolve_session(client: &SourceClient, config: &Config) -> Result<SessionToken> {
    let url = format!("{}/{}", config.profile_link_base(), config.reference_profile);
    tracing::info!(url = %url, "Resolving session build id");

    let html = client.get_text(&url).await.map_err(|e| match e {
        ScoutError::SchemaMismatch(_) => e,
        other => ScoutError::UpstreamUnavailable(other.to_string()),
    })?;

    let token = extract_build_id(&html)?;
    tracing::info!(build_id = token.as_str(), "Session build id resolved");
    Ok(token)
}

/// Read `buildId` from the page's `__NEXT_DATA__` script blob.
pub fn extract_build_id(html: &str) -> Result<SessionToken> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("script#__NEXT_DATA__")
        .map_err(|e| ScoutError::Internal(anyhow::anyhow!("selector: {}", e)))?;

    let blob: String = document
        .select(&selector)
        .next()
        .ok_or_else(|| ScoutError::schema("page has no __NEXT_DATA__ script"))?
        .text()
        .collect();

    let data: serde_json::Value = serde_json::from_str(blob.trim())?;
    data.get("buildId")
        .and_then(|v| v.as_str())
        .map(SessionToken::new)
        .ok_or_else(|| ScoutError::schema("__NEXT_DATA__.buildId missing or not a string"))
}
