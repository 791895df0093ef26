// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The per-player data sources.
//!
//! `StatsSource` is the seam between the assembler and the network: the live
//! implementation talks to the four web backends, tests substitute fakes.

use crate::config::Config;
use crate::error::{Result, ScoutError};
use crate::models::{ChampionCounters, MasteryEntry, PlayerIdentifier, QueueType, SessionToken};
use crate::services::champion_pool::{champion_pool_url, parse_champion_pool};
use crate::services::client::SourceClient;
use crate::services::mastery::{mastery_url, parse_mastery_table};
use crate::services::profile::{parse_profile_payload, profile_data_url, renewal_url, ProfileData};
use crate::services::role_usage::{parse_role_label, role_query_body};

/// One lookup per source, each attempted once.
#[async_trait::async_trait]
pub trait StatsSource: Send + Sync {
    /// Profile and league stats. `NotFound` if the account does not exist.
    async fn fetch_profile(
        &self,
        session: &SessionToken,
        identifier: &PlayerIdentifier,
    ) -> Result<ProfileData>;

    /// Most-played role label as the source spells it.
    async fn fetch_role_label(&self, identifier: &PlayerIdentifier) -> Result<Option<String>>;

    /// Top mastery rows.
    async fn fetch_masteries(&self, identifier: &PlayerIdentifier) -> Result<Vec<MasteryEntry>>;

    /// Most-played champions in one ranked queue, capped.
    async fn fetch_champion_pool(
        &self,
        summoner_id: &str,
        queue: QueueType,
    ) -> Result<Vec<ChampionCounters>>;
}

/// Live sources over HTTP.
#[derive(Clone)]
pub struct WebSources {
    client: SourceClient,
    config: Config,
}

impl WebSources {
    pub fn new(client: SourceClient, config: Config) -> Self {
        Self { client, config }
    }

    /// Ask the profile source to refresh its stats.
    ///
    /// Best-effort: the primary lookup already succeeded, so failure is logged
    /// and ignored. Bounded by the shorter renewal deadline.
    async fn request_renewal(&self, summoner_id: &str) {
        let url = renewal_url(&self.config.opgg_api_base, &self.config.region, summoner_id);
        let timeout = self.config.renewal_timeout;
        if let Err(e) = self.client.post_empty(&url, timeout).await {
            tracing::warn!(summoner_id, error = %e, "Profile renewal failed, continuing");
        }
    }
}

#[async_trait::async_trait]
impl StatsSource for WebSources {
    async fn fetch_profile(
        &self,
        session: &SessionToken,
        identifier: &PlayerIdentifier,
    ) -> Result<ProfileData> {
        let url = profile_data_url(
            &self.config.opgg_web_base,
            &self.config.region,
            session,
            identifier,
        );
        let payload = self.client.get_json(&url).await?;
        let profile = parse_profile_payload(&payload, identifier)?;

        self.request_renewal(&profile.summoner_id).await;
        Ok(profile)
    }

    async fn fetch_role_label(&self, identifier: &PlayerIdentifier) -> Result<Option<String>> {
        // Scoped to this pipeline: the link itself parsed fine.
        let (name, tag) = identifier.split_tag().ok_or_else(|| {
            ScoutError::schema(format!("identifier {} has no tag for role lookup", identifier))
        })?;

        let body = role_query_body(name, tag, &self.config.region);
        let response = self
            .client
            .post_json(&self.config.role_api_url, &body)
            .await?;
        parse_role_label(&response)
    }

    async fn fetch_masteries(&self, identifier: &PlayerIdentifier) -> Result<Vec<MasteryEntry>> {
        let url = mastery_url(&self.config.mastery_base, &self.config.region, identifier);
        let html = self.client.get_text(&url).await?;
        parse_mastery_table(&html)
    }

    async fn fetch_champion_pool(
        &self,
        summoner_id: &str,
        queue: QueueType,
    ) -> Result<Vec<ChampionCounters>> {
        let url = champion_pool_url(
            &self.config.opgg_api_base,
            &self.config.region,
            summoner_id,
            queue,
            self.config.season_id,
        );
        let payload = self.client.get_json(&url).await?;
        parse_champion_pool(&payload)
    }
}
