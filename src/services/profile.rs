// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile/rank payload validation.
//!
//! The profile backend is the site's page-data endpoint, so the payload is
//! whatever the page renders from. Only the fields read here are validated.

use crate::error::{Result, ScoutError};
use crate::models::{PlayerIdentifier, RankStats, SessionToken};
use serde::Deserialize;

/// Validated subset of the profile page data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileData {
    /// Internal id used by the champion-pool and renewal endpoints
    pub summoner_id: String,
    pub league_stats: Vec<LeagueStat>,
}

/// Ranked standing in one queue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeagueStat {
    #[serde(default)]
    pub queue_info: Option<QueueInfo>,
    pub tier_info: TierInfo,
    pub win: Option<u32>,
    pub lose: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueueInfo {
    pub game_type: Option<String>,
}

/// Tier fields are all null for unranked accounts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TierInfo {
    pub tier: Option<String>,
    pub division: Option<u32>,
    pub lp: Option<i32>,
}

impl ProfileData {
    /// Solo-queue standing, or the first listed queue when none is labelled.
    pub fn rank(&self) -> Result<RankStats> {
        let stat = self
            .league_stats
            .iter()
            .find(|s| {
                s.queue_info
                    .as_ref()
                    .and_then(|q| q.game_type.as_deref())
                    == Some("SOLORANKED")
            })
            .or_else(|| self.league_stats.first())
            .ok_or_else(|| ScoutError::schema("league_stats is empty"))?;

        stat.rank()
    }
}

impl LeagueStat {
    pub fn rank(&self) -> Result<RankStats> {
        let Some(tier) = &self.tier_info.tier else {
            return Ok(RankStats::unranked());
        };

        let division = self
            .tier_info
            .division
            .ok_or_else(|| ScoutError::schema("tier_info.division missing for ranked tier"))?;
        let lp = self
            .tier_info
            .lp
            .ok_or_else(|| ScoutError::schema("tier_info.lp missing for ranked tier"))?;
        let wins = self
            .win
            .ok_or_else(|| ScoutError::schema("win missing for ranked tier"))?;
        let losses = self
            .lose
            .ok_or_else(|| ScoutError::schema("lose missing for ranked tier"))?;

        Ok(RankStats::new(tier.clone(), division, lp, wins, losses))
    }
}

/// Page-data URL for a player's profile.
pub fn profile_data_url(
    web_base: &str,
    region: &str,
    session: &SessionToken,
    identifier: &PlayerIdentifier,
) -> String {
    let slug = identifier.profile_slug().replace(' ', "+");
    format!(
        "{}/_next/data/{}/en_US/summoners/{}/{}/champions.json?region={}&summoner={}",
        web_base,
        session.as_str(),
        region,
        slug,
        region,
        slug
    )
}

/// Endpoint that asks the source to refresh a player's stats.
pub fn renewal_url(api_base: &str, region: &str, summoner_id: &str) -> String {
    format!("{}/summoners/{}/{}/renewal", api_base, region, summoner_id)
}

/// Public profile page for a player.
pub fn profile_link(link_base: &str, identifier: &PlayerIdentifier) -> String {
    format!("{}/{}", link_base, identifier.profile_slug())
}

/// Validate a profile payload.
///
/// An `error` entry under `pageProps` means the account does not exist.
pub fn parse_profile_payload(
    payload: &serde_json::Value,
    identifier: &PlayerIdentifier,
) -> Result<ProfileData> {
    let page_props = payload
        .get("pageProps")
        .filter(|v| v.is_object())
        .ok_or_else(|| ScoutError::schema("profile payload has no pageProps object"))?;

    if page_props.get("error").is_some_and(|e| !e.is_null()) {
        return Err(ScoutError::NotFound(format!(
            "profile source has no account {}",
            identifier
        )));
    }

    let data = page_props
        .get("data")
        .filter(|v| v.is_object())
        .ok_or_else(|| ScoutError::schema("pageProps.data missing or not an object"))?;

    ProfileData::deserialize(data)
        .map_err(|e| ScoutError::schema(format!("pageProps.data: {}", e)))
}
