// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Champion-pool response handling, shared by both ranked queues.

use crate::error::{Result, ScoutError};
use crate::models::champion::CHAMPION_POOL_CAP;
use crate::models::{ChampionCounters, QueueType};
use serde::Deserialize;
use serde_json::Value;

/// Champion-pool URL for one queue.
pub fn champion_pool_url(
    api_base: &str,
    region: &str,
    summoner_id: &str,
    queue: QueueType,
    season_id: u32,
) -> String {
    format!(
        "{}/summoners/{}/{}/most-champions/rank?game_type={}&season_id={}",
        api_base,
        region,
        summoner_id,
        queue.game_type(),
        season_id
    )
}

/// Parse the first [`CHAMPION_POOL_CAP`] champion entries.
///
/// The source sends `"data": []` for a queue with no games; that is an empty
/// pool, not an error.
pub fn parse_champion_pool(payload: &Value) -> Result<Vec<ChampionCounters>> {
    let data = payload
        .get("data")
        .ok_or_else(|| ScoutError::schema("champion pool has no data field"))?;

    match data {
        Value::Array(_) => Ok(Vec::new()),
        Value::Object(fields) => {
            let stats = fields
                .get("champion_stats")
                .and_then(Value::as_array)
                .ok_or_else(|| ScoutError::schema("data.champion_stats missing or not an array"))?;

            stats
                .iter()
                .take(CHAMPION_POOL_CAP)
                .enumerate()
                .map(|(index, entry)| {
                    let counters = ChampionCounters::deserialize(entry).map_err(|e| {
                        ScoutError::schema(format!("champion_stats[{}]: {}", index, e))
                    })?;
                    if counters.win > counters.play {
                        return Err(ScoutError::schema(format!(
                            "champion_stats[{}]: win {} exceeds play {}",
                            index, counters.win, counters.play
                        )));
                    }
                    Ok(counters)
                })
                .collect()
        }
        other => Err(ScoutError::schema(format!(
            "champion pool data has unexpected type: {}",
            other
        ))),
    }
}
