// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Per-champion ranked statistics.

use serde::{Deserialize, Serialize};

use super::rank::win_rate_percent;

/// Most-played champions kept per queue.
pub const CHAMPION_POOL_CAP: usize = 10;

/// Ranked matchmaking queue with its own champion pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueType {
    Solo,
    Flex,
}

impl QueueType {
    /// `game_type` query value expected by the champion-pool endpoint.
    pub fn game_type(self) -> &'static str {
        match self {
            QueueType::Solo => "SOLORANKED",
            QueueType::Flex => "FLEXRANKED",
        }
    }
}

/// Raw counters for one champion as reported by the champion-pool endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChampionCounters {
    pub id: u32,
    pub play: u32,
    pub win: u32,
    pub kill: u32,
    pub death: u32,
    pub assist: u32,
    pub minion_kill: u32,
    pub neutral_minion_kill: u32,
    pub game_length_second: u64,
}

/// Derived statistics for one champion in one queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionStat {
    pub name: String,
    pub games_played: u32,
    /// Rounded win percentage
    pub win_rate: u32,
    pub kda: f64,
    /// Creep score per minute
    pub cspm: f64,
}

impl ChampionStat {
    pub fn from_counters(name: String, counters: &ChampionCounters) -> Self {
        Self {
            name,
            games_played: counters.play,
            win_rate: win_rate_percent(counters.win, counters.play),
            kda: kda(counters.kill, counters.death, counters.assist),
            cspm: cs_per_minute(
                counters.minion_kill,
                counters.neutral_minion_kill,
                counters.game_length_second,
            ),
        }
    }
}

/// `(kills + assists) / max(deaths, 1)`
pub fn kda(kills: u32, deaths: u32, assists: u32) -> f64 {
    (f64::from(kills) + f64::from(assists)) / f64::from(deaths.max(1))
}

/// Minion plus neutral kills per minute of game time; 0 for zero-length games.
pub fn cs_per_minute(minion_kills: u32, neutral_kills: u32, game_length_seconds: u64) -> f64 {
    if game_length_seconds == 0 {
        return 0.0;
    }
    let minutes = game_length_seconds as f64 / 60.0;
    (f64::from(minion_kills) + f64::from(neutral_kills)) / minutes
}
