// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Solo-queue rank summary.

use serde::Serialize;

/// Tier label used when the source reports no rank.
pub const UNRANKED: &str = "UNRANKED";

/// Ranked standing for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankStats {
    /// Tier label (e.g. "GOLD"), or [`UNRANKED`]
    pub tier: String,
    /// Division within the tier, 0 when unranked
    pub division: u32,
    /// League points
    pub lp: i32,
    /// Wins plus losses
    pub games_played: u32,
    /// Rounded win percentage in [0, 100]
    pub win_rate: u32,
}

impl RankStats {
    pub fn unranked() -> Self {
        Self {
            tier: UNRANKED.to_string(),
            division: 0,
            lp: 0,
            games_played: 0,
            win_rate: 0,
        }
    }

    pub fn new(tier: String, division: u32, lp: i32, wins: u32, losses: u32) -> Self {
        let games_played = wins.saturating_add(losses);
        Self {
            tier,
            division,
            lp,
            games_played,
            win_rate: win_rate_percent(wins, games_played),
        }
    }

    pub fn is_ranked(&self) -> bool {
        self.tier != UNRANKED
    }
}

/// Win percentage rounded half-up; zero games yields 0.
///
/// Callers guarantee `wins <= games`.
pub fn win_rate_percent(wins: u32, games: u32) -> u32 {
    if games == 0 {
        return 0;
    }
    (f64::from(wins) / f64::from(games) * 100.0).round() as u32
}
