// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod champion;
pub mod identifier;
pub mod mastery;
pub mod player;
pub mod rank;
pub mod role;

pub use champion::{ChampionCounters, ChampionStat, QueueType};
pub use identifier::{PlayerIdentifier, SessionToken};
pub use mastery::{MasteryEntry, MASTERY_SLOTS};
pub use player::{PlayerFailure, PlayerRecord, ScoutReport};
pub use rank::RankStats;
pub use role::Role;
