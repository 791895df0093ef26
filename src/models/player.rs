// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Assembled player records and the run report.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::{ChampionStat, MasteryEntry, PlayerIdentifier, RankStats, Role};
use crate::error::{ErrorKind, ScoutError};

/// Everything gathered for one player. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub identifier: PlayerIdentifier,
    /// Profile backend's internal id
    pub summoner_id: String,
    pub rank: RankStats,
    /// Most-played role, if the source label maps onto one
    pub role: Option<Role>,
    /// Role label exactly as the source reported it
    pub role_label: Option<String>,
    pub solo_champions: Vec<ChampionStat>,
    pub flex_champions: Vec<ChampionStat>,
    /// Exactly [`super::MASTERY_SLOTS`] rows
    pub masteries: Vec<MasteryEntry>,
    pub profile_link: String,
}

/// An identifier whose pipeline ended in an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerFailure {
    pub identifier: PlayerIdentifier,
    pub kind: ErrorKind,
    pub message: String,
}

impl PlayerFailure {
    pub fn new(identifier: PlayerIdentifier, error: &ScoutError) -> Self {
        Self {
            identifier,
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Output of one run, handed to whatever renders it.
///
/// Every requested identifier appears exactly once, in `records` or in
/// `failures`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoutReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Multi-search link the identifiers came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_link: Option<String>,
    /// RFC3339 time the report was produced
    pub generated_at: String,
    pub records: Vec<PlayerRecord>,
    pub failures: Vec<PlayerFailure>,
}

impl ScoutReport {
    /// Stamp a report with the current time.
    pub fn new(records: Vec<PlayerRecord>, failures: Vec<PlayerFailure>) -> Self {
        Self {
            team: None,
            multi_link: None,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            records,
            failures,
        }
    }

    /// Total identifiers covered (completed plus failed).
    pub fn len(&self) -> usize {
        self.records.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All identifiers in the report, completed first.
    pub fn identifiers(&self) -> impl Iterator<Item = &PlayerIdentifier> {
        self.records
            .iter()
            .map(|r| &r.identifier)
            .chain(self.failures.iter().map(|f| &f.identifier))
    }
}
