// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Champion mastery rows.

use serde::Serialize;

/// Number of mastery rows kept per player.
pub const MASTERY_SLOTS: usize = 10;

/// One row of the mastery table, as labelled by the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasteryEntry {
    pub name: String,
    pub level: String,
    pub points: String,
}

impl MasteryEntry {
    /// Points as a number, ignoring thousands separators.
    pub fn points_value(&self) -> Option<u64> {
        let digits: String = self
            .points
            .chars()
            .filter(|c| !matches!(c, ',' | '.' | ' ' | '\u{a0}'))
            .collect();
        digits.parse().ok()
    }
}
