// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Lane roles.

use serde::Serialize;

/// One of the five lane roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    /// Map a source label onto a role. Unrecognized labels stay unmapped.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "TOP" => Some(Role::Top),
            "JUNGLE" => Some(Role::Jungle),
            "MID" => Some(Role::Mid),
            "ADC" => Some(Role::Adc),
            "SUPPORT" => Some(Role::Support),
            _ => None,
        }
    }

    /// Sort priority, top first.
    pub fn priority(self) -> u8 {
        match self {
            Role::Top => 1,
            Role::Jungle => 2,
            Role::Mid => 3,
            Role::Adc => 4,
            Role::Support => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JUNGLE",
            Role::Mid => "MID",
            Role::Adc => "ADC",
            Role::Support => "SUPPORT",
        }
    }
}
