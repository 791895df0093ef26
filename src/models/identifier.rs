// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Player identifiers and the run-scoped session token.

use serde::Serialize;
use std::fmt;

/// Account name plus discriminator tag, e.g. `Faker#KR1`.
///
/// Compared by exact string match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerIdentifier(String);

impl PlayerIdentifier {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into (name, tag).
    ///
    /// `#` is the canonical separator; `-` is accepted as the URL-safe form
    /// the profile site uses. The last separator wins since names may contain
    /// dashes but tags never do.
    pub fn split_tag(&self) -> Option<(&str, &str)> {
        self.0
            .rsplit_once('#')
            .or_else(|| self.0.rsplit_once('-'))
            .filter(|(name, tag)| !name.is_empty() && !tag.is_empty())
    }

    /// Profile-site slug: `#` becomes `-`.
    pub fn profile_slug(&self) -> String {
        self.0.replace('#', "-")
    }
}

impl fmt::Display for PlayerIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build identifier required by the profile backend.
///
/// Resolved once per run and shared read-only by every pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
