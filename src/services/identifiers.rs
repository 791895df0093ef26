// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Multi-search link parsing.

use crate::error::{Result, ScoutError};
use crate::models::PlayerIdentifier;

/// Extract the player identifiers from a shareable multi-search link.
///
/// The value of the first query parameter is percent-decoded (with `+` read
/// as a space) and split on commas. Pieces are trimmed, empty pieces dropped,
/// order and duplicates kept.
pub fn parse_multi_link(link: &str) -> Result<Vec<PlayerIdentifier>> {
    let (_, query_value) = link
        .trim()
        .split_once('=')
        .ok_or_else(|| ScoutError::MalformedInput("link has no query parameter".to_string()))?;

    let raw = query_value
        .split('&')
        .next()
        .unwrap_or_default()
        .replace('+', " ");

    validate_escapes(&raw)?;
    let decoded = urlencoding::decode(&raw)
        .map_err(|e| ScoutError::MalformedInput(format!("percent-decoding failed: {}", e)))?;

    Ok(decoded
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(PlayerIdentifier::new)
        .collect())
}

/// Every `%` must start a two-digit hex escape.
fn validate_escapes(raw: &str) -> Result<()> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(ScoutError::MalformedInput(format!(
                    "invalid percent escape at byte {}",
                    i
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
