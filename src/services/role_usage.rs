// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Role-usage query and response handling.

use crate::error::{Result, ScoutError};
use serde_json::{json, Value};

const OPERATION_NAME: &str = "LolProfilePageSummonerInfoQuery";
const PERSISTED_QUERY_HASH: &str =
    "69fd82d266137c011d209634e4b09ab5a8c66d415a19676c06aa90b1ba7632fe";

/// Location of the most-played role object in the response.
const ROLE_POINTER: &str = "/data/lol/player/roleStats/filters/actual";

/// Persisted-query request body for one player.
pub fn role_query_body(game_name: &str, tag_line: &str, region: &str) -> Value {
    json!({
        "operationName": OPERATION_NAME,
        "variables": {
            "gameName": game_name,
            "tagLine": tag_line,
            "region": region.to_ascii_uppercase(),
            "sQueue": null,
            "sRole": null,
            "sChampion": null
        },
        "extensions": {
            "persistedQuery": {
                "version": 1,
                "sha256Hash": PERSISTED_QUERY_HASH
            }
        }
    })
}

/// Read the most-played role label.
///
/// A null label (no recent games) is `None`; a missing path or a non-string
/// label is a schema error.
pub fn parse_role_label(response: &Value) -> Result<Option<String>> {
    let actual = response
        .pointer(ROLE_POINTER)
        .filter(|v| v.is_object())
        .ok_or_else(|| ScoutError::schema(format!("role response has no {}", ROLE_POINTER)))?;

    match actual.get("rolename") {
        Some(Value::String(label)) => Ok(Some(label.clone())),
        Some(Value::Null) => Ok(None),
        Some(other) => Err(ScoutError::schema(format!(
            "rolename is not a string: {}",
            other
        ))),
        None => Err(ScoutError::schema("role response has no rolename")),
    }
}
